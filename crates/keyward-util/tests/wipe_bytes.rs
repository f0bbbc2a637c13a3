// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod wipe_bytes_tests {
    use keyward_util::{is_slice_zeroized, move_bytes, wipe_bytes};

    #[test]
    fn test_wipe_bytes_zeroes_everything() {
        let mut data = [0xAAu8; 33];
        wipe_bytes(&mut data);

        assert!(is_slice_zeroized(&data));
    }

    #[test]
    fn test_wipe_bytes_empty() {
        let mut data: [u8; 0] = [];
        wipe_bytes(&mut data);

        assert!(is_slice_zeroized(&data));
    }

    #[test]
    fn test_is_slice_zeroized_detects_last_byte() {
        let mut data = [0u8; 16];
        data[15] = 1;

        assert!(!is_slice_zeroized(&data));
    }

    #[test]
    fn test_move_bytes_wipes_source() {
        let mut src = *b"secret";
        let mut dst = [0u8; 8];

        move_bytes(&mut src, &mut dst);

        assert_eq!(&dst[..6], b"secret");
        assert_eq!(&dst[6..], &[0, 0]);
        assert!(is_slice_zeroized(&src));
    }

    #[test]
    #[should_panic]
    fn test_move_bytes_panics_on_short_destination() {
        let mut src = [1u8; 4];
        let mut dst = [0u8; 2];

        move_bytes(&mut src, &mut dst);
    }
}
