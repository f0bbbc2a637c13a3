// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod constant_time_eq_tests {
    use keyward_util::constant_time_eq;
    use proptest::prelude::*;

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_different_slices() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 6]));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_eq(&[1, 2, 3, 4, 5], &[1, 2, 3, 4]));
    }

    #[test]
    fn test_empty_slices() {
        let a: [u8; 0] = [];
        assert!(constant_time_eq(&a, &a));
    }

    #[test]
    fn test_first_byte_difference() {
        assert!(!constant_time_eq(&[9, 0, 0, 0, 0], &[0, 0, 0, 0, 0]));
    }

    proptest! {
        #[test]
        fn prop_agrees_with_slice_eq(
            a in proptest::collection::vec(any::<u8>(), 0..64),
            b in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            prop_assert_eq!(constant_time_eq(&a, &b), a == b);
        }
    }
}
