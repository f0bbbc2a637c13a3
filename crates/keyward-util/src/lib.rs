// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-level helpers shared by the keyward crates.
//!
//! Comparisons run in constant time for equal-length inputs and wipes go through
//! volatile writes so the compiler cannot elide them.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Constant-time equality comparison for byte slices.
///
/// Slices of different length compare unequal immediately. For equal lengths the
/// running time does not depend on the position of the first differing byte.
///
/// # Example
///
/// ```
/// use keyward_util::constant_time_eq;
///
/// assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
/// assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Overwrites every byte of `slice` with zero.
///
/// ```
/// use keyward_util::{is_slice_zeroized, wipe_bytes};
///
/// let mut secret = *b"hunter2";
/// wipe_bytes(&mut secret);
/// assert!(is_slice_zeroized(&secret));
/// ```
#[inline]
pub fn wipe_bytes(slice: &mut [u8]) {
    slice.zeroize();
}

/// Returns `true` if every byte of `slice` is zero.
#[inline]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().fold(0u8, |acc, b| acc | b) == 0
}

/// Copies `src` into the front of `dst` and wipes `src` afterwards.
///
/// # Panics
///
/// Panics if `dst` is shorter than `src`.
#[inline]
pub fn move_bytes(src: &mut [u8], dst: &mut [u8]) {
    dst[..src.len()].copy_from_slice(src);
    wipe_bytes(src);
}
