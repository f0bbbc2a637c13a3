// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for keyward-buffer.
use thiserror::Error;

use keyward_rand::EntropyError;

/// Errors from page syscalls.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum PageError {
    /// `mmap` failed or the size overflowed.
    #[error("mmap failed")]
    Create = 0,

    /// `mlock` failed.
    #[error("mlock failed")]
    Lock = 1,

    /// `madvise` failed.
    #[error("madvise(MADV_DONTDUMP) failed")]
    Madvise = 2,
}

/// Errors that can occur when creating a [`SecureBuffer`](crate::SecureBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The region could not be mapped (or its size overflowed).
    #[error("AllocationFailed")]
    AllocationFailed,

    /// The region could not be locked into RAM.
    #[error("MemoryLockFailed")]
    MemoryLockFailed,

    /// The entropy source failed while filling a random buffer.
    #[error("RandomGenerationFailed")]
    RandomGenerationFailed,
}

impl From<PageError> for BufferError {
    fn from(error: PageError) -> Self {
        match error {
            PageError::Create => Self::AllocationFailed,
            PageError::Lock | PageError::Madvise => Self::MemoryLockFailed,
        }
    }
}

impl From<EntropyError> for BufferError {
    fn from(_: EntropyError) -> Self {
        Self::RandomGenerationFailed
    }
}
