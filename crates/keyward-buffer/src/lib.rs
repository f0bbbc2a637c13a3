// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Page-locked buffers for key material.
//!
//! [`SecureBuffer`] owns a fixed number of bytes that live in an `mmap`'d region
//! locked into RAM with `mlock`. The bytes are zeroed on allocation and wiped
//! again before the region is unlocked and unmapped.
//!
//! # Guarantees
//!
//! - Content is zeroed before deallocation, on every exit path (including unwinding).
//! - The region is excluded from swap for the whole lifetime of the buffer.
//! - There is no `Clone`; [`SecureBuffer::duplicate`] is the only way to copy.
//! - Equality runs in constant time for equal lengths.
//! - `Debug` never prints the content.
//!
//! Allocation or lock failures are returned as [`BufferError`]; a buffer is never
//! silently backed by unlocked memory.
//!
//! # Example
//!
//! ```rust
//! use keyward_buffer::{BufferError, SecureBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let key = SecureBuffer::create(4, |bytes| {
//!         bytes.copy_from_slice(&[1, 2, 3, 4]);
//!         Ok::<_, BufferError>(())
//!     })?;
//!
//!     key.with_bytes(|bytes| assert_eq!(bytes, &[1, 2, 3, 4]));
//!     assert_eq!(key.bit_count(), 32);
//!
//!     // Wiped, unlocked and unmapped here
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(not(unix))]
compile_error!("keyward-buffer requires a unix target (mmap + mlock)");

#[cfg(test)]
mod tests;

mod error;
mod page;
mod secure_buffer;

pub use error::{BufferError, PageError};
pub use secure_buffer::SecureBuffer;
