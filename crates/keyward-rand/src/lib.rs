// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # keyward_rand
//!
//! Cryptographically secure random bytes for keyward.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`EntropySource`]: interface every random source implements
//!
//! ## Example
//!
//! ```rust
//! use keyward_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut iv = [0u8; 16];
//! entropy.fill_bytes(&mut iv).expect("Failed to fill_bytes(..)");
//! ```
//!
//! ## Integration
//!
//! - **keyward-buffer**: `SecureBuffer::create_random` fills locked pages in place
//! - **keyward-soft**: key generation and IV creation

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
