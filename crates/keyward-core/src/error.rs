// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error taxonomy shared by every keyward operation.

use thiserror::Error;

use keyward_buffer::BufferError;

/// Normalized category of a provider failure.
///
/// Providers map their native errors onto one of these; the native type never
/// crosses the capability-trait boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// The provider does not implement the requested algorithm or key size.
    UnsupportedAlgorithm,
    /// The provider rejected the input (malformed encoding, bad padding, ...).
    InvalidInput,
    /// The key refuses export (hardware-isolated or non-extractable).
    KeyNotExportable,
    /// The primitive itself failed.
    OperationFailed,
    /// Key derivation failed.
    DerivationFailed,
    /// Anything else.
    Internal,
}

/// Errors returned by keyward operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// A secure buffer could not be mapped.
    #[error("AllocationFailed")]
    AllocationFailed,

    /// A secure buffer could not be locked into RAM.
    #[error("MemoryLockFailed")]
    MemoryLockFailed,

    /// The entropy source failed.
    #[error("RandomGenerationFailed")]
    RandomGenerationFailed,

    /// Buffer length or content does not fit the requested key type.
    #[error("InvalidKeyMaterial")]
    InvalidKeyMaterial,

    /// The provider handle reports a class/type other than the one claimed.
    #[error("InvalidProviderHandle")]
    InvalidProviderHandle,

    /// Plaintext, ciphertext or digest length violates the algorithm/key limits.
    #[error("DataLengthInvalid")]
    DataLengthInvalid,

    /// The password is not valid UTF-8.
    #[error("InvalidPassword")]
    InvalidPassword,

    /// The salt is not valid UTF-8.
    #[error("InvalidSalt")]
    InvalidSalt,

    /// The initialization vector has the wrong size.
    #[error("InvalidIvSize: expected {expected} bytes")]
    InvalidIvSize {
        /// Required IV length in bytes.
        expected: usize,
    },

    /// The operation makes no sense for this key or algorithm.
    #[error("UnsupportedOperation")]
    UnsupportedOperation,

    /// A provider call failed.
    #[error("ProviderError: {kind:?} (code {code})")]
    Provider {
        /// Normalized failure category.
        kind: ProviderErrorKind,
        /// Opaque provider diagnostic code, for logs.
        code: i64,
    },
}

impl From<BufferError> for CryptoError {
    fn from(error: BufferError) -> Self {
        match error {
            BufferError::AllocationFailed => Self::AllocationFailed,
            BufferError::MemoryLockFailed => Self::MemoryLockFailed,
            BufferError::RandomGenerationFailed => Self::RandomGenerationFailed,
        }
    }
}

/// A signature did not verify.
///
/// Only produced by [`Verification::into_result`]; verification itself reports
/// a mismatch as [`Verification::Invalid`], never as a [`CryptoError`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("VerificationFailed")]
pub struct VerificationFailed;

/// Outcome of a signature or MAC check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Verification {
    /// The signature matches.
    Valid,
    /// The signature does not match the data.
    Invalid,
}

impl Verification {
    /// Returns `true` for [`Verification::Valid`].
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Converts a mismatch into [`VerificationFailed`] for `?` chains.
    pub fn into_result(self) -> Result<(), VerificationFailed> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid => Err(VerificationFailed),
        }
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}
