// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use keyward_core::{ProviderErrorKind, ProviderFailure};

/// Errors raised by [`SoftwareProvider`](crate::SoftwareProvider).
///
/// The discriminant is the diagnostic code reported through
/// [`ProviderFailure::code`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SoftError {
    /// Algorithm not implemented in software.
    #[error("UnsupportedAlgorithm")]
    UnsupportedAlgorithm = 1,

    /// Curve or RSA modulus size not supported or below the configured minimum.
    #[error("UnsupportedKeySize")]
    UnsupportedKeySize = 2,

    /// Hardware isolation was requested but is disabled or unavailable.
    #[error("HardwareIsolationUnavailable")]
    HardwareIsolationUnavailable = 3,

    /// The handle is the wrong kind of key for the operation.
    #[error("WrongKeyKind")]
    WrongKeyKind = 4,

    /// Key bytes could not be decoded.
    #[error("MalformedKey")]
    MalformedKey = 5,

    /// Input rejected by the primitive (bad padding, bad length, ...).
    #[error("MalformedInput")]
    MalformedInput = 6,

    /// The key refuses export.
    #[error("KeyNotExportable")]
    KeyNotExportable = 7,

    /// An RSA or ECDSA primitive failed.
    #[error("OperationFailed")]
    OperationFailed = 8,

    /// Key derivation failed.
    #[error("DerivationFailed")]
    DerivationFailed = 9,

    /// The entropy source failed.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable = 10,
}

impl ProviderFailure for SoftError {
    fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::UnsupportedAlgorithm
            | Self::UnsupportedKeySize
            | Self::HardwareIsolationUnavailable => ProviderErrorKind::UnsupportedAlgorithm,
            Self::WrongKeyKind | Self::MalformedKey | Self::MalformedInput => {
                ProviderErrorKind::InvalidInput
            }
            Self::KeyNotExportable => ProviderErrorKind::KeyNotExportable,
            Self::OperationFailed => ProviderErrorKind::OperationFailed,
            Self::DerivationFailed => ProviderErrorKind::DerivationFailed,
            Self::EntropyNotAvailable => ProviderErrorKind::Internal,
        }
    }

    fn code(&self) -> i64 {
        i64::from(*self as u8)
    }
}
