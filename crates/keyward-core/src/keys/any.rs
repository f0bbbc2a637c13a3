// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::adapter::{ExpectedKey, Unvalidated};
use crate::capability::ProviderHandleConvertible;
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, KeyAttributes, KeyClass, KeyType};

use super::{EccPrivateKey, EccPublicKey, HardwareIsolatedKey, RsaPrivateKey, RsaPublicKey};

/// A key discovered at runtime, classified by its reported attributes.
///
/// Typed accessors return `None` when the key is of another kind; asking a
/// hardware-isolated key for an ECC software key is a miss, not an error.
pub enum AnyKey<P: CryptoProvider> {
    /// RSA private key.
    RsaPrivate(RsaPrivateKey<P>),
    /// RSA public key.
    RsaPublic(RsaPublicKey<P>),
    /// ECC private key (software).
    EccPrivate(EccPrivateKey<P>),
    /// ECC public key.
    EccPublic(EccPublicKey<P>),
    /// ECC private key in isolated hardware.
    HardwareIsolated(HardwareIsolatedKey<P>),
}

fn classify(attributes: &KeyAttributes) -> Option<ExpectedKey> {
    let key_type = attributes.key_type?;

    let expected = match (attributes.key_class, key_type, attributes.is_hardware_isolated) {
        (KeyClass::Private, KeyType::Ecc, true) => ExpectedKey::hardware_private(KeyType::Ecc),
        (KeyClass::Private, _, false) | (KeyClass::Public, _, false) => {
            ExpectedKey::software(attributes.key_class, key_type)
        }
        _ => return None,
    };

    Some(expected)
}

impl<P: CryptoProvider> AnyKey<P> {
    /// Inspects `handle` once and wraps it in the matching variant.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidProviderHandle`] for symmetric, untyped or
    /// otherwise unsupported handles.
    pub fn from_handle(provider: &P, handle: P::Handle) -> Result<Self, CryptoError> {
        let unvalidated = Unvalidated::new(provider, handle);
        let reported = unvalidated.inspect()?;
        let expected = classify(&reported).ok_or(CryptoError::InvalidProviderHandle)?;
        let validated = unvalidated.decide(expected, reported).into_result()?;

        let key = match (expected.key_class, expected.key_type, reported.is_hardware_isolated) {
            (KeyClass::Private, KeyType::Ecc, true) => {
                Self::HardwareIsolated(HardwareIsolatedKey::from_validated(validated)?)
            }
            (KeyClass::Private, KeyType::Rsa, _) => {
                Self::RsaPrivate(RsaPrivateKey::from_validated(validated)?)
            }
            (KeyClass::Private, KeyType::Ecc, false) => {
                Self::EccPrivate(EccPrivateKey::from_validated(validated)?)
            }
            (KeyClass::Public, KeyType::Rsa, _) => {
                Self::RsaPublic(RsaPublicKey::from_validated(validated)?)
            }
            (KeyClass::Public, KeyType::Ecc, _) => {
                Self::EccPublic(EccPublicKey::from_validated(validated)?)
            }
            (KeyClass::Symmetric, _, _) => return Err(CryptoError::InvalidProviderHandle),
        };

        Ok(key)
    }

    /// Whether the key lives in isolated hardware.
    pub fn is_hardware_isolated(&self) -> bool {
        matches!(self, Self::HardwareIsolated(_))
    }

    /// Attributes captured at construction.
    pub fn attributes(&self) -> &KeyAttributes {
        match self {
            Self::RsaPrivate(key) => key.attributes(),
            Self::RsaPublic(key) => key.attributes(),
            Self::EccPrivate(key) => key.attributes(),
            Self::EccPublic(key) => key.attributes(),
            Self::HardwareIsolated(key) => key.attributes(),
        }
    }

    /// The RSA private key, if that is what this is.
    pub fn into_rsa_private(self) -> Option<RsaPrivateKey<P>> {
        match self {
            Self::RsaPrivate(key) => Some(key),
            _ => None,
        }
    }

    /// The RSA public key, if that is what this is.
    pub fn into_rsa_public(self) -> Option<RsaPublicKey<P>> {
        match self {
            Self::RsaPublic(key) => Some(key),
            _ => None,
        }
    }

    /// The software ECC private key, if that is what this is.
    pub fn into_ecc_private(self) -> Option<EccPrivateKey<P>> {
        match self {
            Self::EccPrivate(key) => Some(key),
            _ => None,
        }
    }

    /// The ECC public key, if that is what this is.
    pub fn into_ecc_public(self) -> Option<EccPublicKey<P>> {
        match self {
            Self::EccPublic(key) => Some(key),
            _ => None,
        }
    }

    /// The hardware-isolated key, if that is what this is.
    pub fn into_hardware_isolated(self) -> Option<HardwareIsolatedKey<P>> {
        match self {
            Self::HardwareIsolated(key) => Some(key),
            _ => None,
        }
    }
}

impl<P: CryptoProvider> fmt::Debug for AnyKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RsaPrivate(key) => fmt::Debug::fmt(key, f),
            Self::RsaPublic(key) => fmt::Debug::fmt(key, f),
            Self::EccPrivate(key) => fmt::Debug::fmt(key, f),
            Self::EccPublic(key) => fmt::Debug::fmt(key, f),
            Self::HardwareIsolated(key) => fmt::Debug::fmt(key, f),
        }
    }
}
