// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::sync::Arc;

use keyward_core::{Isolation, KeyAttributes, KeyClass, KeyType};
use rsa::traits::PublicKeyParts;

/// Key material held by the software provider.
///
/// Private variants wipe themselves on drop (the RustCrypto key types zeroize
/// their secrets).
pub(crate) enum SoftKey {
    RsaPrivate(Box<rsa::RsaPrivateKey>),
    RsaPublic(Box<rsa::RsaPublicKey>),
    P256Private(p256::ecdsa::SigningKey),
    P256Public(p256::ecdsa::VerifyingKey),
    P384Private(p384::ecdsa::SigningKey),
    P384Public(p384::ecdsa::VerifyingKey),
}

impl SoftKey {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::RsaPrivate(_) => "RsaPrivate",
            Self::RsaPublic(_) => "RsaPublic",
            Self::P256Private(_) => "P256Private",
            Self::P256Public(_) => "P256Public",
            Self::P384Private(_) => "P384Private",
            Self::P384Public(_) => "P384Public",
        }
    }

    fn class_type_size(&self) -> (KeyClass, KeyType, usize) {
        match self {
            Self::RsaPrivate(key) => (KeyClass::Private, KeyType::Rsa, key.size() * 8),
            Self::RsaPublic(key) => (KeyClass::Public, KeyType::Rsa, key.size() * 8),
            Self::P256Private(_) => (KeyClass::Private, KeyType::Ecc, 256),
            Self::P256Public(_) => (KeyClass::Public, KeyType::Ecc, 256),
            Self::P384Private(_) => (KeyClass::Private, KeyType::Ecc, 384),
            Self::P384Public(_) => (KeyClass::Public, KeyType::Ecc, 384),
        }
    }
}

struct SoftEntry {
    key: SoftKey,
    isolation: Isolation,
}

/// Opaque, cheaply cloneable reference to a key held by the software provider.
///
/// `Debug` reports the key kind only.
#[derive(Clone)]
pub struct SoftHandle(Arc<SoftEntry>);

impl SoftHandle {
    pub(crate) fn new(key: SoftKey, isolation: Isolation) -> Self {
        Self(Arc::new(SoftEntry { key, isolation }))
    }

    pub(crate) fn key(&self) -> &SoftKey {
        &self.0.key
    }

    pub(crate) fn is_hardware_isolated(&self) -> bool {
        self.0.isolation == Isolation::Hardware
    }

    /// Whether both handles refer to the same stored key.
    pub fn same_key(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn attributes(&self) -> KeyAttributes {
        let (key_class, key_type, size_in_bits) = self.key().class_type_size();

        KeyAttributes {
            key_class,
            key_type: Some(key_type),
            is_hardware_isolated: self.is_hardware_isolated(),
            size_in_bits,
        }
    }
}

impl fmt::Debug for SoftHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftHandle")
            .field("key", &self.key().name())
            .field("isolation", &self.0.isolation)
            .finish_non_exhaustive()
    }
}
