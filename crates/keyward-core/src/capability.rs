// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key capability traits.
//!
//! Every key type declares one [`KeyCapability::Exposure`]: [`Exportable`] or
//! [`Isolated`]. [`ByteExportable`] requires the former and
//! [`HardwareIsolatedCapable`] the latter, so no type can implement both, and
//! every byte-revealing API ([`KeyMaterial`](crate::KeyMaterial),
//! [`ExternalRepresentation`]) is bounded on [`ByteExportable`].

use tracing::warn;
use zeroize::Zeroizing;

use crate::adapter::{ExpectedKey, Unvalidated, ValidatedHandle};
use crate::algorithm::AlgorithmFamily;
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, KeyAttributes};

mod sealed {
    pub trait Sealed {}

    /// Constructible only in this module; gates `ProviderHandleConvertible::wrap`.
    #[derive(Debug, Clone, Copy)]
    pub struct Internal(pub(super) ());
}

pub(crate) use sealed::Internal;

/// Exposure marker. Sealed: only [`Exportable`] and [`Isolated`] exist.
pub trait Exposure: sealed::Sealed {}

/// Key bytes may leave the key (raw bytes or an external encoding).
#[derive(Debug)]
pub enum Exportable {}

/// Key bytes never leave the provider.
#[derive(Debug)]
pub enum Isolated {}

impl sealed::Sealed for Exportable {}
impl sealed::Sealed for Isolated {}
impl Exposure for Exportable {}
impl Exposure for Isolated {}

/// Root capability: every key type picks exactly one exposure.
pub trait KeyCapability {
    /// [`Exportable`] or [`Isolated`].
    type Exposure: Exposure;
}

/// Keys whose bytes may be exported.
pub trait ByteExportable: KeyCapability<Exposure = Exportable> {}

/// Keys whose secret never leaves isolated hardware.
///
/// Mutually exclusive with [`ByteExportable`] by construction.
pub trait HardwareIsolatedCapable: KeyCapability<Exposure = Isolated> {}

/// Keys backed by an opaque provider handle.
///
/// Construction from a raw handle always runs the validation state machine
/// against [`Self::EXPECTED`].
pub trait ProviderHandleConvertible: KeyCapability + Sized {
    /// Provider the handle belongs to.
    type Provider: CryptoProvider;

    /// Capability tag checked at construction.
    const EXPECTED: ExpectedKey;

    /// The validated handle.
    fn validated(&self) -> &ValidatedHandle<Self::Provider>;

    /// Builds the wrapper around a handle already checked against
    /// [`Self::EXPECTED`]. Not callable outside this crate.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidProviderHandle`] if the wrapper needs more than the
    /// class tag (e.g. a known curve size).
    #[doc(hidden)]
    fn wrap(handle: ValidatedHandle<Self::Provider>, _: Internal) -> Result<Self, CryptoError>;

    /// Wraps a handle validated for any wrapper, re-checking it against
    /// [`Self::EXPECTED`].
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidProviderHandle`] if the captured attributes do not
    /// match this wrapper's tag, or the wrapper needs more than the tag.
    fn from_validated(handle: ValidatedHandle<Self::Provider>) -> Result<Self, CryptoError> {
        if !Self::EXPECTED.matches(handle.attributes()) {
            warn!(
                expected = ?Self::EXPECTED,
                reported = ?handle.attributes(),
                "validated handle does not fit wrapper"
            );
            return Err(CryptoError::InvalidProviderHandle);
        }

        Self::wrap(handle, Internal(()))
    }

    /// Validates `handle` and wraps it.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidProviderHandle`] on any class, type or isolation
    /// mismatch; a provider error if inspection itself fails.
    fn from_handle(
        provider: &Self::Provider,
        handle: <Self::Provider as CryptoProvider>::Handle,
    ) -> Result<Self, CryptoError> {
        let validated = Unvalidated::new(provider, handle)
            .validate(Self::EXPECTED)?
            .into_result()?;

        Self::from_validated(validated)
    }

    /// Raw provider handle.
    fn provider_handle(&self) -> &<Self::Provider as CryptoProvider>::Handle {
        self.validated().handle()
    }

    /// Attributes captured at construction.
    fn attributes(&self) -> &KeyAttributes {
        self.validated().attributes()
    }
}

/// Import/export of the provider's external encoding.
///
/// Export is only available on [`ByteExportable`] keys.
pub trait ExternalRepresentation: ProviderHandleConvertible + ByteExportable {
    /// Imports `bytes` and validates the resulting handle.
    fn from_external_representation(
        provider: &Self::Provider,
        bytes: &[u8],
    ) -> Result<Self, CryptoError> {
        let expected = Self::EXPECTED;
        let handle = crate::adapter::invoke("import_external_representation", || {
            provider.import_external_representation(expected.key_type, expected.key_class, bytes)
        })?;

        Self::from_handle(provider, handle)
    }

    /// Exports the key's external encoding.
    fn external_representation(&self) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let validated = self.validated();

        crate::adapter::invoke("export_external_representation", || {
            validated
                .provider()
                .export_external_representation(validated.handle())
        })
    }
}

impl<T: ProviderHandleConvertible + ByteExportable> ExternalRepresentation for T {}

/// A key belonging to an asymmetric algorithm family.
pub trait AsymmetricKey: ProviderHandleConvertible {
    /// RSA or ECC.
    type Family: AlgorithmFamily;

    /// Key size in bits.
    fn size_in_bits(&self) -> usize {
        self.attributes().size_in_bits
    }

    /// Key size in bytes (RSA modulus length, ECC field length).
    fn block_size(&self) -> usize {
        self.size_in_bits().div_ceil(8)
    }
}

/// Private keys: decrypt, sign, derive the public key.
pub trait PrivateKeyCapable: AsymmetricKey {
    /// Matching public key type.
    type PublicKey: PublicKeyCapable<Family = Self::Family, Provider = Self::Provider>;

    /// Block size (RSA) or curve (ECC).
    fn descriptor(&self) -> <Self::Family as AlgorithmFamily>::Descriptor;

    /// Derives the public key through the provider.
    fn public_key(&self) -> Result<Self::PublicKey, CryptoError> {
        let validated = self.validated();
        let provider = validated.provider();

        let handle = crate::adapter::invoke("public_key_for", || {
            provider.public_key_for(validated.handle())
        })?;

        Self::PublicKey::from_handle(provider, handle)
    }
}

/// Public keys: encrypt, verify; constructible from their private key.
pub trait PublicKeyCapable: AsymmetricKey {
    /// Derives the public key of `private`.
    fn from_private_key<K>(private: &K) -> Result<Self, CryptoError>
    where
        K: PrivateKeyCapable<PublicKey = Self>,
    {
        private.public_key()
    }
}
