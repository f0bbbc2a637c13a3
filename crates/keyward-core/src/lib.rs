// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capability-typed keys and generic operations over pluggable providers.
//!
//! # Layers
//!
//! - [`KeyMaterial`]: key types that are exactly one locked [`SecureBuffer`]
//!   ([`AesKey`], [`HmacKey`]).
//! - Capability traits ([`PrivateKeyCapable`], [`PublicKeyCapable`],
//!   [`SymmetricKeyCapable`], [`HardwareIsolatedCapable`]) describing what a key
//!   can do, independent of how it is stored.
//! - [`CryptoProvider`] / [`SymmetricProvider`]: the collaborator that performs
//!   the primitives. Asymmetric keys are opaque provider handles, checked once
//!   at construction by the [`adapter`].
//! - [`ops`]: encrypt, decrypt, sign, verify, derive and authenticate, each
//!   written once against the capability traits.
//!
//! # Hardware isolation
//!
//! [`HardwareIsolatedKey`] declares the [`Isolated`] exposure. Every API that
//! reveals key bytes requires [`ByteExportable`], whose exposure is
//! [`Exportable`], so handing an isolated key to one of them is a compile error.
//!
//! # Example
//!
//! ```rust
//! use keyward_core::{
//!     CryptoError, CryptoProvider, EccCurve, EccPrivateKey, EcdsaAlgorithm, PrivateKeyCapable,
//!     Verification, ops,
//! };
//!
//! fn sign_and_verify<P: CryptoProvider>(provider: &P) -> Result<Verification, CryptoError> {
//!     let private = EccPrivateKey::generate(provider, EccCurve::P256)?;
//!     let public = private.public_key()?;
//!
//!     let signature = ops::sign(&private, EcdsaAlgorithm::X962Sha256, b"message")?;
//!
//!     ops::verify(&public, EcdsaAlgorithm::X962Sha256, b"message", &signature)
//! }
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod adapter;
mod algorithm;
mod capability;
mod error;
mod keys;
mod material;
pub mod ops;
mod provider;
pub mod support;

pub use keyward_buffer::SecureBuffer;

pub use adapter::{
    ExpectedKey, IsolationRequirement, Rejection, Unvalidated, ValidatedHandle, Validation,
};
pub use algorithm::{
    AES_BLOCK_SIZE, AesKeySize, AlgorithmFamily, AlgorithmId, DigestAlgorithm,
    DigestSignatureAlgorithm, Ecc, EccCurve, EcdsaAlgorithm, EciesAlgorithm, EncryptionAlgorithm,
    HmacAlgorithm, KeyExchangeAlgorithm, PseudoRandomAlgorithm, Rsa, RsaDigestSignatureAlgorithm,
    RsaEncryptionAlgorithm, RsaSignatureAlgorithm, SignatureAlgorithm,
};
pub use capability::{
    AsymmetricKey, ByteExportable, Exportable, Exposure, ExternalRepresentation,
    HardwareIsolatedCapable, Isolated, KeyCapability, PrivateKeyCapable,
    ProviderHandleConvertible, PublicKeyCapable,
};
pub use error::{CryptoError, ProviderErrorKind, Verification, VerificationFailed};
pub use keys::{
    AesKey, AesKeySizePolicy, AnyKey, EccPrivateKey, EccPublicKey, HardwareIsolatedKey, HmacKey,
    HmacKeySizePolicy, RsaPrivateKey, RsaPublicKey,
};
pub use material::{KeyMaterial, KeySizePolicy, SymmetricKeyCapable};
pub use provider::{
    CryptoProvider, Isolation, KeyAttributes, KeyClass, KeyPairSpec, KeyType, ProviderFailure,
    SymmetricProvider,
};
