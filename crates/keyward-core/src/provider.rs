// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The cryptographic provider boundary.
//!
//! A provider performs the actual primitives and owns asymmetric secrets. The
//! core only ever sees its opaque [`CryptoProvider::Handle`] and a normalized
//! error ([`ProviderFailure`]).

use core::fmt;

use zeroize::Zeroizing;

use crate::algorithm::{AlgorithmId, EccCurve, HmacAlgorithm, PseudoRandomAlgorithm};
use crate::error::ProviderErrorKind;

/// Asymmetric key type reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// RSA.
    Rsa,
    /// Elliptic curve.
    Ecc,
}

/// Key class reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// Public half of a key pair.
    Public,
    /// Private half of a key pair.
    Private,
    /// Symmetric secret.
    Symmetric,
}

/// What the provider reports about a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyAttributes {
    /// Public, private or symmetric.
    pub key_class: KeyClass,
    /// RSA or ECC; `None` for symmetric or unknown keys.
    pub key_type: Option<KeyType>,
    /// Whether the secret lives in isolated hardware.
    pub is_hardware_isolated: bool,
    /// Key size in bits.
    pub size_in_bits: usize,
}

/// Where a generated private key lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Isolation {
    /// Ordinary provider-managed key.
    #[default]
    Software,
    /// Secret generated and kept inside isolated hardware.
    Hardware,
}

/// Key pair generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPairSpec {
    /// RSA with a modulus of `bits` bits.
    Rsa {
        /// Modulus size in bits.
        bits: u32,
    },
    /// Elliptic curve key on `curve`.
    Ecc {
        /// Curve to generate on.
        curve: EccCurve,
    },
}

/// Normalized view of a provider error.
pub trait ProviderFailure: fmt::Debug {
    /// Failure category.
    fn kind(&self) -> ProviderErrorKind;

    /// Opaque diagnostic code (OS status, library error number, ...).
    fn code(&self) -> i64;
}

/// Asymmetric operations on provider-managed keys.
///
/// Implementations are cheap to clone (typically an `Arc` inside); every key
/// wrapper keeps its own clone.
pub trait CryptoProvider: Clone {
    /// Opaque reference into the provider's key storage.
    type Handle: Clone + fmt::Debug;

    /// Native error type.
    type Error: ProviderFailure;

    /// Generates a key pair and returns the private handle.
    fn generate_key_pair(
        &self,
        spec: KeyPairSpec,
        isolation: Isolation,
    ) -> Result<Self::Handle, Self::Error>;

    /// Returns the public handle for a private handle.
    fn public_key_for(&self, handle: &Self::Handle) -> Result<Self::Handle, Self::Error>;

    /// Imports an external representation (PKCS#1 DER for RSA, X9.63 for ECC).
    fn import_external_representation(
        &self,
        key_type: KeyType,
        key_class: KeyClass,
        bytes: &[u8],
    ) -> Result<Self::Handle, Self::Error>;

    /// Exports the external representation. Must fail for hardware-isolated handles.
    fn export_external_representation(
        &self,
        handle: &Self::Handle,
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error>;

    /// Reports class, type, isolation and size of a handle.
    fn inspect_attributes(&self, handle: &Self::Handle) -> Result<KeyAttributes, Self::Error>;

    /// Encrypts with a public handle.
    fn encrypt(
        &self,
        handle: &Self::Handle,
        algorithm: AlgorithmId,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Decrypts with a private handle.
    fn decrypt(
        &self,
        handle: &Self::Handle,
        algorithm: AlgorithmId,
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error>;

    /// Signs `data` (a message or a digest, depending on `algorithm`).
    fn sign(
        &self,
        handle: &Self::Handle,
        algorithm: AlgorithmId,
        data: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;

    /// Returns `Ok(false)` when the signature does not match; errors are
    /// reserved for unsupported algorithms and provider failures.
    fn verify(
        &self,
        handle: &Self::Handle,
        algorithm: AlgorithmId,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, Self::Error>;

    /// Computes an ECDH shared secret between a private and a public handle.
    fn key_exchange(
        &self,
        private: &Self::Handle,
        public: &Self::Handle,
        algorithm: AlgorithmId,
        requested_size: usize,
        shared_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error>;
}

/// Symmetric primitives over raw key bytes.
///
/// Key bytes are borrowed from a locked buffer for the duration of the call.
pub trait SymmetricProvider {
    /// Native error type.
    type Error: ProviderFailure;

    /// PBKDF2 into `out` (whose length is the requested output length).
    fn derive_pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        prf: PseudoRandomAlgorithm,
        rounds: u32,
        out: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// AES-CBC with PKCS#7 padding.
    fn aes_cbc_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;

    /// AES-CBC with PKCS#7 padding.
    fn aes_cbc_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, Self::Error>;

    /// HMAC over `data`.
    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;
}
