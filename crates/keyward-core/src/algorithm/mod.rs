// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm selectors.
//!
//! Each algorithm family (RSA, ECC) is a zero-variant marker type implementing
//! [`AlgorithmFamily`]. The family fixes which encryption and signature
//! selectors a key accepts, so passing an ECDSA selector to an RSA key does not
//! compile.

mod ecc;
mod rsa;
mod symmetric;

use core::fmt;

use crate::provider::KeyType;

pub use ecc::{EccCurve, EcdsaAlgorithm, EciesAlgorithm, KeyExchangeAlgorithm};
pub use rsa::{RsaDigestSignatureAlgorithm, RsaEncryptionAlgorithm, RsaSignatureAlgorithm};
pub use symmetric::{AES_BLOCK_SIZE, AesKeySize, HmacAlgorithm, PseudoRandomAlgorithm};

mod sealed {
    pub trait Sealed {}
}

/// Hash functions referenced by the algorithm catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-1 (20 bytes).
    Sha1,
    /// SHA-224 (28 bytes).
    Sha224,
    /// SHA-256 (32 bytes).
    Sha256,
    /// SHA-384 (48 bytes).
    Sha384,
    /// SHA-512 (64 bytes).
    Sha512,
}

impl DigestAlgorithm {
    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// Provider-level algorithm identifier.
///
/// Generic operations translate family selectors into this enum before
/// crossing into the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// RSA encryption / decryption.
    RsaEncryption(RsaEncryptionAlgorithm),
    /// RSA signature over an arbitrary message (hashed by the provider).
    RsaMessageSignature(RsaSignatureAlgorithm),
    /// RSA signature over a precomputed digest.
    RsaDigestSignature(RsaDigestSignatureAlgorithm),
    /// ECIES encryption / decryption.
    Ecies(EciesAlgorithm),
    /// ECDSA over an arbitrary message (hashed by the provider).
    EcdsaMessage(EcdsaAlgorithm),
    /// ECDSA over a precomputed digest.
    EcdsaDigest(EcdsaAlgorithm),
    /// ECDH shared-secret computation.
    EcdhKeyExchange(KeyExchangeAlgorithm),
}

/// An encryption selector usable with keys of one family.
pub trait EncryptionAlgorithm: Copy + fmt::Debug + sealed::Sealed {
    /// Provider-level identifier.
    fn id(self) -> AlgorithmId;

    /// Largest plaintext accepted for a key with `block_size` bytes, or `None`
    /// when the algorithm has no limit (hybrid schemes).
    fn max_plaintext_len(self, block_size: usize) -> Option<usize>;
}

/// A message-signature selector (the provider hashes the input).
pub trait SignatureAlgorithm: Copy + fmt::Debug + sealed::Sealed {
    /// Provider-level identifier for message signing.
    fn message_id(self) -> AlgorithmId;
}

/// A digest-signature selector (the input is already hashed).
pub trait DigestSignatureAlgorithm: Copy + fmt::Debug + sealed::Sealed {
    /// Provider-level identifier for digest signing.
    fn digest_id(self) -> AlgorithmId;

    /// Whether a digest of `digest_len` bytes is acceptable for a key with
    /// `block_size` bytes.
    fn accepts_digest_len(self, digest_len: usize, block_size: usize) -> bool;
}

/// An asymmetric algorithm family.
pub trait AlgorithmFamily: sealed::Sealed + 'static {
    /// Key type the provider reports for this family.
    const KEY_TYPE: KeyType;

    /// Private-key descriptor (RSA block size, ECC curve).
    type Descriptor: Copy + fmt::Debug + Eq;

    /// Accepted encryption selectors.
    type EncryptionAlgorithm: EncryptionAlgorithm;

    /// Accepted message-signature selectors.
    type SignatureAlgorithm: SignatureAlgorithm;

    /// Accepted digest-signature selectors.
    type DigestSignatureAlgorithm: DigestSignatureAlgorithm;

    /// Derives the descriptor from the reported key size, `None` if this family
    /// has no such key size.
    fn descriptor(size_in_bits: usize) -> Option<Self::Descriptor>;
}

/// RSA family marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rsa {}

/// Elliptic-curve family marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecc {}

impl sealed::Sealed for Rsa {}
impl sealed::Sealed for Ecc {}

impl AlgorithmFamily for Rsa {
    const KEY_TYPE: KeyType = KeyType::Rsa;

    /// Modulus length in bytes.
    type Descriptor = usize;
    type EncryptionAlgorithm = RsaEncryptionAlgorithm;
    type SignatureAlgorithm = RsaSignatureAlgorithm;
    type DigestSignatureAlgorithm = RsaDigestSignatureAlgorithm;

    fn descriptor(size_in_bits: usize) -> Option<usize> {
        (size_in_bits > 0).then(|| size_in_bits.div_ceil(8))
    }
}

impl AlgorithmFamily for Ecc {
    const KEY_TYPE: KeyType = KeyType::Ecc;

    type Descriptor = EccCurve;
    type EncryptionAlgorithm = EciesAlgorithm;
    type SignatureAlgorithm = EcdsaAlgorithm;
    type DigestSignatureAlgorithm = EcdsaAlgorithm;

    fn descriptor(size_in_bits: usize) -> Option<EccCurve> {
        EccCurve::from_bits(size_in_bits)
    }
}
