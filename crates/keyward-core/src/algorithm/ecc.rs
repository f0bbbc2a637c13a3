// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::sealed::Sealed;
use super::{
    AlgorithmId, DigestAlgorithm, DigestSignatureAlgorithm, EncryptionAlgorithm, SignatureAlgorithm,
};

/// NIST prime curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccCurve {
    /// secp192r1.
    P192,
    /// secp256r1.
    P256,
    /// secp384r1.
    P384,
    /// secp521r1.
    P521,
}

impl EccCurve {
    /// Key size in bits.
    pub const fn bits(self) -> usize {
        match self {
            Self::P192 => 192,
            Self::P256 => 256,
            Self::P384 => 384,
            Self::P521 => 521,
        }
    }

    /// Field element (and raw shared secret) length in bytes.
    pub const fn field_len(self) -> usize {
        self.bits().div_ceil(8)
    }

    /// Curve for a reported key size.
    pub const fn from_bits(bits: usize) -> Option<Self> {
        match bits {
            192 => Some(Self::P192),
            256 => Some(Self::P256),
            384 => Some(Self::P384),
            521 => Some(Self::P521),
            _ => None,
        }
    }
}

/// ECDSA (X9.62) signature schemes.
///
/// Used for both message and digest signing; the operation decides which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdsaAlgorithm {
    /// ECDSA with SHA-1.
    X962Sha1,
    /// ECDSA with SHA-224.
    X962Sha224,
    /// ECDSA with SHA-256.
    X962Sha256,
    /// ECDSA with SHA-384.
    X962Sha384,
    /// ECDSA with SHA-512.
    X962Sha512,
}

impl EcdsaAlgorithm {
    /// Message hash.
    pub const fn digest(self) -> DigestAlgorithm {
        match self {
            Self::X962Sha1 => DigestAlgorithm::Sha1,
            Self::X962Sha224 => DigestAlgorithm::Sha224,
            Self::X962Sha256 => DigestAlgorithm::Sha256,
            Self::X962Sha384 => DigestAlgorithm::Sha384,
            Self::X962Sha512 => DigestAlgorithm::Sha512,
        }
    }
}

impl Sealed for EcdsaAlgorithm {}

impl SignatureAlgorithm for EcdsaAlgorithm {
    fn message_id(self) -> AlgorithmId {
        AlgorithmId::EcdsaMessage(self)
    }
}

impl DigestSignatureAlgorithm for EcdsaAlgorithm {
    fn digest_id(self) -> AlgorithmId {
        AlgorithmId::EcdsaDigest(self)
    }

    fn accepts_digest_len(self, digest_len: usize, _block_size: usize) -> bool {
        digest_len == self.digest().output_len()
    }
}

/// ECIES schemes (X9.63 KDF, AES-GCM payload, variable IV).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EciesAlgorithm {
    /// Standard ECDH, X9.63 KDF with SHA-224.
    StandardX963Sha224AesGcm,
    /// Standard ECDH, X9.63 KDF with SHA-256.
    StandardX963Sha256AesGcm,
    /// Standard ECDH, X9.63 KDF with SHA-384.
    StandardX963Sha384AesGcm,
    /// Standard ECDH, X9.63 KDF with SHA-512.
    StandardX963Sha512AesGcm,
    /// Cofactor ECDH, X9.63 KDF with SHA-224.
    CofactorX963Sha224AesGcm,
    /// Cofactor ECDH, X9.63 KDF with SHA-256.
    CofactorX963Sha256AesGcm,
    /// Cofactor ECDH, X9.63 KDF with SHA-384.
    CofactorX963Sha384AesGcm,
    /// Cofactor ECDH, X9.63 KDF with SHA-512.
    CofactorX963Sha512AesGcm,
}

impl Sealed for EciesAlgorithm {}

impl EncryptionAlgorithm for EciesAlgorithm {
    fn id(self) -> AlgorithmId {
        AlgorithmId::Ecies(self)
    }

    fn max_plaintext_len(self, _block_size: usize) -> Option<usize> {
        None
    }
}

/// ECDH shared-secret algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchangeAlgorithm {
    /// Raw cofactor ECDH; output length is the curve field length.
    Cofactor,
    /// Cofactor ECDH with an X9.63 KDF.
    CofactorX963(DigestAlgorithm),
    /// Raw ECDH; output length is the curve field length.
    Standard,
    /// ECDH with an X9.63 KDF.
    StandardX963(DigestAlgorithm),
}

impl KeyExchangeAlgorithm {
    /// KDF hash, `None` for raw variants.
    pub const fn kdf(self) -> Option<DigestAlgorithm> {
        match self {
            Self::Cofactor | Self::Standard => None,
            Self::CofactorX963(digest) | Self::StandardX963(digest) => Some(digest),
        }
    }

    /// Provider-level identifier.
    pub fn id(self) -> AlgorithmId {
        AlgorithmId::EcdhKeyExchange(self)
    }
}
