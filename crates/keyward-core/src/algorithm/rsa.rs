// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::sealed::Sealed;
use super::{
    AlgorithmId, DigestAlgorithm, DigestSignatureAlgorithm, EncryptionAlgorithm, SignatureAlgorithm,
};

/// PKCS#1 v1.5 encryption overhead in bytes.
const PKCS1_OVERHEAD: usize = 11;

/// RSA encryption schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaEncryptionAlgorithm {
    /// Unpadded RSA. Input must not exceed the block size.
    Raw,
    /// PKCS#1 v1.5 padding.
    Pkcs1,
    /// OAEP with SHA-1.
    OaepSha1,
    /// OAEP with SHA-224.
    OaepSha224,
    /// OAEP with SHA-256.
    OaepSha256,
    /// OAEP with SHA-384.
    OaepSha384,
    /// OAEP with SHA-512.
    OaepSha512,
    /// OAEP SHA-1 wrapped AES-GCM session key (no length limit).
    OaepSha1AesGcm,
    /// OAEP SHA-224 wrapped AES-GCM session key (no length limit).
    OaepSha224AesGcm,
    /// OAEP SHA-256 wrapped AES-GCM session key (no length limit).
    OaepSha256AesGcm,
    /// OAEP SHA-384 wrapped AES-GCM session key (no length limit).
    OaepSha384AesGcm,
    /// OAEP SHA-512 wrapped AES-GCM session key (no length limit).
    OaepSha512AesGcm,
}

impl RsaEncryptionAlgorithm {
    /// OAEP hash, if any.
    pub const fn digest(self) -> Option<DigestAlgorithm> {
        match self {
            Self::Raw | Self::Pkcs1 => None,
            Self::OaepSha1 | Self::OaepSha1AesGcm => Some(DigestAlgorithm::Sha1),
            Self::OaepSha224 | Self::OaepSha224AesGcm => Some(DigestAlgorithm::Sha224),
            Self::OaepSha256 | Self::OaepSha256AesGcm => Some(DigestAlgorithm::Sha256),
            Self::OaepSha384 | Self::OaepSha384AesGcm => Some(DigestAlgorithm::Sha384),
            Self::OaepSha512 | Self::OaepSha512AesGcm => Some(DigestAlgorithm::Sha512),
        }
    }

    /// Hybrid schemes encrypt the payload with AES-GCM.
    pub const fn is_hybrid(self) -> bool {
        matches!(
            self,
            Self::OaepSha1AesGcm
                | Self::OaepSha224AesGcm
                | Self::OaepSha256AesGcm
                | Self::OaepSha384AesGcm
                | Self::OaepSha512AesGcm
        )
    }
}

impl Sealed for RsaEncryptionAlgorithm {}

impl EncryptionAlgorithm for RsaEncryptionAlgorithm {
    fn id(self) -> AlgorithmId {
        AlgorithmId::RsaEncryption(self)
    }

    fn max_plaintext_len(self, block_size: usize) -> Option<usize> {
        if self.is_hybrid() {
            return None;
        }

        match self.digest() {
            None if self == Self::Raw => Some(block_size),
            None => Some(block_size.saturating_sub(PKCS1_OVERHEAD)),
            Some(digest) => Some(block_size.saturating_sub(2 + 2 * digest.output_len())),
        }
    }
}

/// RSA message-signature schemes. The provider hashes the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaSignatureAlgorithm {
    /// PKCS#1 v1.5 with SHA-1.
    Pkcs1v15Sha1,
    /// PKCS#1 v1.5 with SHA-224.
    Pkcs1v15Sha224,
    /// PKCS#1 v1.5 with SHA-256.
    Pkcs1v15Sha256,
    /// PKCS#1 v1.5 with SHA-384.
    Pkcs1v15Sha384,
    /// PKCS#1 v1.5 with SHA-512.
    Pkcs1v15Sha512,
    /// PSS with SHA-1.
    PssSha1,
    /// PSS with SHA-224.
    PssSha224,
    /// PSS with SHA-256.
    PssSha256,
    /// PSS with SHA-384.
    PssSha384,
    /// PSS with SHA-512.
    PssSha512,
}

impl RsaSignatureAlgorithm {
    /// Message hash.
    pub const fn digest(self) -> DigestAlgorithm {
        match self {
            Self::Pkcs1v15Sha1 | Self::PssSha1 => DigestAlgorithm::Sha1,
            Self::Pkcs1v15Sha224 | Self::PssSha224 => DigestAlgorithm::Sha224,
            Self::Pkcs1v15Sha256 | Self::PssSha256 => DigestAlgorithm::Sha256,
            Self::Pkcs1v15Sha384 | Self::PssSha384 => DigestAlgorithm::Sha384,
            Self::Pkcs1v15Sha512 | Self::PssSha512 => DigestAlgorithm::Sha512,
        }
    }

    /// PSS padding.
    pub const fn is_pss(self) -> bool {
        matches!(
            self,
            Self::PssSha1 | Self::PssSha224 | Self::PssSha256 | Self::PssSha384 | Self::PssSha512
        )
    }
}

impl Sealed for RsaSignatureAlgorithm {}

impl SignatureAlgorithm for RsaSignatureAlgorithm {
    fn message_id(self) -> AlgorithmId {
        AlgorithmId::RsaMessageSignature(self)
    }
}

/// RSA digest-signature schemes. The input is signed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsaDigestSignatureAlgorithm {
    /// PKCS#1 v1.5 padding over raw data without a DigestInfo prefix.
    Pkcs1v15Raw,
    /// One of the hashed schemes, applied to a precomputed digest.
    Hashed(RsaSignatureAlgorithm),
}

impl Sealed for RsaDigestSignatureAlgorithm {}

impl DigestSignatureAlgorithm for RsaDigestSignatureAlgorithm {
    fn digest_id(self) -> AlgorithmId {
        AlgorithmId::RsaDigestSignature(self)
    }

    fn accepts_digest_len(self, digest_len: usize, block_size: usize) -> bool {
        match self {
            Self::Pkcs1v15Raw => digest_len <= block_size.saturating_sub(PKCS1_OVERHEAD),
            Self::Hashed(algorithm) => digest_len == algorithm.digest().output_len(),
        }
    }
}

impl From<RsaSignatureAlgorithm> for RsaDigestSignatureAlgorithm {
    fn from(algorithm: RsaSignatureAlgorithm) -> Self {
        Self::Hashed(algorithm)
    }
}
