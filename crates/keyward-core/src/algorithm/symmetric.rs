// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::DigestAlgorithm;

/// AES block size in bytes. CBC initialization vectors have this length.
pub const AES_BLOCK_SIZE: usize = 16;

/// PBKDF2 pseudo-random functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoRandomAlgorithm {
    /// HMAC-SHA1.
    HmacSha1,
    /// HMAC-SHA224.
    HmacSha224,
    /// HMAC-SHA256.
    HmacSha256,
    /// HMAC-SHA384.
    HmacSha384,
    /// HMAC-SHA512.
    HmacSha512,
}

impl PseudoRandomAlgorithm {
    /// Underlying hash.
    pub const fn digest(self) -> DigestAlgorithm {
        match self {
            Self::HmacSha1 => DigestAlgorithm::Sha1,
            Self::HmacSha224 => DigestAlgorithm::Sha224,
            Self::HmacSha256 => DigestAlgorithm::Sha256,
            Self::HmacSha384 => DigestAlgorithm::Sha384,
            Self::HmacSha512 => DigestAlgorithm::Sha512,
        }
    }
}

/// HMAC algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmacAlgorithm {
    /// HMAC-SHA224.
    Sha224,
    /// HMAC-SHA256.
    Sha256,
    /// HMAC-SHA384.
    Sha384,
    /// HMAC-SHA512.
    Sha512,
}

impl HmacAlgorithm {
    /// Underlying hash.
    pub const fn digest(self) -> DigestAlgorithm {
        match self {
            Self::Sha224 => DigestAlgorithm::Sha224,
            Self::Sha256 => DigestAlgorithm::Sha256,
            Self::Sha384 => DigestAlgorithm::Sha384,
            Self::Sha512 => DigestAlgorithm::Sha512,
        }
    }

    /// Authentication code length in bytes.
    pub const fn output_len(self) -> usize {
        self.digest().output_len()
    }
}

/// AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesKeySize {
    /// 128-bit key.
    Bits128,
    /// 192-bit key.
    Bits192,
    /// 256-bit key.
    Bits256,
}

impl AesKeySize {
    /// Key length in bytes.
    pub const fn byte_count(self) -> usize {
        match self {
            Self::Bits128 => 16,
            Self::Bits192 => 24,
            Self::Bits256 => 32,
        }
    }

    /// Size for a key length in bytes.
    pub const fn from_byte_count(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Bits128),
            24 => Some(Self::Bits192),
            32 => Some(Self::Bits256),
            _ => None,
        }
    }
}
