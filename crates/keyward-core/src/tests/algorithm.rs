// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the algorithm catalogs.

use crate::algorithm::{
    AesKeySize, AlgorithmFamily, AlgorithmId, DigestAlgorithm, DigestSignatureAlgorithm, Ecc,
    EccCurve, EcdsaAlgorithm, EciesAlgorithm, EncryptionAlgorithm, HmacAlgorithm,
    KeyExchangeAlgorithm, PseudoRandomAlgorithm, Rsa, RsaDigestSignatureAlgorithm,
    RsaEncryptionAlgorithm, RsaSignatureAlgorithm, SignatureAlgorithm,
};

// =============================================================================
// RsaEncryptionAlgorithm::max_plaintext_len()
// =============================================================================

#[test]
fn test_rsa_max_plaintext_len_2048() {
    let block_size = 256;

    assert_eq!(RsaEncryptionAlgorithm::Raw.max_plaintext_len(block_size), Some(256));
    assert_eq!(RsaEncryptionAlgorithm::Pkcs1.max_plaintext_len(block_size), Some(245));
    assert_eq!(RsaEncryptionAlgorithm::OaepSha1.max_plaintext_len(block_size), Some(214));
    assert_eq!(RsaEncryptionAlgorithm::OaepSha224.max_plaintext_len(block_size), Some(198));
    assert_eq!(RsaEncryptionAlgorithm::OaepSha256.max_plaintext_len(block_size), Some(190));
    assert_eq!(RsaEncryptionAlgorithm::OaepSha384.max_plaintext_len(block_size), Some(158));
    assert_eq!(RsaEncryptionAlgorithm::OaepSha512.max_plaintext_len(block_size), Some(126));
}

#[test]
fn test_rsa_hybrid_has_no_limit() {
    for algorithm in [
        RsaEncryptionAlgorithm::OaepSha1AesGcm,
        RsaEncryptionAlgorithm::OaepSha224AesGcm,
        RsaEncryptionAlgorithm::OaepSha256AesGcm,
        RsaEncryptionAlgorithm::OaepSha384AesGcm,
        RsaEncryptionAlgorithm::OaepSha512AesGcm,
    ] {
        assert!(algorithm.is_hybrid());
        assert_eq!(algorithm.max_plaintext_len(256), None);
    }
}

#[test]
fn test_rsa_max_plaintext_len_saturates() {
    assert_eq!(RsaEncryptionAlgorithm::OaepSha512.max_plaintext_len(64), Some(0));
    assert_eq!(RsaEncryptionAlgorithm::Pkcs1.max_plaintext_len(8), Some(0));
}

#[test]
fn test_rsa_encryption_id() {
    assert_eq!(
        RsaEncryptionAlgorithm::OaepSha256.id(),
        AlgorithmId::RsaEncryption(RsaEncryptionAlgorithm::OaepSha256)
    );
}

// =============================================================================
// Signatures
// =============================================================================

#[test]
fn test_rsa_signature_digest_and_padding() {
    assert_eq!(RsaSignatureAlgorithm::Pkcs1v15Sha384.digest(), DigestAlgorithm::Sha384);
    assert!(RsaSignatureAlgorithm::PssSha256.is_pss());
    assert!(!RsaSignatureAlgorithm::Pkcs1v15Sha256.is_pss());
}

#[test]
fn test_rsa_digest_signature_lengths() {
    let hashed = RsaDigestSignatureAlgorithm::from(RsaSignatureAlgorithm::Pkcs1v15Sha256);

    assert!(hashed.accepts_digest_len(32, 256));
    assert!(!hashed.accepts_digest_len(31, 256));
    assert!(!hashed.accepts_digest_len(33, 256));

    let raw = RsaDigestSignatureAlgorithm::Pkcs1v15Raw;
    assert!(raw.accepts_digest_len(245, 256));
    assert!(!raw.accepts_digest_len(246, 256));
}

#[test]
fn test_message_and_digest_ids_differ() {
    let ecdsa = EcdsaAlgorithm::X962Sha256;

    assert_eq!(ecdsa.message_id(), AlgorithmId::EcdsaMessage(ecdsa));
    assert_eq!(ecdsa.digest_id(), AlgorithmId::EcdsaDigest(ecdsa));
    assert_ne!(ecdsa.message_id(), ecdsa.digest_id());
}

#[test]
fn test_ecdsa_digest_lengths() {
    assert!(EcdsaAlgorithm::X962Sha1.accepts_digest_len(20, 32));
    assert!(EcdsaAlgorithm::X962Sha384.accepts_digest_len(48, 32));
    assert!(!EcdsaAlgorithm::X962Sha512.accepts_digest_len(32, 66));
}

// =============================================================================
// ECC
// =============================================================================

#[test]
fn test_ecc_curve_sizes() {
    assert_eq!(EccCurve::P192.field_len(), 24);
    assert_eq!(EccCurve::P256.field_len(), 32);
    assert_eq!(EccCurve::P384.field_len(), 48);
    assert_eq!(EccCurve::P521.field_len(), 66);

    assert_eq!(EccCurve::from_bits(521), Some(EccCurve::P521));
    assert_eq!(EccCurve::from_bits(255), None);
}

#[test]
fn test_ecies_has_no_limit() {
    assert_eq!(EciesAlgorithm::StandardX963Sha256AesGcm.max_plaintext_len(32), None);
    assert_eq!(EciesAlgorithm::CofactorX963Sha512AesGcm.max_plaintext_len(66), None);
}

#[test]
fn test_key_exchange_kdf() {
    assert_eq!(KeyExchangeAlgorithm::Standard.kdf(), None);
    assert_eq!(KeyExchangeAlgorithm::Cofactor.kdf(), None);
    assert_eq!(
        KeyExchangeAlgorithm::StandardX963(DigestAlgorithm::Sha256).kdf(),
        Some(DigestAlgorithm::Sha256)
    );
}

// =============================================================================
// AlgorithmFamily::descriptor()
// =============================================================================

#[test]
fn test_family_descriptors() {
    assert_eq!(Rsa::descriptor(2048), Some(256));
    assert_eq!(Rsa::descriptor(2047), Some(256));
    assert_eq!(Rsa::descriptor(0), None);

    assert_eq!(Ecc::descriptor(384), Some(EccCurve::P384));
    assert_eq!(Ecc::descriptor(2048), None);
}

// =============================================================================
// Symmetric
// =============================================================================

#[test]
fn test_aes_key_size() {
    for size in [AesKeySize::Bits128, AesKeySize::Bits192, AesKeySize::Bits256] {
        assert_eq!(AesKeySize::from_byte_count(size.byte_count()), Some(size));
    }

    assert_eq!(AesKeySize::from_byte_count(20), None);
}

#[test]
fn test_hmac_and_prf_digests() {
    assert_eq!(HmacAlgorithm::Sha224.output_len(), 28);
    assert_eq!(HmacAlgorithm::Sha512.output_len(), 64);
    assert_eq!(PseudoRandomAlgorithm::HmacSha1.digest(), DigestAlgorithm::Sha1);
    assert_eq!(PseudoRandomAlgorithm::HmacSha256.digest().output_len(), 32);
}
