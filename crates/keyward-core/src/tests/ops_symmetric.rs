// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for symmetric operations and password derivation.

use keyward_buffer::SecureBuffer;
use keyward_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::algorithm::{AES_BLOCK_SIZE, AesKeySize, HmacAlgorithm, PseudoRandomAlgorithm};
use crate::error::{CryptoError, ProviderErrorKind, Verification};
use crate::keys::{AesKey, HmacKey};
use crate::material::KeyMaterial;
use crate::ops::{
    authenticate, create_iv, create_iv_with, decrypt_symmetric, derive_aes_key, derive_key,
    encrypt_symmetric, is_valid_authentication_code,
};
use crate::support::test_utils::{MockError, MockProvider, MockProviderBehaviour};

fn aes_key() -> AesKey {
    AesKey::from_key_data(
        SecureBuffer::copy_from_insecure(&[0x11; 32]).expect("Failed to copy_from_insecure(..)"),
    )
    .expect("Failed to from_key_data(..)")
}

fn hmac_key() -> HmacKey {
    HmacKey::from_key_data(
        SecureBuffer::copy_from_insecure(b"hmac key").expect("Failed to copy_from_insecure(..)"),
    )
    .expect("Failed to from_key_data(..)")
}

// =============================================================================
// create_iv()
// =============================================================================

#[test]
fn test_create_iv_with_entropy() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(9));

    assert_eq!(create_iv_with(&entropy), Ok([9u8; AES_BLOCK_SIZE]));
    assert_eq!(entropy.call_count(), 1);
}

#[test]
fn test_create_iv_entropy_failure() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);

    assert_eq!(create_iv_with(&entropy), Err(CryptoError::RandomGenerationFailed));
}

#[test]
fn test_create_iv_is_random() {
    let first = create_iv().expect("Failed to create_iv()");
    let second = create_iv().expect("Failed to create_iv()");

    assert_ne!(first, second);
}

// =============================================================================
// encrypt_symmetric() / decrypt_symmetric()
// =============================================================================

#[test]
fn test_symmetric_round_trip_around_block_size() {
    let provider = MockProvider::default();
    let key = aes_key();
    let iv = [0x3C; AES_BLOCK_SIZE];

    for len in [AES_BLOCK_SIZE - 1, AES_BLOCK_SIZE, AES_BLOCK_SIZE + 1] {
        let plaintext: Vec<u8> = (0..len as u8).collect();

        let ciphertext = encrypt_symmetric(&provider, &key, &plaintext, &iv)
            .expect("Failed to encrypt_symmetric(..)");
        assert_eq!(ciphertext.len() % AES_BLOCK_SIZE, 0);

        let recovered = decrypt_symmetric(&provider, &key, &ciphertext, &iv)
            .expect("Failed to decrypt_symmetric(..)");
        assert_eq!(&recovered[..], &plaintext[..]);
    }
}

#[test]
fn test_symmetric_rejects_bad_iv() {
    let provider = MockProvider::default();
    let key = aes_key();

    for iv in [&[0u8; 0][..], &[0u8; 15][..], &[0u8; 17][..]] {
        assert_eq!(
            encrypt_symmetric(&provider, &key, b"data", iv),
            Err(CryptoError::InvalidIvSize { expected: 16 })
        );
        assert_eq!(
            decrypt_symmetric(&provider, &key, &[0u8; 16], iv).map(|_| ()),
            Err(CryptoError::InvalidIvSize { expected: 16 })
        );
    }

    assert_eq!(provider.operation_calls(), 0);
}

#[test]
fn test_decrypt_symmetric_rejects_partial_blocks() {
    let provider = MockProvider::default();
    let key = aes_key();
    let iv = [0u8; AES_BLOCK_SIZE];

    for len in [0, 1, 15, 17, 31] {
        assert_eq!(
            decrypt_symmetric(&provider, &key, &vec![0u8; len], &iv).map(|_| ()),
            Err(CryptoError::DataLengthInvalid)
        );
    }

    assert_eq!(provider.operation_calls(), 0);
}

// =============================================================================
// authenticate() / is_valid_authentication_code()
// =============================================================================

#[test]
fn test_authenticate_output_length() {
    let provider = MockProvider::default();
    let key = hmac_key();

    for algorithm in [
        HmacAlgorithm::Sha224,
        HmacAlgorithm::Sha256,
        HmacAlgorithm::Sha384,
        HmacAlgorithm::Sha512,
    ] {
        let code = authenticate(&provider, &key, algorithm, b"data")
            .expect("Failed to authenticate(..)");

        assert_eq!(code.len(), algorithm.output_len());
    }
}

#[test]
fn test_authentication_code_validation() {
    let provider = MockProvider::default();
    let key = hmac_key();
    let algorithm = HmacAlgorithm::Sha256;

    let mut code = authenticate(&provider, &key, algorithm, b"data")
        .expect("Failed to authenticate(..)");

    assert_eq!(
        is_valid_authentication_code(&provider, &key, algorithm, &code, b"data"),
        Ok(Verification::Valid)
    );

    code[0] ^= 1;
    assert_eq!(
        is_valid_authentication_code(&provider, &key, algorithm, &code, b"data"),
        Ok(Verification::Invalid)
    );

    assert_eq!(
        is_valid_authentication_code(&provider, &key, algorithm, &code[..16], b"data"),
        Ok(Verification::Invalid)
    );
}

// =============================================================================
// derive_key() / derive_aes_key()
// =============================================================================

#[test]
fn test_derive_key_length() {
    let provider = MockProvider::default();

    let key = derive_key(
        &provider,
        b"Hello Test!",
        b"Salt",
        PseudoRandomAlgorithm::HmacSha256,
        1,
        32,
    )
    .expect("Failed to derive_key(..)");

    assert_eq!(key.len(), 32);
    assert_eq!(provider.operation_calls(), 1);
}

#[test]
fn test_derive_key_is_deterministic() {
    let provider = MockProvider::default();
    let derive = || {
        derive_key(&provider, b"pw", b"salt", PseudoRandomAlgorithm::HmacSha1, 10, 20)
            .expect("Failed to derive_key(..)")
    };

    assert_eq!(derive(), derive());
}

#[test]
fn test_derive_key_rejects_invalid_utf8() {
    let provider = MockProvider::default();
    let prf = PseudoRandomAlgorithm::HmacSha256;

    assert_eq!(
        derive_key(&provider, &[0xFF, 0xFE], b"Salt", prf, 1, 32).unwrap_err(),
        CryptoError::InvalidPassword
    );
    assert_eq!(
        derive_key(&provider, b"Hello Test!", &[0xC3, 0x28], prf, 1, 32).unwrap_err(),
        CryptoError::InvalidSalt
    );
    assert_eq!(provider.operation_calls(), 0);
}

#[test]
fn test_derive_key_rejects_zero_output() {
    let provider = MockProvider::default();

    assert_eq!(
        derive_key(&provider, b"pw", b"salt", PseudoRandomAlgorithm::HmacSha256, 1, 0).unwrap_err(),
        CryptoError::DataLengthInvalid
    );
}

#[test]
fn test_derive_key_maps_provider_failure() {
    let provider = MockProvider::new(MockProviderBehaviour::FailAlways(MockError {
        kind: ProviderErrorKind::DerivationFailed,
        code: -4300,
    }));

    assert_eq!(
        derive_key(&provider, b"pw", b"salt", PseudoRandomAlgorithm::HmacSha512, 1, 64)
            .unwrap_err(),
        CryptoError::Provider {
            kind: ProviderErrorKind::DerivationFailed,
            code: -4300,
        }
    );
}

#[test]
fn test_derive_aes_key() {
    let provider = MockProvider::default();

    let key = derive_aes_key(
        &provider,
        b"Hello Test!",
        b"Salt",
        PseudoRandomAlgorithm::HmacSha256,
        1,
        AesKeySize::Bits192,
    )
    .expect("Failed to derive_aes_key(..)");

    assert_eq!(key.size(), AesKeySize::Bits192);
    assert_eq!(key.bit_count(), 192);
}
