// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_rand::{EntropySource, SystemEntropySource};
use keyward_util::constant_time_eq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::adapter::invoke;
use crate::algorithm::{AES_BLOCK_SIZE, HmacAlgorithm};
use crate::error::{CryptoError, Verification};
use crate::keys::AesKeySizePolicy;
use crate::material::SymmetricKeyCapable;
use crate::provider::SymmetricProvider;

fn check_iv(iv: &[u8]) -> Result<(), CryptoError> {
    if iv.len() == AES_BLOCK_SIZE {
        Ok(())
    } else {
        debug!(iv_len = iv.len(), "initialization vector rejected");
        Err(CryptoError::InvalidIvSize {
            expected: AES_BLOCK_SIZE,
        })
    }
}

/// Fresh random initialization vector from the system CSPRNG.
pub fn create_iv() -> Result<[u8; AES_BLOCK_SIZE], CryptoError> {
    create_iv_with(&SystemEntropySource {})
}

/// Fresh random initialization vector from `entropy`.
pub fn create_iv_with<S>(entropy: &S) -> Result<[u8; AES_BLOCK_SIZE], CryptoError>
where
    S: EntropySource + ?Sized,
{
    let mut iv = [0u8; AES_BLOCK_SIZE];

    entropy
        .fill_bytes(&mut iv)
        .map_err(|_| CryptoError::RandomGenerationFailed)?;

    Ok(iv)
}

/// AES-CBC encryption with PKCS#7 padding.
///
/// # Errors
///
/// [`CryptoError::InvalidIvSize`] unless `iv` is exactly one block.
pub fn encrypt_symmetric<P, K>(
    provider: &P,
    key: &K,
    plaintext: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    P: SymmetricProvider,
    K: SymmetricKeyCapable<SizePolicy = AesKeySizePolicy>,
{
    check_iv(iv)?;

    key.key_data().with_bytes(|key_bytes| {
        invoke("aes_cbc_encrypt", || {
            provider.aes_cbc_encrypt(key_bytes, iv, plaintext)
        })
    })
}

/// AES-CBC decryption with PKCS#7 padding.
///
/// # Errors
///
/// - [`CryptoError::InvalidIvSize`] unless `iv` is exactly one block.
/// - [`CryptoError::DataLengthInvalid`] unless `ciphertext` is a non-empty
///   multiple of the block size.
pub fn decrypt_symmetric<P, K>(
    provider: &P,
    key: &K,
    ciphertext: &[u8],
    iv: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError>
where
    P: SymmetricProvider,
    K: SymmetricKeyCapable<SizePolicy = AesKeySizePolicy>,
{
    check_iv(iv)?;

    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        debug!(len = ciphertext.len(), "ciphertext length rejected");
        return Err(CryptoError::DataLengthInvalid);
    }

    key.key_data().with_bytes(|key_bytes| {
        invoke("aes_cbc_decrypt", || {
            provider.aes_cbc_decrypt(key_bytes, iv, ciphertext)
        })
    })
}

/// HMAC authentication code over `data`.
pub fn authenticate<P, K>(
    provider: &P,
    key: &K,
    algorithm: HmacAlgorithm,
    data: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    P: SymmetricProvider,
    K: SymmetricKeyCapable,
{
    key.key_data()
        .with_bytes(|key_bytes| invoke("hmac", || provider.hmac(algorithm, key_bytes, data)))
}

/// Recomputes the authentication code and compares it in constant time.
pub fn is_valid_authentication_code<P, K>(
    provider: &P,
    key: &K,
    algorithm: HmacAlgorithm,
    code: &[u8],
    data: &[u8],
) -> Result<Verification, CryptoError>
where
    P: SymmetricProvider,
    K: SymmetricKeyCapable,
{
    let expected = Zeroizing::new(authenticate(provider, key, algorithm, data)?);

    Ok(Verification::from(constant_time_eq(&expected, code)))
}
