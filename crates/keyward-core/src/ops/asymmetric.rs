// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_buffer::SecureBuffer;
use tracing::debug;
use zeroize::Zeroizing;

use crate::adapter::invoke;
use crate::algorithm::{
    AlgorithmFamily, DigestSignatureAlgorithm, Ecc, EncryptionAlgorithm, KeyExchangeAlgorithm,
    SignatureAlgorithm,
};
use crate::capability::{AsymmetricKey, PrivateKeyCapable, PublicKeyCapable};
use crate::error::{CryptoError, Verification};
use crate::provider::CryptoProvider;

type EncryptionOf<K> = <<K as AsymmetricKey>::Family as AlgorithmFamily>::EncryptionAlgorithm;
type SignatureOf<K> = <<K as AsymmetricKey>::Family as AlgorithmFamily>::SignatureAlgorithm;
type DigestSignatureOf<K> =
    <<K as AsymmetricKey>::Family as AlgorithmFamily>::DigestSignatureAlgorithm;

fn reject_length(operation: &'static str, len: usize, limit: usize) -> CryptoError {
    debug!(operation, len, limit, "input length rejected");

    CryptoError::DataLengthInvalid
}

/// Encrypts `plaintext` with a public key.
///
/// # Errors
///
/// [`CryptoError::DataLengthInvalid`] if `plaintext` exceeds the algorithm's
/// maximum for this key size; the provider is not called in that case.
pub fn encrypt<K>(
    key: &K,
    algorithm: EncryptionOf<K>,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    K: PublicKeyCapable,
{
    if let Some(max) = algorithm.max_plaintext_len(key.block_size()) {
        if plaintext.len() > max {
            return Err(reject_length("encrypt", plaintext.len(), max));
        }
    }

    let validated = key.validated();

    invoke("encrypt", || {
        validated
            .provider()
            .encrypt(validated.handle(), algorithm.id(), plaintext)
    })
}

/// Decrypts `ciphertext` with a private key.
///
/// For algorithms with a plaintext limit the ciphertext may not exceed the key's
/// block size.
pub fn decrypt<K>(
    key: &K,
    algorithm: EncryptionOf<K>,
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError>
where
    K: PrivateKeyCapable,
{
    let block_size = key.block_size();

    if algorithm.max_plaintext_len(block_size).is_some() && ciphertext.len() > block_size {
        return Err(reject_length("decrypt", ciphertext.len(), block_size));
    }

    let validated = key.validated();

    invoke("decrypt", || {
        validated
            .provider()
            .decrypt(validated.handle(), algorithm.id(), ciphertext)
    })
}

/// Signs an arbitrary-length message. The provider hashes it with the
/// algorithm's digest.
pub fn sign<K>(key: &K, algorithm: SignatureOf<K>, message: &[u8]) -> Result<Vec<u8>, CryptoError>
where
    K: PrivateKeyCapable,
{
    let validated = key.validated();

    invoke("sign", || {
        validated
            .provider()
            .sign(validated.handle(), algorithm.message_id(), message)
    })
}

/// Signs a precomputed digest. The input is not hashed again.
///
/// # Errors
///
/// [`CryptoError::DataLengthInvalid`] if the digest length does not fit the
/// algorithm; the provider is not called in that case.
pub fn sign_digest<K>(
    key: &K,
    algorithm: DigestSignatureOf<K>,
    digest: &[u8],
) -> Result<Vec<u8>, CryptoError>
where
    K: PrivateKeyCapable,
{
    let block_size = key.block_size();

    if !algorithm.accepts_digest_len(digest.len(), block_size) {
        return Err(reject_length("sign_digest", digest.len(), block_size));
    }

    let validated = key.validated();

    invoke("sign_digest", || {
        validated
            .provider()
            .sign(validated.handle(), algorithm.digest_id(), digest)
    })
}

/// Verifies a message signature.
///
/// A mismatch is [`Verification::Invalid`]; errors are reserved for
/// unsupported algorithms and provider failures.
pub fn verify<K>(
    key: &K,
    algorithm: SignatureOf<K>,
    message: &[u8],
    signature: &[u8],
) -> Result<Verification, CryptoError>
where
    K: PublicKeyCapable,
{
    let validated = key.validated();

    let valid = invoke("verify", || {
        validated
            .provider()
            .verify(validated.handle(), algorithm.message_id(), message, signature)
    })?;

    Ok(Verification::from(valid))
}

/// Verifies a signature over a precomputed digest.
pub fn verify_digest<K>(
    key: &K,
    algorithm: DigestSignatureOf<K>,
    digest: &[u8],
    signature: &[u8],
) -> Result<Verification, CryptoError>
where
    K: PublicKeyCapable,
{
    let block_size = key.block_size();

    if !algorithm.accepts_digest_len(digest.len(), block_size) {
        return Err(reject_length("verify_digest", digest.len(), block_size));
    }

    let validated = key.validated();

    let valid = invoke("verify_digest", || {
        validated
            .provider()
            .verify(validated.handle(), algorithm.digest_id(), digest, signature)
    })?;

    Ok(Verification::from(valid))
}

/// Computes an ECDH shared secret into a locked buffer.
///
/// Raw variants ([`KeyExchangeAlgorithm::Standard`],
/// [`KeyExchangeAlgorithm::Cofactor`]) always produce the curve's field length
/// and ignore `requested_size`. X9.63 variants produce `requested_size` bytes,
/// which must be non-zero.
///
/// # Errors
///
/// - [`CryptoError::UnsupportedOperation`] if the keys are on different curves.
/// - [`CryptoError::DataLengthInvalid`] for a zero-length X9.63 request.
pub fn exchange_shared_secret<K, Q>(
    private: &K,
    public: &Q,
    algorithm: KeyExchangeAlgorithm,
    requested_size: usize,
    shared_info: &[u8],
) -> Result<SecureBuffer, CryptoError>
where
    K: PrivateKeyCapable<Family = Ecc>,
    Q: PublicKeyCapable<Family = Ecc, Provider = K::Provider>,
{
    let curve = private.descriptor();

    if public.size_in_bits() != curve.bits() {
        debug!(?curve, public_bits = public.size_in_bits(), "key exchange curve mismatch");
        return Err(CryptoError::UnsupportedOperation);
    }

    let output_len = match algorithm.kdf() {
        None => curve.field_len(),
        Some(_) if requested_size == 0 => {
            return Err(reject_length("exchange_shared_secret", requested_size, 1));
        }
        Some(_) => requested_size,
    };

    let validated = private.validated();
    let provider = validated.provider();

    let mut secret = invoke("key_exchange", || {
        provider.key_exchange(
            validated.handle(),
            public.provider_handle(),
            algorithm.id(),
            output_len,
            shared_info,
        )
    })?;

    Ok(SecureBuffer::transfer_from(&mut secret[..], true)?)
}
