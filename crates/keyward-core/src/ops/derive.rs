// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_buffer::SecureBuffer;
use tracing::debug;

use crate::adapter::invoke;
use crate::algorithm::{AesKeySize, PseudoRandomAlgorithm};
use crate::error::CryptoError;
use crate::keys::AesKey;
use crate::material::KeyMaterial;
use crate::provider::SymmetricProvider;

/// PBKDF2 key derivation straight into a locked buffer.
///
/// The derived bytes are written by the provider into the buffer's locked
/// pages; no intermediate copy exists.
///
/// # Errors
///
/// - [`CryptoError::InvalidPassword`] / [`CryptoError::InvalidSalt`] if either
///   input is not valid UTF-8.
/// - [`CryptoError::DataLengthInvalid`] for a zero `output_len`.
/// - The provider's derivation failure otherwise.
pub fn derive_key<P>(
    provider: &P,
    password: &[u8],
    salt: &[u8],
    prf: PseudoRandomAlgorithm,
    rounds: u32,
    output_len: usize,
) -> Result<SecureBuffer, CryptoError>
where
    P: SymmetricProvider,
{
    core::str::from_utf8(password).map_err(|_| CryptoError::InvalidPassword)?;
    core::str::from_utf8(salt).map_err(|_| CryptoError::InvalidSalt)?;

    if output_len == 0 {
        debug!("zero-length derivation rejected");
        return Err(CryptoError::DataLengthInvalid);
    }

    SecureBuffer::create(output_len, |out| {
        invoke("derive_pbkdf2", || {
            provider.derive_pbkdf2(password, salt, prf, rounds, out)
        })
    })
}

/// Derives an AES key of `size` from a password.
pub fn derive_aes_key<P>(
    provider: &P,
    password: &[u8],
    salt: &[u8],
    prf: PseudoRandomAlgorithm,
    rounds: u32,
    size: AesKeySize,
) -> Result<AesKey, CryptoError>
where
    P: SymmetricProvider,
{
    let key_data = derive_key(provider, password, salt, prf, rounds, size.byte_count())?;

    AesKey::from_key_data(key_data)
}
