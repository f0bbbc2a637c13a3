// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2, AES-CBC and HMAC.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use tracing::warn;
use zeroize::Zeroizing;

use keyward_core::{HmacAlgorithm, PseudoRandomAlgorithm, SymmetricProvider};

use crate::error::SoftError;
use crate::provider::SoftwareProvider;

fn encrypt_with<C>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, SoftError>
where
    C: KeyIvInit + BlockEncryptMut,
{
    let cipher = C::new_from_slices(key, iv).map_err(|_| SoftError::MalformedKey)?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn decrypt_with<C>(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, SoftError>
where
    C: KeyIvInit + BlockDecryptMut,
{
    let cipher = C::new_from_slices(key, iv).map_err(|_| SoftError::MalformedKey)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| {
            warn!("AES-CBC padding check failed");
            SoftError::MalformedInput
        })
}

fn mac_with<M: Mac + hmac::digest::KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SoftError> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| SoftError::MalformedKey)?;
    mac.update(data);

    Ok(mac.finalize().into_bytes().to_vec())
}

impl SymmetricProvider for SoftwareProvider {
    type Error = SoftError;

    fn derive_pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        prf: PseudoRandomAlgorithm,
        rounds: u32,
        out: &mut [u8],
    ) -> Result<(), SoftError> {
        if rounds == 0 {
            return Err(SoftError::DerivationFailed);
        }

        match prf {
            PseudoRandomAlgorithm::HmacSha1 => pbkdf2_hmac::<Sha1>(password, salt, rounds, out),
            PseudoRandomAlgorithm::HmacSha224 => pbkdf2_hmac::<Sha224>(password, salt, rounds, out),
            PseudoRandomAlgorithm::HmacSha256 => pbkdf2_hmac::<Sha256>(password, salt, rounds, out),
            PseudoRandomAlgorithm::HmacSha384 => pbkdf2_hmac::<Sha384>(password, salt, rounds, out),
            PseudoRandomAlgorithm::HmacSha512 => pbkdf2_hmac::<Sha512>(password, salt, rounds, out),
        }

        Ok(())
    }

    fn aes_cbc_encrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, SoftError> {
        match key.len() {
            16 => encrypt_with::<cbc::Encryptor<Aes128>>(key, iv, plaintext),
            24 => encrypt_with::<cbc::Encryptor<Aes192>>(key, iv, plaintext),
            32 => encrypt_with::<cbc::Encryptor<Aes256>>(key, iv, plaintext),
            _ => Err(SoftError::MalformedKey),
        }
    }

    fn aes_cbc_decrypt(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, SoftError> {
        match key.len() {
            16 => decrypt_with::<cbc::Decryptor<Aes128>>(key, iv, ciphertext),
            24 => decrypt_with::<cbc::Decryptor<Aes192>>(key, iv, ciphertext),
            32 => decrypt_with::<cbc::Decryptor<Aes256>>(key, iv, ciphertext),
            _ => Err(SoftError::MalformedKey),
        }
    }

    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, SoftError> {
        match algorithm {
            HmacAlgorithm::Sha224 => mac_with::<Hmac<Sha224>>(key, data),
            HmacAlgorithm::Sha256 => mac_with::<Hmac<Sha256>>(key, data),
            HmacAlgorithm::Sha384 => mac_with::<Hmac<Sha384>>(key, data),
            HmacAlgorithm::Sha512 => mac_with::<Hmac<Sha512>>(key, data),
        }
    }
}
