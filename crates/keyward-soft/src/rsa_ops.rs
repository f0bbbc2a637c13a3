// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RSA padding selection, PKCS#1 DER encoding.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, Pss, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use keyward_core::{
    DigestAlgorithm, RsaDigestSignatureAlgorithm, RsaEncryptionAlgorithm, RsaSignatureAlgorithm,
};
use keyward_rand::EntropySource;

use crate::error::SoftError;
use crate::hash::digest;
use crate::rng::EntropyRng;

fn oaep(algorithm: DigestAlgorithm) -> Oaep {
    match algorithm {
        DigestAlgorithm::Sha1 => Oaep::new::<Sha1>(),
        DigestAlgorithm::Sha224 => Oaep::new::<Sha224>(),
        DigestAlgorithm::Sha256 => Oaep::new::<Sha256>(),
        DigestAlgorithm::Sha384 => Oaep::new::<Sha384>(),
        DigestAlgorithm::Sha512 => Oaep::new::<Sha512>(),
    }
}

fn pss(algorithm: DigestAlgorithm) -> Pss {
    match algorithm {
        DigestAlgorithm::Sha1 => Pss::new::<Sha1>(),
        DigestAlgorithm::Sha224 => Pss::new::<Sha224>(),
        DigestAlgorithm::Sha256 => Pss::new::<Sha256>(),
        DigestAlgorithm::Sha384 => Pss::new::<Sha384>(),
        DigestAlgorithm::Sha512 => Pss::new::<Sha512>(),
    }
}

fn pkcs1v15(algorithm: DigestAlgorithm) -> Pkcs1v15Sign {
    match algorithm {
        DigestAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        DigestAlgorithm::Sha224 => Pkcs1v15Sign::new::<Sha224>(),
        DigestAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        DigestAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        DigestAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

pub(crate) fn generate<S: EntropySource>(
    rng: &mut EntropyRng<S>,
    bits: u32,
) -> Result<RsaPrivateKey, SoftError> {
    let bits = usize::try_from(bits).map_err(|_| SoftError::UnsupportedKeySize)?;

    RsaPrivateKey::new(rng, bits).map_err(|_| SoftError::OperationFailed)
}

pub(crate) fn encrypt<S: EntropySource>(
    rng: &mut EntropyRng<S>,
    key: &RsaPublicKey,
    algorithm: RsaEncryptionAlgorithm,
    plaintext: &[u8],
) -> Result<Vec<u8>, SoftError> {
    if algorithm.is_hybrid() || algorithm == RsaEncryptionAlgorithm::Raw {
        return Err(SoftError::UnsupportedAlgorithm);
    }

    let result = match algorithm.digest() {
        Some(hash) => key.encrypt(rng, oaep(hash), plaintext),
        None => key.encrypt(rng, Pkcs1v15Encrypt, plaintext),
    };

    result.map_err(|_| SoftError::MalformedInput)
}

pub(crate) fn decrypt(
    key: &RsaPrivateKey,
    algorithm: RsaEncryptionAlgorithm,
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, SoftError> {
    if algorithm.is_hybrid() || algorithm == RsaEncryptionAlgorithm::Raw {
        return Err(SoftError::UnsupportedAlgorithm);
    }

    let result = match algorithm.digest() {
        Some(hash) => key.decrypt(oaep(hash), ciphertext),
        None => key.decrypt(Pkcs1v15Encrypt, ciphertext),
    };

    result.map(Zeroizing::new).map_err(|_| SoftError::MalformedInput)
}

fn sign_hashed<S: EntropySource>(
    rng: &mut EntropyRng<S>,
    key: &RsaPrivateKey,
    algorithm: RsaSignatureAlgorithm,
    hashed: &[u8],
) -> Result<Vec<u8>, SoftError> {
    let result = if algorithm.is_pss() {
        key.sign_with_rng(rng, pss(algorithm.digest()), hashed)
    } else {
        key.sign(pkcs1v15(algorithm.digest()), hashed)
    };

    result.map_err(|_| SoftError::OperationFailed)
}

pub(crate) fn sign_message<S: EntropySource>(
    rng: &mut EntropyRng<S>,
    key: &RsaPrivateKey,
    algorithm: RsaSignatureAlgorithm,
    message: &[u8],
) -> Result<Vec<u8>, SoftError> {
    sign_hashed(rng, key, algorithm, &digest(algorithm.digest(), message))
}

pub(crate) fn sign_digest<S: EntropySource>(
    rng: &mut EntropyRng<S>,
    key: &RsaPrivateKey,
    algorithm: RsaDigestSignatureAlgorithm,
    hashed: &[u8],
) -> Result<Vec<u8>, SoftError> {
    match algorithm {
        RsaDigestSignatureAlgorithm::Pkcs1v15Raw => key
            .sign(Pkcs1v15Sign::new_unprefixed(), hashed)
            .map_err(|_| SoftError::OperationFailed),
        RsaDigestSignatureAlgorithm::Hashed(algorithm) => sign_hashed(rng, key, algorithm, hashed),
    }
}

fn verify_hashed(
    key: &RsaPublicKey,
    algorithm: RsaSignatureAlgorithm,
    hashed: &[u8],
    signature: &[u8],
) -> bool {
    let result = if algorithm.is_pss() {
        key.verify(pss(algorithm.digest()), hashed, signature)
    } else {
        key.verify(pkcs1v15(algorithm.digest()), hashed, signature)
    };

    result.is_ok()
}

pub(crate) fn verify_message(
    key: &RsaPublicKey,
    algorithm: RsaSignatureAlgorithm,
    message: &[u8],
    signature: &[u8],
) -> bool {
    verify_hashed(key, algorithm, &digest(algorithm.digest(), message), signature)
}

pub(crate) fn verify_digest(
    key: &RsaPublicKey,
    algorithm: RsaDigestSignatureAlgorithm,
    hashed: &[u8],
    signature: &[u8],
) -> bool {
    match algorithm {
        RsaDigestSignatureAlgorithm::Pkcs1v15Raw => key
            .verify(Pkcs1v15Sign::new_unprefixed(), hashed, signature)
            .is_ok(),
        RsaDigestSignatureAlgorithm::Hashed(algorithm) => {
            verify_hashed(key, algorithm, hashed, signature)
        }
    }
}

pub(crate) fn export_private(key: &RsaPrivateKey) -> Result<Zeroizing<Vec<u8>>, SoftError> {
    let document = key.to_pkcs1_der().map_err(|_| SoftError::MalformedKey)?;

    Ok(Zeroizing::new(document.as_bytes().to_vec()))
}

pub(crate) fn export_public(key: &RsaPublicKey) -> Result<Vec<u8>, SoftError> {
    let document = key.to_pkcs1_der().map_err(|_| SoftError::MalformedKey)?;

    Ok(document.as_bytes().to_vec())
}

pub(crate) fn import_private(bytes: &[u8]) -> Result<RsaPrivateKey, SoftError> {
    RsaPrivateKey::from_pkcs1_der(bytes).map_err(|_| SoftError::MalformedKey)
}

pub(crate) fn import_public(bytes: &[u8]) -> Result<RsaPublicKey, SoftError> {
    RsaPublicKey::from_pkcs1_der(bytes).map_err(|_| SoftError::MalformedKey)
}
