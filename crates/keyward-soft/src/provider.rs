// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use keyward_core::{
    AlgorithmId, CryptoProvider, EccCurve, Isolation, KeyAttributes, KeyClass, KeyPairSpec,
    KeyType,
};
use keyward_rand::SystemEntropySource;

use crate::config::SoftProviderConfig;
use crate::ecc::{p256_ops, p384_ops};
use crate::error::SoftError;
use crate::handle::{SoftHandle, SoftKey};
use crate::hash::{digest, x963_kdf};
use crate::rng::EntropyRng;
use crate::rsa_ops;

/// Software implementation of the provider interfaces.
///
/// Clones share one configuration. Hardware isolation is simulated: P-256 keys
/// generated with [`Isolation::Hardware`] report themselves isolated and refuse
/// export.
#[derive(Debug, Clone, Default)]
pub struct SoftwareProvider {
    config: Arc<SoftProviderConfig>,
}

fn system_rng() -> Result<EntropyRng<SystemEntropySource>, SoftError> {
    EntropyRng::checked(SystemEntropySource {})
}

impl SoftwareProvider {
    /// Creates a provider with an explicit configuration.
    pub fn new(config: SoftProviderConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SoftProviderConfig {
        &self.config
    }

    fn generate_rsa(&self, bits: u32) -> Result<SoftKey, SoftError> {
        if bits < self.config.min_rsa_key_bits {
            warn!(bits, min = self.config.min_rsa_key_bits, "RSA key size below minimum");
            return Err(SoftError::UnsupportedKeySize);
        }

        let key = rsa_ops::generate(&mut system_rng()?, bits)?;

        Ok(SoftKey::RsaPrivate(Box::new(key)))
    }

    fn generate_ecc(&self, curve: EccCurve) -> Result<SoftKey, SoftError> {
        match curve {
            EccCurve::P256 => Ok(SoftKey::P256Private(p256_ops::generate(&mut system_rng()?))),
            EccCurve::P384 => Ok(SoftKey::P384Private(p384_ops::generate(&mut system_rng()?))),
            EccCurve::P192 | EccCurve::P521 => {
                warn!(?curve, "curve not supported in software");
                Err(SoftError::UnsupportedKeySize)
            }
        }
    }

    fn check_isolation(&self, spec: KeyPairSpec) -> Result<(), SoftError> {
        if !self.config.allow_hardware_isolation {
            warn!("hardware isolation disabled by configuration");
            return Err(SoftError::HardwareIsolationUnavailable);
        }

        match spec {
            KeyPairSpec::Ecc {
                curve: EccCurve::P256,
            } => Ok(()),
            _ => {
                warn!(?spec, "hardware isolation supports P-256 only");
                Err(SoftError::HardwareIsolationUnavailable)
            }
        }
    }
}

fn unsupported(algorithm: AlgorithmId) -> SoftError {
    warn!(?algorithm, "algorithm not supported for this key");
    SoftError::UnsupportedAlgorithm
}

impl CryptoProvider for SoftwareProvider {
    type Handle = SoftHandle;
    type Error = SoftError;

    fn generate_key_pair(
        &self,
        spec: KeyPairSpec,
        isolation: Isolation,
    ) -> Result<SoftHandle, SoftError> {
        if isolation == Isolation::Hardware {
            self.check_isolation(spec)?;
        }

        let key = match spec {
            KeyPairSpec::Rsa { bits } => self.generate_rsa(bits)?,
            KeyPairSpec::Ecc { curve } => self.generate_ecc(curve)?,
        };

        debug!(?spec, ?isolation, "generated key pair");

        Ok(SoftHandle::new(key, isolation))
    }

    fn public_key_for(&self, handle: &SoftHandle) -> Result<SoftHandle, SoftError> {
        let public = match handle.key() {
            SoftKey::RsaPrivate(key) => SoftKey::RsaPublic(Box::new(key.to_public_key())),
            SoftKey::P256Private(key) => SoftKey::P256Public(key.verifying_key().clone()),
            SoftKey::P384Private(key) => SoftKey::P384Public(key.verifying_key().clone()),
            SoftKey::RsaPublic(_) | SoftKey::P256Public(_) | SoftKey::P384Public(_) => {
                return Err(SoftError::WrongKeyKind);
            }
        };

        Ok(SoftHandle::new(public, Isolation::Software))
    }

    fn import_external_representation(
        &self,
        key_type: KeyType,
        key_class: KeyClass,
        bytes: &[u8],
    ) -> Result<SoftHandle, SoftError> {
        let key = match (key_type, key_class) {
            (KeyType::Rsa, KeyClass::Private) => {
                SoftKey::RsaPrivate(Box::new(rsa_ops::import_private(bytes)?))
            }
            (KeyType::Rsa, KeyClass::Public) => {
                SoftKey::RsaPublic(Box::new(rsa_ops::import_public(bytes)?))
            }
            (KeyType::Ecc, KeyClass::Private) => match bytes.len() {
                len if len == p256_ops::POINT_LEN + p256_ops::FIELD_LEN => {
                    SoftKey::P256Private(p256_ops::import_private(bytes)?)
                }
                len if len == p384_ops::POINT_LEN + p384_ops::FIELD_LEN => {
                    SoftKey::P384Private(p384_ops::import_private(bytes)?)
                }
                _ => return Err(SoftError::MalformedKey),
            },
            (KeyType::Ecc, KeyClass::Public) => match bytes.len() {
                p256_ops::POINT_LEN => SoftKey::P256Public(p256_ops::import_public(bytes)?),
                p384_ops::POINT_LEN => SoftKey::P384Public(p384_ops::import_public(bytes)?),
                _ => return Err(SoftError::MalformedKey),
            },
            (_, KeyClass::Symmetric) => return Err(SoftError::UnsupportedAlgorithm),
        };

        debug!(key = key.name(), "imported external representation");

        Ok(SoftHandle::new(key, Isolation::Software))
    }

    fn export_external_representation(
        &self,
        handle: &SoftHandle,
    ) -> Result<Zeroizing<Vec<u8>>, SoftError> {
        if handle.is_hardware_isolated() {
            warn!(key = handle.key().name(), "export of isolated key refused");
            return Err(SoftError::KeyNotExportable);
        }

        match handle.key() {
            SoftKey::RsaPrivate(key) => rsa_ops::export_private(key),
            SoftKey::RsaPublic(key) => rsa_ops::export_public(key).map(Zeroizing::new),
            SoftKey::P256Private(key) => Ok(p256_ops::export_private(key)),
            SoftKey::P256Public(key) => Ok(Zeroizing::new(p256_ops::export_public(key))),
            SoftKey::P384Private(key) => Ok(p384_ops::export_private(key)),
            SoftKey::P384Public(key) => Ok(Zeroizing::new(p384_ops::export_public(key))),
        }
    }

    fn inspect_attributes(&self, handle: &SoftHandle) -> Result<KeyAttributes, SoftError> {
        Ok(handle.attributes())
    }

    fn encrypt(
        &self,
        handle: &SoftHandle,
        algorithm: AlgorithmId,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, SoftError> {
        match (handle.key(), algorithm) {
            (SoftKey::RsaPublic(key), AlgorithmId::RsaEncryption(algorithm)) => {
                rsa_ops::encrypt(&mut system_rng()?, key, algorithm, plaintext)
            }
            _ => Err(unsupported(algorithm)),
        }
    }

    fn decrypt(
        &self,
        handle: &SoftHandle,
        algorithm: AlgorithmId,
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, SoftError> {
        match (handle.key(), algorithm) {
            (SoftKey::RsaPrivate(key), AlgorithmId::RsaEncryption(algorithm)) => {
                rsa_ops::decrypt(key, algorithm, ciphertext)
            }
            _ => Err(unsupported(algorithm)),
        }
    }

    fn sign(
        &self,
        handle: &SoftHandle,
        algorithm: AlgorithmId,
        data: &[u8],
    ) -> Result<Vec<u8>, SoftError> {
        match (handle.key(), algorithm) {
            (SoftKey::RsaPrivate(key), AlgorithmId::RsaMessageSignature(algorithm)) => {
                rsa_ops::sign_message(&mut system_rng()?, key, algorithm, data)
            }
            (SoftKey::RsaPrivate(key), AlgorithmId::RsaDigestSignature(algorithm)) => {
                rsa_ops::sign_digest(&mut system_rng()?, key, algorithm, data)
            }
            (SoftKey::P256Private(key), AlgorithmId::EcdsaMessage(algorithm)) => {
                p256_ops::sign_prehash(key, &digest(algorithm.digest(), data))
            }
            (SoftKey::P256Private(key), AlgorithmId::EcdsaDigest(_)) => {
                p256_ops::sign_prehash(key, data)
            }
            (SoftKey::P384Private(key), AlgorithmId::EcdsaMessage(algorithm)) => {
                p384_ops::sign_prehash(key, &digest(algorithm.digest(), data))
            }
            (SoftKey::P384Private(key), AlgorithmId::EcdsaDigest(_)) => {
                p384_ops::sign_prehash(key, data)
            }
            _ => Err(unsupported(algorithm)),
        }
    }

    fn verify(
        &self,
        handle: &SoftHandle,
        algorithm: AlgorithmId,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, SoftError> {
        let valid = match (handle.key(), algorithm) {
            (SoftKey::RsaPublic(key), AlgorithmId::RsaMessageSignature(algorithm)) => {
                rsa_ops::verify_message(key, algorithm, data, signature)
            }
            (SoftKey::RsaPublic(key), AlgorithmId::RsaDigestSignature(algorithm)) => {
                rsa_ops::verify_digest(key, algorithm, data, signature)
            }
            (SoftKey::P256Public(key), AlgorithmId::EcdsaMessage(algorithm)) => {
                p256_ops::verify_prehash(key, &digest(algorithm.digest(), data), signature)
            }
            (SoftKey::P256Public(key), AlgorithmId::EcdsaDigest(_)) => {
                p256_ops::verify_prehash(key, data, signature)
            }
            (SoftKey::P384Public(key), AlgorithmId::EcdsaMessage(algorithm)) => {
                p384_ops::verify_prehash(key, &digest(algorithm.digest(), data), signature)
            }
            (SoftKey::P384Public(key), AlgorithmId::EcdsaDigest(_)) => {
                p384_ops::verify_prehash(key, data, signature)
            }
            _ => return Err(unsupported(algorithm)),
        };

        Ok(valid)
    }

    fn key_exchange(
        &self,
        private: &SoftHandle,
        public: &SoftHandle,
        algorithm: AlgorithmId,
        requested_size: usize,
        shared_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, SoftError> {
        let AlgorithmId::EcdhKeyExchange(exchange) = algorithm else {
            return Err(unsupported(algorithm));
        };

        // The NIST prime curves have cofactor 1: cofactor and standard ECDH agree
        let shared_secret = match (private.key(), public.key()) {
            (SoftKey::P256Private(private), SoftKey::P256Public(public)) => {
                p256_ops::diffie_hellman(private, public)
            }
            (SoftKey::P384Private(private), SoftKey::P384Public(public)) => {
                p384_ops::diffie_hellman(private, public)
            }
            _ => return Err(SoftError::WrongKeyKind),
        };

        match exchange.kdf() {
            None => Ok(shared_secret),
            Some(hash) if requested_size > 0 => {
                Ok(x963_kdf(hash, &shared_secret, shared_info, requested_size))
            }
            Some(_) => Err(SoftError::MalformedInput),
        }
    }
}
