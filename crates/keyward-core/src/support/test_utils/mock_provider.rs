// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use zeroize::Zeroizing;

use crate::algorithm::{AES_BLOCK_SIZE, AlgorithmId, HmacAlgorithm, PseudoRandomAlgorithm};
use crate::error::ProviderErrorKind;
use crate::provider::{
    CryptoProvider, Isolation, KeyAttributes, KeyClass, KeyPairSpec, KeyType, ProviderFailure,
    SymmetricProvider,
};

/// Index into the mock's key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockHandle(pub usize);

/// Error returned by [`MockProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError {
    /// Reported kind.
    pub kind: ProviderErrorKind,
    /// Reported code.
    pub code: i64,
}

impl ProviderFailure for MockError {
    fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    fn code(&self) -> i64 {
        self.code
    }
}

/// Configurable behavior for [`MockProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockProviderBehaviour {
    /// Normal operation.
    None,
    /// Every operation (not inspection) fails with the given error.
    FailAlways(MockError),
    /// Inspection fails with the given error.
    FailInspect(MockError),
}

struct MockState {
    keys: Mutex<Vec<KeyAttributes>>,
    behaviour: Mutex<MockProviderBehaviour>,
    operation_calls: AtomicUsize,
    inspect_calls: AtomicUsize,
}

/// Deterministic in-memory provider.
///
/// - encrypt / decrypt XOR every byte with `0xFF`;
/// - a signature is the signed data reversed;
/// - AES-CBC XORs the PKCS#7-padded input with the IV;
/// - key exchange returns `requested_size` bytes of `0x42`.
///
/// Handles index a table of attributes registered with
/// [`MockProvider::register`], so tests can hand out handles that lie about
/// their class. Clones share state.
#[derive(Clone)]
pub struct MockProvider {
    state: Arc<MockState>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

const NOT_FOUND: MockError = MockError {
    kind: ProviderErrorKind::InvalidInput,
    code: -1,
};

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(MockProviderBehaviour::None)
    }
}

impl MockProvider {
    /// Creates an empty provider with the given behaviour.
    pub fn new(behaviour: MockProviderBehaviour) -> Self {
        Self {
            state: Arc::new(MockState {
                keys: Mutex::new(Vec::new()),
                behaviour: Mutex::new(behaviour),
                operation_calls: AtomicUsize::new(0),
                inspect_calls: AtomicUsize::new(0),
            }),
        }
    }

    /// Changes the behaviour for every clone.
    pub fn change_behaviour(&self, behaviour: MockProviderBehaviour) {
        *lock(&self.state.behaviour) = behaviour;
    }

    /// Adds a key with the given attributes and returns its handle.
    pub fn register(&self, attributes: KeyAttributes) -> MockHandle {
        let mut keys = lock(&self.state.keys);
        keys.push(attributes);

        MockHandle(keys.len() - 1)
    }

    /// Number of provider calls other than inspection.
    pub fn operation_calls(&self) -> usize {
        self.state.operation_calls.load(Ordering::SeqCst)
    }

    /// Number of inspection calls.
    pub fn inspect_calls(&self) -> usize {
        self.state.inspect_calls.load(Ordering::SeqCst)
    }

    fn begin_operation(&self) -> Result<(), MockError> {
        self.state.operation_calls.fetch_add(1, Ordering::SeqCst);

        match *lock(&self.state.behaviour) {
            MockProviderBehaviour::FailAlways(error) => Err(error),
            _ => Ok(()),
        }
    }

    fn attributes_of(&self, handle: &MockHandle) -> Result<KeyAttributes, MockError> {
        lock(&self.state.keys).get(handle.0).copied().ok_or(NOT_FOUND)
    }
}

fn invert(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|byte| byte ^ 0xFF).collect()
}

fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

fn xor_with_iv(bytes: &mut [u8], iv: &[u8]) {
    for (index, byte) in bytes.iter_mut().enumerate() {
        *byte ^= iv[index % iv.len()];
    }
}

impl CryptoProvider for MockProvider {
    type Handle = MockHandle;
    type Error = MockError;

    fn generate_key_pair(
        &self,
        spec: KeyPairSpec,
        isolation: Isolation,
    ) -> Result<MockHandle, MockError> {
        self.begin_operation()?;

        let (key_type, size_in_bits) = match spec {
            KeyPairSpec::Rsa { bits } => (KeyType::Rsa, bits as usize),
            KeyPairSpec::Ecc { curve } => (KeyType::Ecc, curve.bits()),
        };

        Ok(self.register(KeyAttributes {
            key_class: KeyClass::Private,
            key_type: Some(key_type),
            is_hardware_isolated: isolation == Isolation::Hardware,
            size_in_bits,
        }))
    }

    fn public_key_for(&self, handle: &MockHandle) -> Result<MockHandle, MockError> {
        self.begin_operation()?;

        let private = self.attributes_of(handle)?;

        Ok(self.register(KeyAttributes {
            key_class: KeyClass::Public,
            is_hardware_isolated: false,
            ..private
        }))
    }

    fn import_external_representation(
        &self,
        key_type: KeyType,
        key_class: KeyClass,
        bytes: &[u8],
    ) -> Result<MockHandle, MockError> {
        self.begin_operation()?;

        Ok(self.register(KeyAttributes {
            key_class,
            key_type: Some(key_type),
            is_hardware_isolated: false,
            size_in_bits: bytes.len() * 8,
        }))
    }

    fn export_external_representation(
        &self,
        handle: &MockHandle,
    ) -> Result<Zeroizing<Vec<u8>>, MockError> {
        self.begin_operation()?;

        let attributes = self.attributes_of(handle)?;

        if attributes.is_hardware_isolated {
            return Err(MockError {
                kind: ProviderErrorKind::KeyNotExportable,
                code: -2,
            });
        }

        Ok(Zeroizing::new(vec![0xAB; attributes.size_in_bits / 8]))
    }

    fn inspect_attributes(&self, handle: &MockHandle) -> Result<KeyAttributes, MockError> {
        self.state.inspect_calls.fetch_add(1, Ordering::SeqCst);

        if let MockProviderBehaviour::FailInspect(error) = *lock(&self.state.behaviour) {
            return Err(error);
        }

        self.attributes_of(handle)
    }

    fn encrypt(
        &self,
        _handle: &MockHandle,
        _algorithm: AlgorithmId,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, MockError> {
        self.begin_operation()?;

        Ok(invert(plaintext))
    }

    fn decrypt(
        &self,
        _handle: &MockHandle,
        _algorithm: AlgorithmId,
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, MockError> {
        self.begin_operation()?;

        Ok(Zeroizing::new(invert(ciphertext)))
    }

    fn sign(
        &self,
        _handle: &MockHandle,
        _algorithm: AlgorithmId,
        data: &[u8],
    ) -> Result<Vec<u8>, MockError> {
        self.begin_operation()?;

        Ok(reversed(data))
    }

    fn verify(
        &self,
        _handle: &MockHandle,
        _algorithm: AlgorithmId,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool, MockError> {
        self.begin_operation()?;

        Ok(reversed(data) == signature)
    }

    fn key_exchange(
        &self,
        _private: &MockHandle,
        _public: &MockHandle,
        _algorithm: AlgorithmId,
        requested_size: usize,
        _shared_info: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, MockError> {
        self.begin_operation()?;

        Ok(Zeroizing::new(vec![0x42; requested_size]))
    }
}

impl SymmetricProvider for MockProvider {
    type Error = MockError;

    fn derive_pbkdf2(
        &self,
        password: &[u8],
        salt: &[u8],
        _prf: PseudoRandomAlgorithm,
        rounds: u32,
        out: &mut [u8],
    ) -> Result<(), MockError> {
        self.begin_operation()?;

        let seed = password
            .iter()
            .chain(salt)
            .fold(rounds as u8, |acc, byte| acc.wrapping_add(*byte));

        for (index, byte) in out.iter_mut().enumerate() {
            *byte = seed.wrapping_add(index as u8);
        }

        Ok(())
    }

    fn aes_cbc_encrypt(
        &self,
        _key: &[u8],
        iv: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>, MockError> {
        self.begin_operation()?;

        let padding = AES_BLOCK_SIZE - plaintext.len() % AES_BLOCK_SIZE;
        let mut out = plaintext.to_vec();
        out.resize(plaintext.len() + padding, padding as u8);
        xor_with_iv(&mut out, iv);

        Ok(out)
    }

    fn aes_cbc_decrypt(
        &self,
        _key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, MockError> {
        self.begin_operation()?;

        let mut out = Zeroizing::new(ciphertext.to_vec());
        xor_with_iv(&mut out, iv);

        let padding = out.last().copied().map(usize::from).ok_or(NOT_FOUND)?;

        if padding == 0 || padding > AES_BLOCK_SIZE || padding > out.len() {
            return Err(NOT_FOUND);
        }

        let len = out.len() - padding;
        out.truncate(len);

        Ok(out)
    }

    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, MockError> {
        self.begin_operation()?;

        let seed = data.iter().fold(0u8, |acc, byte| acc.wrapping_add(*byte));

        Ok((0..algorithm.output_len())
            .map(|index| key[index % key.len()] ^ seed ^ index as u8)
            .collect())
    }
}
