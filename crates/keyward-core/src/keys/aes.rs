// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_buffer::SecureBuffer;
use keyward_rand::EntropySource;

use crate::algorithm::AesKeySize;
use crate::capability::{ByteExportable, Exportable, KeyCapability};
use crate::error::CryptoError;
use crate::impl_key_material_traits;
use crate::material::{KeyMaterial, KeySizePolicy, SymmetricKeyCapable};

/// Accepts 16, 24 or 32 bytes.
#[derive(Debug)]
pub enum AesKeySizePolicy {}

impl KeySizePolicy for AesKeySizePolicy {
    fn accepts(len: usize) -> bool {
        AesKeySize::from_byte_count(len).is_some()
    }
}

/// An AES key held in a locked buffer.
pub struct AesKey {
    key_data: SecureBuffer,
    size: AesKeySize,
}

impl AesKey {
    /// Random key from the system CSPRNG.
    pub fn generate(size: AesKeySize) -> Result<Self, CryptoError> {
        let key_data = SecureBuffer::create_random(size.byte_count())?;

        Ok(Self { key_data, size })
    }

    /// Random key from `entropy`.
    pub fn generate_with<S>(size: AesKeySize, entropy: &S) -> Result<Self, CryptoError>
    where
        S: EntropySource + ?Sized,
    {
        let key_data = SecureBuffer::create_random_with(size.byte_count(), entropy)?;

        Ok(Self { key_data, size })
    }

    /// Key size.
    pub fn size(&self) -> AesKeySize {
        self.size
    }
}

impl KeyCapability for AesKey {
    type Exposure = Exportable;
}

impl ByteExportable for AesKey {}

impl KeyMaterial for AesKey {
    fn key_data(&self) -> &SecureBuffer {
        &self.key_data
    }

    fn from_key_data(key_data: SecureBuffer) -> Result<Self, CryptoError> {
        let size =
            AesKeySize::from_byte_count(key_data.len()).ok_or(CryptoError::InvalidKeyMaterial)?;

        Ok(Self { key_data, size })
    }
}

impl SymmetricKeyCapable for AesKey {
    type SizePolicy = AesKeySizePolicy;
}

impl_key_material_traits!(AesKey);
