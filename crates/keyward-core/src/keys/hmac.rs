// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_buffer::SecureBuffer;

use crate::capability::{ByteExportable, Exportable, KeyCapability};
use crate::error::CryptoError;
use crate::impl_key_material_traits;
use crate::material::{KeyMaterial, KeySizePolicy, SymmetricKeyCapable};

/// Accepts any non-empty key.
#[derive(Debug)]
pub enum HmacKeySizePolicy {}

impl KeySizePolicy for HmacKeySizePolicy {
    fn accepts(len: usize) -> bool {
        len > 0
    }
}

/// An HMAC key held in a locked buffer.
pub struct HmacKey {
    key_data: SecureBuffer,
}

impl HmacKey {
    /// Random key of `byte_count` bytes.
    pub fn generate(byte_count: usize) -> Result<Self, CryptoError> {
        Self::from_key_data(SecureBuffer::create_random(byte_count)?)
    }
}

impl KeyCapability for HmacKey {
    type Exposure = Exportable;
}

impl ByteExportable for HmacKey {}

impl KeyMaterial for HmacKey {
    fn key_data(&self) -> &SecureBuffer {
        &self.key_data
    }

    fn from_key_data(key_data: SecureBuffer) -> Result<Self, CryptoError> {
        Self::check_size(&key_data)?;

        Ok(Self { key_data })
    }
}

impl SymmetricKeyCapable for HmacKey {
    type SizePolicy = HmacKeySizePolicy;
}

impl_key_material_traits!(HmacKey);
