// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::adapter::{ExpectedKey, ValidatedHandle};
use crate::algorithm::{AlgorithmFamily, Rsa};
use crate::capability::{
    AsymmetricKey, ByteExportable, Exportable, Internal, KeyCapability, PrivateKeyCapable,
    ProviderHandleConvertible, PublicKeyCapable,
};
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, Isolation, KeyClass, KeyPairSpec, KeyType};

use super::{fmt_handle_key, generate_private};

fn rsa_block_size(handle: &ValidatedHandle<impl CryptoProvider>) -> Result<usize, CryptoError> {
    Rsa::descriptor(handle.attributes().size_in_bits).ok_or(CryptoError::InvalidProviderHandle)
}

/// Provider-backed RSA private key.
#[derive(Clone)]
pub struct RsaPrivateKey<P: CryptoProvider> {
    handle: ValidatedHandle<P>,
    block_size: usize,
}

impl<P: CryptoProvider> RsaPrivateKey<P> {
    /// Generates a fresh key pair with a `bits`-bit modulus.
    pub fn generate(provider: &P, bits: u32) -> Result<Self, CryptoError> {
        generate_private(provider, KeyPairSpec::Rsa { bits }, Isolation::Software)
    }

    /// Modulus length in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl<P: CryptoProvider> KeyCapability for RsaPrivateKey<P> {
    type Exposure = Exportable;
}

impl<P: CryptoProvider> ByteExportable for RsaPrivateKey<P> {}

impl<P: CryptoProvider> ProviderHandleConvertible for RsaPrivateKey<P> {
    type Provider = P;

    const EXPECTED: ExpectedKey = ExpectedKey::software(KeyClass::Private, KeyType::Rsa);

    fn validated(&self) -> &ValidatedHandle<P> {
        &self.handle
    }

    fn wrap(handle: ValidatedHandle<P>, _: Internal) -> Result<Self, CryptoError> {
        let block_size = rsa_block_size(&handle)?;

        Ok(Self { handle, block_size })
    }
}

impl<P: CryptoProvider> AsymmetricKey for RsaPrivateKey<P> {
    type Family = Rsa;
}

impl<P: CryptoProvider> PrivateKeyCapable for RsaPrivateKey<P> {
    type PublicKey = RsaPublicKey<P>;

    fn descriptor(&self) -> usize {
        self.block_size
    }
}

impl<P: CryptoProvider> fmt::Debug for RsaPrivateKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle_key("RsaPrivateKey", &self.handle, f)
    }
}

/// Provider-backed RSA public key.
#[derive(Clone)]
pub struct RsaPublicKey<P: CryptoProvider> {
    handle: ValidatedHandle<P>,
    block_size: usize,
}

impl<P: CryptoProvider> RsaPublicKey<P> {
    /// Modulus length in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl<P: CryptoProvider> KeyCapability for RsaPublicKey<P> {
    type Exposure = Exportable;
}

impl<P: CryptoProvider> ByteExportable for RsaPublicKey<P> {}

impl<P: CryptoProvider> ProviderHandleConvertible for RsaPublicKey<P> {
    type Provider = P;

    const EXPECTED: ExpectedKey = ExpectedKey::software(KeyClass::Public, KeyType::Rsa);

    fn validated(&self) -> &ValidatedHandle<P> {
        &self.handle
    }

    fn wrap(handle: ValidatedHandle<P>, _: Internal) -> Result<Self, CryptoError> {
        let block_size = rsa_block_size(&handle)?;

        Ok(Self { handle, block_size })
    }
}

impl<P: CryptoProvider> AsymmetricKey for RsaPublicKey<P> {
    type Family = Rsa;
}

impl<P: CryptoProvider> PublicKeyCapable for RsaPublicKey<P> {}

impl<P: CryptoProvider> fmt::Debug for RsaPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle_key("RsaPublicKey", &self.handle, f)
    }
}
