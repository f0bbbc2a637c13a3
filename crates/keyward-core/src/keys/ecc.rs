// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::adapter::{ExpectedKey, ValidatedHandle};
use crate::algorithm::{AlgorithmFamily, Ecc, EccCurve};
use crate::capability::{
    AsymmetricKey, ByteExportable, Exportable, Internal, KeyCapability, PrivateKeyCapable,
    ProviderHandleConvertible, PublicKeyCapable,
};
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, Isolation, KeyClass, KeyPairSpec, KeyType};

use super::{fmt_handle_key, generate_private};

pub(super) fn ecc_curve(
    handle: &ValidatedHandle<impl CryptoProvider>,
) -> Result<EccCurve, CryptoError> {
    Ecc::descriptor(handle.attributes().size_in_bits).ok_or(CryptoError::InvalidProviderHandle)
}

/// Provider-backed elliptic-curve private key (software).
#[derive(Clone)]
pub struct EccPrivateKey<P: CryptoProvider> {
    handle: ValidatedHandle<P>,
    curve: EccCurve,
}

impl<P: CryptoProvider> EccPrivateKey<P> {
    /// Generates a fresh key pair on `curve`.
    pub fn generate(provider: &P, curve: EccCurve) -> Result<Self, CryptoError> {
        generate_private(provider, KeyPairSpec::Ecc { curve }, Isolation::Software)
    }

    /// Curve of the key.
    pub fn curve(&self) -> EccCurve {
        self.curve
    }
}

impl<P: CryptoProvider> KeyCapability for EccPrivateKey<P> {
    type Exposure = Exportable;
}

impl<P: CryptoProvider> ByteExportable for EccPrivateKey<P> {}

impl<P: CryptoProvider> ProviderHandleConvertible for EccPrivateKey<P> {
    type Provider = P;

    const EXPECTED: ExpectedKey = ExpectedKey::software(KeyClass::Private, KeyType::Ecc);

    fn validated(&self) -> &ValidatedHandle<P> {
        &self.handle
    }

    fn wrap(handle: ValidatedHandle<P>, _: Internal) -> Result<Self, CryptoError> {
        let curve = ecc_curve(&handle)?;

        Ok(Self { handle, curve })
    }
}

impl<P: CryptoProvider> AsymmetricKey for EccPrivateKey<P> {
    type Family = Ecc;
}

impl<P: CryptoProvider> PrivateKeyCapable for EccPrivateKey<P> {
    type PublicKey = EccPublicKey<P>;

    fn descriptor(&self) -> EccCurve {
        self.curve
    }
}

impl<P: CryptoProvider> fmt::Debug for EccPrivateKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle_key("EccPrivateKey", &self.handle, f)
    }
}

/// Provider-backed elliptic-curve public key.
#[derive(Clone)]
pub struct EccPublicKey<P: CryptoProvider> {
    handle: ValidatedHandle<P>,
    curve: EccCurve,
}

impl<P: CryptoProvider> EccPublicKey<P> {
    /// Curve of the key.
    pub fn curve(&self) -> EccCurve {
        self.curve
    }
}

impl<P: CryptoProvider> KeyCapability for EccPublicKey<P> {
    type Exposure = Exportable;
}

impl<P: CryptoProvider> ByteExportable for EccPublicKey<P> {}

impl<P: CryptoProvider> ProviderHandleConvertible for EccPublicKey<P> {
    type Provider = P;

    const EXPECTED: ExpectedKey = ExpectedKey::software(KeyClass::Public, KeyType::Ecc);

    fn validated(&self) -> &ValidatedHandle<P> {
        &self.handle
    }

    fn wrap(handle: ValidatedHandle<P>, _: Internal) -> Result<Self, CryptoError> {
        let curve = ecc_curve(&handle)?;

        Ok(Self { handle, curve })
    }
}

impl<P: CryptoProvider> AsymmetricKey for EccPublicKey<P> {
    type Family = Ecc;
}

impl<P: CryptoProvider> PublicKeyCapable for EccPublicKey<P> {}

impl<P: CryptoProvider> fmt::Debug for EccPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle_key("EccPublicKey", &self.handle, f)
    }
}
