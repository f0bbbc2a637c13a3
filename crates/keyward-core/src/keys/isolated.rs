// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::adapter::{ExpectedKey, ValidatedHandle};
use crate::algorithm::{Ecc, EccCurve};
use crate::capability::{
    AsymmetricKey, HardwareIsolatedCapable, Internal, Isolated, KeyCapability,
    PrivateKeyCapable, ProviderHandleConvertible,
};
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, Isolation, KeyPairSpec, KeyType};

use super::ecc::{EccPublicKey, ecc_curve};
use super::{fmt_handle_key, generate_private};

/// Elliptic-curve private key generated and kept inside isolated hardware.
///
/// It can sign, decrypt and derive its public key, but its secret never
/// leaves the provider. The type declares the [`Isolated`] exposure, so every
/// byte-revealing API is unavailable at compile time.
///
/// The same export call that works for a software key:
///
/// ```
/// use keyward_core::{CryptoProvider, EccPrivateKey, ExternalRepresentation};
///
/// fn export<P: CryptoProvider>(key: &EccPrivateKey<P>) {
///     let _ = key.external_representation();
/// }
/// ```
///
/// does not compile for an isolated key:
///
/// ```compile_fail
/// use keyward_core::{CryptoProvider, ExternalRepresentation, HardwareIsolatedKey};
///
/// fn export<P: CryptoProvider>(key: &HardwareIsolatedKey<P>) {
///     let _ = key.external_representation();
/// }
/// ```
///
/// An isolated key cannot be passed where byte export is required:
///
/// ```compile_fail
/// use keyward_core::{ByteExportable, CryptoProvider, HardwareIsolatedKey};
///
/// fn needs_export<K: ByteExportable>(_key: &K) {}
///
/// fn attempt<P: CryptoProvider>(key: &HardwareIsolatedKey<P>) {
///     needs_export(key);
/// }
/// ```
///
/// And no type can claim both capabilities:
///
/// ```compile_fail
/// use keyward_core::{ByteExportable, HardwareIsolatedCapable, Isolated, KeyCapability};
///
/// struct Sneaky;
///
/// impl KeyCapability for Sneaky {
///     type Exposure = Isolated;
/// }
///
/// impl HardwareIsolatedCapable for Sneaky {}
/// impl ByteExportable for Sneaky {}
/// ```
#[derive(Clone)]
pub struct HardwareIsolatedKey<P: CryptoProvider> {
    handle: ValidatedHandle<P>,
    curve: EccCurve,
}

impl<P: CryptoProvider> HardwareIsolatedKey<P> {
    /// Generates a key pair inside isolated hardware.
    pub fn generate(provider: &P, curve: EccCurve) -> Result<Self, CryptoError> {
        generate_private(provider, KeyPairSpec::Ecc { curve }, Isolation::Hardware)
    }

    /// Curve of the key.
    pub fn curve(&self) -> EccCurve {
        self.curve
    }
}

impl<P: CryptoProvider> KeyCapability for HardwareIsolatedKey<P> {
    type Exposure = Isolated;
}

impl<P: CryptoProvider> HardwareIsolatedCapable for HardwareIsolatedKey<P> {}

impl<P: CryptoProvider> ProviderHandleConvertible for HardwareIsolatedKey<P> {
    type Provider = P;

    const EXPECTED: ExpectedKey = ExpectedKey::hardware_private(KeyType::Ecc);

    fn validated(&self) -> &ValidatedHandle<P> {
        &self.handle
    }

    fn wrap(handle: ValidatedHandle<P>, _: Internal) -> Result<Self, CryptoError> {
        let curve = ecc_curve(&handle)?;

        Ok(Self { handle, curve })
    }
}

impl<P: CryptoProvider> AsymmetricKey for HardwareIsolatedKey<P> {
    type Family = Ecc;
}

impl<P: CryptoProvider> PrivateKeyCapable for HardwareIsolatedKey<P> {
    type PublicKey = EccPublicKey<P>;

    fn descriptor(&self) -> EccCurve {
        self.curve
    }
}

impl<P: CryptoProvider> fmt::Debug for HardwareIsolatedKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_handle_key("HardwareIsolatedKey", &self.handle, f)
    }
}
