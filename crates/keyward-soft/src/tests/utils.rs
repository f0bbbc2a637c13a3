// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keyward_core::{
    CryptoProvider, EccCurve, Isolation, KeyPairSpec, PrivateKeyCapable, RsaPrivateKey,
    RsaPublicKey,
};

use crate::{SoftHandle, SoftwareProvider};

/// Smallest modulus the default configuration accepts; keeps key generation fast.
pub(crate) const TEST_RSA_BITS: u32 = 1024;

pub(crate) fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("Failed to from_str_radix(..)"))
        .collect()
}

pub(crate) fn rsa_pair(
    provider: &SoftwareProvider,
) -> (RsaPrivateKey<SoftwareProvider>, RsaPublicKey<SoftwareProvider>) {
    let private = RsaPrivateKey::generate(provider, TEST_RSA_BITS).expect("Failed to generate(..)");
    let public = private.public_key().expect("Failed to public_key()");

    (private, public)
}

pub(crate) fn ecc_handles(
    provider: &SoftwareProvider,
    curve: EccCurve,
) -> (SoftHandle, SoftHandle) {
    let private = provider
        .generate_key_pair(KeyPairSpec::Ecc { curve }, Isolation::Software)
        .expect("Failed to generate_key_pair(..)");
    let public = provider
        .public_key_for(&private)
        .expect("Failed to public_key_for(..)");

    (private, public)
}
