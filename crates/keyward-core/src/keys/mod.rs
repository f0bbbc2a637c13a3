// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Concrete key types.
//!
//! | Type                    | Backing          | Exposure   |
//! |-------------------------|------------------|------------|
//! | [`AesKey`]              | `SecureBuffer`   | exportable |
//! | [`HmacKey`]             | `SecureBuffer`   | exportable |
//! | [`RsaPrivateKey`]       | provider handle  | exportable |
//! | [`RsaPublicKey`]        | provider handle  | exportable |
//! | [`EccPrivateKey`]       | provider handle  | exportable |
//! | [`EccPublicKey`]        | provider handle  | exportable |
//! | [`HardwareIsolatedKey`] | provider handle  | isolated   |

mod aes;
mod any;
mod ecc;
mod hmac;
mod isolated;
mod rsa;

pub use aes::{AesKey, AesKeySizePolicy};
pub use any::AnyKey;
pub use ecc::{EccPrivateKey, EccPublicKey};
pub use hmac::{HmacKey, HmacKeySizePolicy};
pub use isolated::HardwareIsolatedKey;
pub use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::adapter::invoke;
use crate::capability::ProviderHandleConvertible;
use crate::error::CryptoError;
use crate::provider::{CryptoProvider, Isolation, KeyPairSpec};

/// Generates a key pair and wraps the private handle as `K`.
fn generate_private<K>(
    provider: &K::Provider,
    spec: KeyPairSpec,
    isolation: Isolation,
) -> Result<K, CryptoError>
where
    K: ProviderHandleConvertible,
{
    let handle = invoke("generate_key_pair", || {
        provider.generate_key_pair(spec, isolation)
    })?;

    K::from_handle(provider, handle)
}

/// Debug output shared by handle-backed keys. Never prints the handle.
fn fmt_handle_key<P: CryptoProvider>(
    name: &str,
    handle: &crate::adapter::ValidatedHandle<P>,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    f.debug_struct(name)
        .field("size_in_bits", &handle.attributes().size_in_bits)
        .finish_non_exhaustive()
}
