// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Generic cryptographic operations.
//!
//! Every function here is written against the capability traits only. Length
//! limits are checked before the provider is called; a rejected input never
//! reaches the provider.

mod asymmetric;
mod derive;
mod symmetric;

pub use asymmetric::{
    decrypt, encrypt, exchange_shared_secret, sign, sign_digest, verify, verify_digest,
};
pub use derive::{derive_aes_key, derive_key};
pub use symmetric::{
    authenticate, create_iv, create_iv_with, decrypt_symmetric, encrypt_symmetric,
    is_valid_authentication_code,
};
