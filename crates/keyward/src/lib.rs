// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Capability-typed cryptographic keys in locked memory.</em></p>
//!
//! ---
//!
//! Keyward wraps cryptographic keys in types that say what the key may do. An
//! AES or HMAC key is one page-locked buffer that is wiped on drop. An RSA or
//! ECC key is an opaque handle owned by a provider, checked once when it is
//! wrapped. A hardware-isolated key cannot be exported: handing one to any
//! byte-revealing API does not compile.
//!
//! # Features
//!
//! - **Locked key material**: `mmap` + `mlock`, wiped before unlock and unmap
//! - **Typed capabilities**: private, public, symmetric and hardware-isolated keys
//!   expose only what they support
//! - **Generic operations**: encrypt, decrypt, sign, verify, key agreement, PBKDF2,
//!   AES-CBC and HMAC, written once against the capability traits
//! - **Pluggable providers**: anything implementing [`CryptoProvider`] /
//!   [`SymmetricProvider`]; a RustCrypto-backed software provider ships behind
//!   the `soft` feature (enabled by default)
//!
//! # Quick Start
//!
//! ```rust
//! use keyward::soft::SoftwareProvider;
//! use keyward::{
//!     AesKeySize, EccCurve, EccPrivateKey, EcdsaAlgorithm, PrivateKeyCapable,
//!     PseudoRandomAlgorithm, ops,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = SoftwareProvider::default();
//!
//!     // Password-derived AES key, written straight into locked pages
//!     let key = ops::derive_aes_key(
//!         &provider,
//!         b"correct horse",
//!         b"battery staple",
//!         PseudoRandomAlgorithm::HmacSha256,
//!         10_000,
//!         AesKeySize::Bits256,
//!     )?;
//!
//!     let iv = ops::create_iv()?;
//!     let ciphertext = ops::encrypt_symmetric(&provider, &key, b"hello", &iv)?;
//!     let plaintext = ops::decrypt_symmetric(&provider, &key, &ciphertext, &iv)?;
//!     assert_eq!(&plaintext[..], b"hello");
//!
//!     // Provider-held signing key
//!     let private = EccPrivateKey::generate(&provider, EccCurve::P256)?;
//!     let public = private.public_key()?;
//!
//!     let signature = ops::sign(&private, EcdsaAlgorithm::X962Sha256, b"hello")?;
//!     ops::verify(&public, EcdsaAlgorithm::X962Sha256, b"hello", &signature)?.into_result()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | Crate | Role |
//! |-------|------|
//! | `keyward-buffer` | [`SecureBuffer`]: locked, wiped, constant-time-compared bytes |
//! | `keyward-core` | Key types, capability traits, provider boundary, operations |
//! | `keyward-rand` | Entropy sources |
//! | `keyward-soft` | Software provider (RSA, P-256/P-384, PBKDF2, AES-CBC, HMAC) |
//! | `keyward-util` | Constant-time comparison and wiping |
//!
//! # License
//!
//! GPL-3.0-only

pub mod support;

pub use keyward_buffer as buffer;
pub use keyward_core::*;
pub use keyward_rand as rand;
#[cfg(feature = "soft")]
pub use keyward_soft as soft;
pub use keyward_util as util;
