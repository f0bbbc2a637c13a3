// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # keyward_soft
//!
//! Software [`CryptoProvider`](keyward_core::CryptoProvider) and
//! [`SymmetricProvider`](keyward_core::SymmetricProvider) built on the RustCrypto
//! crates.
//!
//! ## Coverage
//!
//! - RSA: generation, PKCS#1 v1.5 and OAEP encryption, PKCS#1 v1.5 and PSS
//!   signatures, PKCS#1 DER import/export
//! - ECC: P-256 and P-384, ECDSA (DER signatures), ECDH with optional X9.63 KDF,
//!   X9.63 point encoding
//! - PBKDF2, AES-CBC with PKCS#7 padding, HMAC-SHA2
//!
//! Hybrid schemes (RSA-OAEP + AES-GCM, ECIES) and raw RSA are reported as
//! [`SoftError::UnsupportedAlgorithm`].
//!
//! ## Hardware isolation
//!
//! P-256 keys generated with [`Isolation::Hardware`](keyward_core::Isolation)
//! report `is_hardware_isolated` and refuse export. The secret still lives in
//! process memory; this exists so isolation-aware code paths can be exercised
//! without a device. Disable it with
//! [`SoftProviderConfig::with_hardware_isolation`].
//!
//! ## Example
//!
//! ```rust
//! use keyward_core::{EccCurve, EccPrivateKey, EcdsaAlgorithm, PrivateKeyCapable, ops};
//! use keyward_soft::SoftwareProvider;
//!
//! let provider = SoftwareProvider::default();
//!
//! let private =
//!     EccPrivateKey::generate(&provider, EccCurve::P256).expect("Failed to generate(..)");
//! let public = private.public_key().expect("Failed to public_key()");
//!
//! let signature = ops::sign(&private, EcdsaAlgorithm::X962Sha256, b"payload")
//!     .expect("Failed to sign(..)");
//! let verification = ops::verify(&public, EcdsaAlgorithm::X962Sha256, b"payload", &signature)
//!     .expect("Failed to verify(..)");
//!
//! assert!(verification.is_valid());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod ecc;
mod error;
mod handle;
mod hash;
mod provider;
mod rng;
mod rsa_ops;
mod symmetric;

pub use config::{DEFAULT_MIN_RSA_KEY_BITS, SoftProviderConfig};
pub use error::SoftError;
pub use handle::SoftHandle;
pub use provider::SoftwareProvider;
