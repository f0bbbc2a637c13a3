// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Provider handle adapter.
//!
//! Two jobs:
//!
//! 1. Handle validation. A raw handle starts as [`Unvalidated`], is inspected
//!    exactly once and becomes either [`Validation::Valid`] (carrying a
//!    [`ValidatedHandle`]) or [`Validation::Rejected`]. Nothing else can build a
//!    [`ValidatedHandle`], so every key wrapper holding one has been checked.
//! 2. Error translation. Every provider call goes through [`invoke`], which
//!    maps the native error to [`CryptoError::Provider`] and logs it.

use core::fmt;

use tracing::{debug, warn};

use crate::error::CryptoError;
use crate::provider::{CryptoProvider, KeyAttributes, KeyClass, KeyType, ProviderFailure};

/// Whether a wrapper accepts hardware-isolated handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolationRequirement {
    /// Only handles whose secret is not hardware-isolated.
    SoftwareOnly,
    /// Only hardware-isolated handles.
    HardwareOnly,
}

impl IsolationRequirement {
    fn admits(self, is_hardware_isolated: bool) -> bool {
        match self {
            Self::SoftwareOnly => !is_hardware_isolated,
            Self::HardwareOnly => is_hardware_isolated,
        }
    }
}

/// Capability tag a wrapper claims for its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpectedKey {
    /// Required class.
    pub key_class: KeyClass,
    /// Required type.
    pub key_type: KeyType,
    /// Required isolation.
    pub isolation: IsolationRequirement,
}

impl ExpectedKey {
    /// Software key of the given class and type.
    pub const fn software(key_class: KeyClass, key_type: KeyType) -> Self {
        Self {
            key_class,
            key_type,
            isolation: IsolationRequirement::SoftwareOnly,
        }
    }

    /// Hardware-isolated private key of the given type.
    pub const fn hardware_private(key_type: KeyType) -> Self {
        Self {
            key_class: KeyClass::Private,
            key_type,
            isolation: IsolationRequirement::HardwareOnly,
        }
    }

    /// Whether the reported attributes satisfy this tag.
    pub fn matches(&self, reported: &KeyAttributes) -> bool {
        reported.key_class == self.key_class
            && reported.key_type == Some(self.key_type)
            && self.isolation.admits(reported.is_hardware_isolated)
    }
}

/// Why a handle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// What the wrapper claimed.
    pub expected: ExpectedKey,
    /// What the provider reported.
    pub reported: KeyAttributes,
}

/// A handle that has not been inspected yet.
pub struct Unvalidated<P: CryptoProvider> {
    provider: P,
    handle: P::Handle,
}

/// Result of inspecting a handle. Final: no further transitions.
pub enum Validation<P: CryptoProvider> {
    /// Attributes matched the expected tag.
    Valid(ValidatedHandle<P>),
    /// Attributes did not match.
    Rejected(Rejection),
}

impl<P: CryptoProvider> Unvalidated<P> {
    /// Wraps a raw handle obtained from `provider`.
    pub fn new(provider: &P, handle: P::Handle) -> Self {
        Self {
            provider: provider.clone(),
            handle,
        }
    }

    /// Asks the provider for the handle's attributes.
    pub fn inspect(&self) -> Result<KeyAttributes, CryptoError> {
        invoke("inspect_attributes", || {
            self.provider.inspect_attributes(&self.handle)
        })
    }

    /// Inspects the handle and decides validity against `expected`.
    ///
    /// Provider failures during inspection are returned as errors; they are not
    /// a rejection.
    pub fn validate(self, expected: ExpectedKey) -> Result<Validation<P>, CryptoError> {
        let reported = self.inspect()?;
        Ok(self.decide(expected, reported))
    }

    /// Decides validity against attributes that were already inspected.
    pub(crate) fn decide(self, expected: ExpectedKey, reported: KeyAttributes) -> Validation<P> {
        if expected.matches(&reported) {
            debug!(?expected, size_in_bits = reported.size_in_bits, "provider handle accepted");

            Validation::Valid(ValidatedHandle {
                provider: self.provider,
                handle: self.handle,
                attributes: reported,
            })
        } else {
            warn!(?expected, ?reported, "provider handle rejected");

            Validation::Rejected(Rejection { expected, reported })
        }
    }
}

impl<P: CryptoProvider> Validation<P> {
    /// `Rejected` becomes [`CryptoError::InvalidProviderHandle`].
    pub fn into_result(self) -> Result<ValidatedHandle<P>, CryptoError> {
        match self {
            Self::Valid(handle) => Ok(handle),
            Self::Rejected(_) => Err(CryptoError::InvalidProviderHandle),
        }
    }
}

/// A handle whose attributes matched a capability tag at construction.
///
/// Validity is never re-checked: attributes are captured once.
pub struct ValidatedHandle<P: CryptoProvider> {
    provider: P,
    handle: P::Handle,
    attributes: KeyAttributes,
}

impl<P: CryptoProvider> ValidatedHandle<P> {
    /// The provider the handle belongs to.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The raw handle.
    pub fn handle(&self) -> &P::Handle {
        &self.handle
    }

    /// Attributes captured at validation.
    pub fn attributes(&self) -> &KeyAttributes {
        &self.attributes
    }
}

impl<P: CryptoProvider> Clone for ValidatedHandle<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            handle: self.handle.clone(),
            attributes: self.attributes,
        }
    }
}

impl<P: CryptoProvider> fmt::Debug for ValidatedHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedHandle")
            .field("handle", &self.handle)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

/// Maps a native provider error into the core taxonomy.
pub fn map_provider_error<E: ProviderFailure>(operation: &'static str, error: E) -> CryptoError {
    let kind = error.kind();
    let code = error.code();

    warn!(operation, ?kind, code, "provider call failed");

    CryptoError::Provider { kind, code }
}

/// Runs one provider call, translating its error.
pub fn invoke<T, E, F>(operation: &'static str, call: F) -> Result<T, CryptoError>
where
    E: ProviderFailure,
    F: FnOnce() -> Result<T, E>,
{
    debug!(operation, "provider call");

    call().map_err(|error| map_provider_error(operation, error))
}
