// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for runtime key classification.

use crate::algorithm::EccCurve;
use crate::error::CryptoError;
use crate::keys::AnyKey;
use crate::provider::{KeyClass, KeyType};
use crate::support::test_utils::MockProvider;

use super::utils::{attributes, ecc_private, ecc_public, isolated_private, rsa_private};

#[test]
fn test_classifies_rsa_private() {
    let provider = MockProvider::default();
    let handle = provider.register(rsa_private(2048));

    let key = AnyKey::from_handle(&provider, handle).expect("Failed to from_handle(..)");

    assert!(!key.is_hardware_isolated());
    assert_eq!(*key.attributes(), rsa_private(2048));
    assert!(key.into_rsa_private().is_some());
}

#[test]
fn test_classifies_rsa_public() {
    let provider = MockProvider::default();
    let handle = provider.register(attributes(KeyClass::Public, Some(KeyType::Rsa), false, 3072));

    let key = AnyKey::from_handle(&provider, handle).expect("Failed to from_handle(..)");
    let public = key.into_rsa_public().expect("Failed to into_rsa_public()");

    assert_eq!(public.block_size(), 384);
}

#[test]
fn test_classifies_ecc_keys() {
    let provider = MockProvider::default();

    let private = AnyKey::from_handle(&provider, provider.register(ecc_private(256)))
        .expect("Failed to from_handle(..)");
    assert_eq!(
        private.into_ecc_private().map(|key| key.curve()),
        Some(EccCurve::P256)
    );

    let public = AnyKey::from_handle(&provider, provider.register(ecc_public(384)))
        .expect("Failed to from_handle(..)");
    assert_eq!(
        public.into_ecc_public().map(|key| key.curve()),
        Some(EccCurve::P384)
    );
}

#[test]
fn test_classifies_hardware_isolated() {
    let provider = MockProvider::default();
    let handle = provider.register(isolated_private(256));

    let key = AnyKey::from_handle(&provider, handle).expect("Failed to from_handle(..)");

    assert!(key.is_hardware_isolated());
    assert!(key.into_hardware_isolated().is_some());
}

#[test]
fn test_cross_capability_query_is_none() {
    let provider = MockProvider::default();
    let isolated = provider.register(isolated_private(256));
    let software = provider.register(ecc_private(256));

    let key = AnyKey::from_handle(&provider, isolated).expect("Failed to from_handle(..)");
    assert!(key.into_ecc_private().is_none());

    let key = AnyKey::from_handle(&provider, isolated).expect("Failed to from_handle(..)");
    assert!(key.into_rsa_private().is_none());

    let key = AnyKey::from_handle(&provider, software).expect("Failed to from_handle(..)");
    assert!(key.into_hardware_isolated().is_none());
}

#[test]
fn test_inspects_once() {
    let provider = MockProvider::default();
    let handle = provider.register(rsa_private(2048));

    let _key = AnyKey::from_handle(&provider, handle).expect("Failed to from_handle(..)");

    assert_eq!(provider.inspect_calls(), 1);
    assert_eq!(provider.operation_calls(), 0);
}

#[test]
fn test_rejects_unclassifiable_handles() {
    let provider = MockProvider::default();

    for reported in [
        attributes(KeyClass::Symmetric, None, false, 256),
        attributes(KeyClass::Private, None, false, 256),
        attributes(KeyClass::Public, Some(KeyType::Ecc), true, 256),
        attributes(KeyClass::Private, Some(KeyType::Rsa), true, 2048),
        ecc_private(200),
    ] {
        let handle = provider.register(reported);

        assert_eq!(
            AnyKey::from_handle(&provider, handle).unwrap_err(),
            CryptoError::InvalidProviderHandle
        );
    }
}
