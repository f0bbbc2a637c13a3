// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::provider::{KeyAttributes, KeyClass, KeyType};

pub(crate) fn attributes(
    key_class: KeyClass,
    key_type: Option<KeyType>,
    is_hardware_isolated: bool,
    size_in_bits: usize,
) -> KeyAttributes {
    KeyAttributes {
        key_class,
        key_type,
        is_hardware_isolated,
        size_in_bits,
    }
}

pub(crate) fn rsa_private(bits: usize) -> KeyAttributes {
    attributes(KeyClass::Private, Some(KeyType::Rsa), false, bits)
}

pub(crate) fn ecc_private(bits: usize) -> KeyAttributes {
    attributes(KeyClass::Private, Some(KeyType::Ecc), false, bits)
}

pub(crate) fn ecc_public(bits: usize) -> KeyAttributes {
    attributes(KeyClass::Public, Some(KeyType::Ecc), false, bits)
}

pub(crate) fn isolated_private(bits: usize) -> KeyAttributes {
    attributes(KeyClass::Private, Some(KeyType::Ecc), true, bits)
}
