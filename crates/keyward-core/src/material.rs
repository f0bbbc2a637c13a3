// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key material: types that are exactly one [`SecureBuffer`].

use keyward_buffer::SecureBuffer;

use crate::capability::ByteExportable;
use crate::error::CryptoError;

/// A key type that wraps exactly one [`SecureBuffer`].
///
/// Round trip is lossless: `K::from_key_data(b).key_data() == b`. Content is
/// reachable only through [`SecureBuffer::with_bytes`] on the borrowed buffer.
///
/// Equality, hashing and `Debug` for implementors come from
/// [`impl_key_material_traits!`](crate::impl_key_material_traits), all defined
/// over the wrapped buffer.
pub trait KeyMaterial: ByteExportable + Sized {
    /// Read view of the underlying buffer.
    fn key_data(&self) -> &SecureBuffer;

    /// Rebuilds the key from a buffer.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeyMaterial`] if the length or content does not
    /// fit the concrete key type.
    fn from_key_data(key_data: SecureBuffer) -> Result<Self, CryptoError>;

    /// Length in bytes.
    fn byte_count(&self) -> usize {
        self.key_data().len()
    }

    /// Length in bits.
    fn bit_count(&self) -> usize {
        self.key_data().bit_count()
    }

    /// Constant-time comparison of the wrapped buffers.
    fn material_eq(&self, other: &Self) -> bool {
        self.key_data() == other.key_data()
    }

    /// Explicit copy into a new, independently locked key.
    fn duplicate(&self) -> Result<Self, CryptoError> {
        Self::from_key_data(self.key_data().duplicate()?)
    }
}

/// Length rule for a symmetric key type.
pub trait KeySizePolicy {
    /// Whether a key of `len` bytes is acceptable.
    fn accepts(len: usize) -> bool;
}

/// Symmetric keys: key material plus a declared size policy.
pub trait SymmetricKeyCapable: KeyMaterial {
    /// Length rule enforced by [`KeyMaterial::from_key_data`].
    type SizePolicy: KeySizePolicy;

    /// Checks `key_data` against [`Self::SizePolicy`].
    fn check_size(key_data: &SecureBuffer) -> Result<(), CryptoError> {
        if Self::SizePolicy::accepts(key_data.len()) {
            Ok(())
        } else {
            Err(CryptoError::InvalidKeyMaterial)
        }
    }
}

/// Implements `PartialEq`, `Eq`, `Hash` and a redacted `Debug` for a
/// [`KeyMaterial`] type in terms of its buffer.
#[macro_export]
macro_rules! impl_key_material_traits {
    ($type:ty) => {
        impl ::core::cmp::PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::KeyMaterial::material_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $type {}

        impl ::core::hash::Hash for $type {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::KeyMaterial::key_data(self), state);
            }
        }

        impl ::core::fmt::Debug for $type {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($type))
                    .field("bit_count", &$crate::KeyMaterial::bit_count(self))
                    .field("key_data", &"[REDACTED]")
                    .finish()
            }
        }
    };
}
