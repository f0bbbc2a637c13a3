// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SecureBuffer - owned, locked, zero-on-drop bytes.

use core::fmt;
use core::hash::{Hash, Hasher};

use keyward_rand::{EntropySource, SystemEntropySource};
use keyward_util::{constant_time_eq, move_bytes};

use crate::error::BufferError;
use crate::page::PageRegion;

/// A fixed-length byte buffer locked into RAM and wiped on drop.
///
/// Content is only reachable through [`with_bytes`](Self::with_bytes); the
/// buffer never hands out an owned copy of its bytes. Use
/// [`duplicate`](Self::duplicate) for an explicit second buffer.
///
/// To share a buffer, wrap it in `Arc`; the wipe then happens when the last
/// reference is dropped.
pub struct SecureBuffer {
    region: PageRegion,
}

impl SecureBuffer {
    fn allocate(len: usize) -> Result<Self, BufferError> {
        let region = PageRegion::new(len)?;

        // On failure `region` is dropped here: wiped and unmapped.
        region.lock()?;

        // Best effort. Dump exclusion is not part of the swap guarantee.
        let _ = region.advise_dontdump();

        Ok(Self { region })
    }

    /// Allocates `len` zeroed, locked bytes and lets `init` fill them.
    ///
    /// If `init` fails (or panics) the partially filled buffer is wiped and
    /// released before the error propagates.
    ///
    /// # Errors
    ///
    /// - [`BufferError::AllocationFailed`] if the region cannot be mapped.
    /// - [`BufferError::MemoryLockFailed`] if the region cannot be locked.
    /// - Whatever `init` returns.
    pub fn create<F, E>(len: usize, init: F) -> Result<Self, E>
    where
        F: FnOnce(&mut [u8]) -> Result<(), E>,
        E: From<BufferError>,
    {
        let mut buffer = Self::allocate(len)?;

        init(buffer.region.as_mut_slice())?;

        Ok(buffer)
    }

    /// Creates a buffer of `len` bytes from the system CSPRNG.
    pub fn create_random(len: usize) -> Result<Self, BufferError> {
        Self::create_random_with(len, &SystemEntropySource {})
    }

    /// Creates a buffer of `len` bytes from `entropy`.
    ///
    /// Random bytes are written straight into the locked region.
    ///
    /// # Errors
    ///
    /// [`BufferError::RandomGenerationFailed`] if the source is unavailable.
    pub fn create_random_with<S>(len: usize, entropy: &S) -> Result<Self, BufferError>
    where
        S: EntropySource + ?Sized,
    {
        Self::create(len, |bytes| {
            entropy.fill_bytes(bytes)?;
            Ok(())
        })
    }

    /// Copies `source` into a new buffer.
    ///
    /// With `wipe_source` set, `source` is overwritten with zeros right after
    /// the copy. The caller must make sure no other alias to `source` exists.
    /// If allocation fails the source is left untouched.
    pub fn transfer_from(source: &mut [u8], wipe_source: bool) -> Result<Self, BufferError> {
        if !wipe_source {
            return Self::copy_from_insecure(source);
        }

        Self::create(source.len(), |bytes| {
            move_bytes(source, bytes);
            Ok(())
        })
    }

    /// Copies an immutable (and therefore unwipeable) slice into a new buffer.
    pub fn copy_from_insecure(source: &[u8]) -> Result<Self, BufferError> {
        Self::create(source.len(), |bytes| {
            bytes.copy_from_slice(source);
            Ok(())
        })
    }

    /// Explicit copy into a second, independently locked buffer.
    pub fn duplicate(&self) -> Result<Self, BufferError> {
        Self::copy_from_insecure(self.region.as_slice())
    }

    /// Grants `f` read-only access to the bytes for the duration of the call.
    #[inline]
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.region.as_slice())
    }

    /// Number of bytes held.
    #[inline]
    pub fn len(&self) -> usize {
        self.region.len()
    }

    /// Returns true if the buffer holds zero bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.region.len() == 0
    }

    /// Number of bits held.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.region.len() * 8
    }

    #[cfg(test)]
    pub(crate) fn region_mut(&mut self) -> &mut PageRegion {
        &mut self.region
    }
}

impl PartialEq for SecureBuffer {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.region.as_slice(), other.region.as_slice())
    }
}

impl Eq for SecureBuffer {}

impl Hash for SecureBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        state.write(self.region.as_slice());
    }
}

impl fmt::Debug for SecureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureBuffer")
            .field("len", &self.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
