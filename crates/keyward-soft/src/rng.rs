// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::{CryptoRng, RngCore, impls};
use tracing::warn;

use keyward_rand::EntropySource;

use crate::error::SoftError;

/// Adapts an [`EntropySource`] to the `rand_core` traits the RustCrypto crates
/// expect.
pub(crate) struct EntropyRng<S: EntropySource> {
    source: S,
}

impl<S: EntropySource> EntropyRng<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }

    /// Draws a probe from `source` first; a dead source fails here with
    /// [`SoftError::EntropyNotAvailable`] instead of panicking later.
    pub(crate) fn checked(source: S) -> Result<Self, SoftError> {
        let mut probe = [0u8; 16];

        source.fill_bytes(&mut probe).map_err(|error| {
            warn!(%error, "entropy source unavailable");
            SoftError::EntropyNotAvailable
        })?;

        Ok(Self::new(source))
    }
}

impl<S: EntropySource> RngCore for EntropyRng<S> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    /// Panics if the source fails, like `rand_core::OsRng`. Callers that can
    /// react to failure go through [`RngCore::try_fill_bytes`].
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(error) = self.try_fill_bytes(dest) {
            panic!("entropy source failed: {error}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.source.fill_bytes(dest).map_err(rand_core::Error::new)
    }
}

impl<S: EntropySource> CryptoRng for EntropyRng<S> {}
