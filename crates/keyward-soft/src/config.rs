// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Smallest RSA modulus accepted for generation by default.
pub const DEFAULT_MIN_RSA_KEY_BITS: u32 = 1024;

/// Configuration for [`SoftwareProvider`](crate::SoftwareProvider).
///
/// Constructed explicitly and injected; there is no global instance.
///
/// ```rust
/// use keyward_soft::SoftProviderConfig;
///
/// let config = SoftProviderConfig::default()
///     .with_min_rsa_key_bits(2048)
///     .with_hardware_isolation(false);
///
/// assert_eq!(config.min_rsa_key_bits, 2048);
/// assert!(!config.allow_hardware_isolation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftProviderConfig {
    /// Smaller RSA generation requests fail with `UnsupportedKeySize`.
    pub min_rsa_key_bits: u32,
    /// Whether simulated hardware-isolated keys may be generated.
    pub allow_hardware_isolation: bool,
}

impl Default for SoftProviderConfig {
    fn default() -> Self {
        Self {
            min_rsa_key_bits: DEFAULT_MIN_RSA_KEY_BITS,
            allow_hardware_isolation: true,
        }
    }
}

impl SoftProviderConfig {
    /// Sets the minimum RSA modulus size for generation.
    pub fn with_min_rsa_key_bits(mut self, bits: u32) -> Self {
        self.min_rsa_key_bits = bits;
        self
    }

    /// Enables or disables simulated hardware isolation.
    pub fn with_hardware_isolation(mut self, allow: bool) -> Self {
        self.allow_hardware_isolation = allow;
        self
    }
}
