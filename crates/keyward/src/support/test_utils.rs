// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from keyward-core and keyward-rand: the mock
//! provider and mock entropy sources

#[cfg(feature = "test-utils")]
pub mod provider {
    pub use keyward_core::support::test_utils::*;
}
#[cfg(feature = "test-utils")]
pub mod rand {
    pub use keyward_rand::test_utils::*;
}
