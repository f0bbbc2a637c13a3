// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Mock provider with configurable failure behaviour.

mod mock_provider;

pub use mock_provider::{MockError, MockHandle, MockProvider, MockProviderBehaviour};
