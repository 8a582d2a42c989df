// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Date and culture factories
//! - A deterministic pseudo-random item generator
//! - Custom assertion helpers for slot sequences

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_contiguous, assert_covers};
#[allow(unused_imports)]
pub use fixtures::{ItemGenerator, all_cultures, date, days_of_year};
