// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit tool settings and configuration constants.
//!
//! These are the defaults used when a scene file or caller does not say
//! otherwise. Per-tool overrides live on `EditTool` and in the scene's
//! `[tool]` table.

use crate::model::Value;

// ============================================================================
// FRAME SETTINGS
// ============================================================================
/// Scale name used by renderers that don't name one
const DEFAULT_RANGE_NAME: &str = "default";

// ============================================================================
// HIT TEST SETTINGS
// ============================================================================
/// Screen-space radius within which a tap hits a scatter point (pixels)
const HIT_TEST_RADIUS: f64 = 6.0;

// ============================================================================
// EDIT TOOL SETTINGS
// ============================================================================
/// Fill value for non-coordinate columns when a row is appended
const EMPTY_VALUE: Value = Value::Null;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Plot frame settings
pub mod frame {
    /// Scale name used by renderers that don't name one
    pub const DEFAULT_RANGE: &str = super::DEFAULT_RANGE_NAME;
}

/// Hit testing for tap selection
pub mod hit_test {
    /// Hit radius in screen pixels
    pub const RADIUS: f64 = super::HIT_TEST_RADIUS;
}

/// Edit tool defaults
pub mod tool {
    use crate::model::Value;

    /// Default empty value for padded columns
    pub const EMPTY_VALUE: Value = super::EMPTY_VALUE;
}
