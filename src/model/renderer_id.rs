// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for renderers.
//!
//! Each `RendererId` is a monotonically increasing `u64` generated from a
//! global atomic counter. Plot views key their rendered glyph views by
//! these IDs, so two renderers with the same display name never collide.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RendererId(u64);

static RENDERER_COUNTER: AtomicU64 = AtomicU64::new(1);

impl RendererId {
    /// Create a new unique renderer ID
    pub fn next() -> Self {
        Self(RENDERER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RendererId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for RendererId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
