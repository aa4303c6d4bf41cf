// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph renderers: a data source bound to coordinate fields and scales.

use super::renderer_id::RendererId;
use super::source::SharedSource;
use crate::editing::SelectionManager;
use crate::settings;

/// Names of the columns a glyph reads its x/y coordinates from.
///
/// A field left as `None` means that axis is not edited by drags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XyGlyph {
    pub x: Option<String>,
    pub y: Option<String>,
}

impl XyGlyph {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }

    /// Glyph editing only the x coordinate
    pub fn x_only(x: impl Into<String>) -> Self {
        Self {
            x: Some(x.into()),
            y: None,
        }
    }

    /// Glyph editing only the y coordinate
    pub fn y_only(y: impl Into<String>) -> Self {
        Self {
            x: None,
            y: Some(y.into()),
        }
    }

    /// The configured coordinate column names
    pub fn coordinate_columns(&self) -> Vec<&str> {
        self.x.iter().chain(self.y.iter()).map(String::as_str).collect()
    }
}

/// Binds a shared data source to a glyph and a pair of named scales
#[derive(Debug, Clone)]
pub struct Renderer {
    pub id: RendererId,
    pub name: String,
    pub source: SharedSource,
    pub glyph: Option<XyGlyph>,
    /// Name of the x scale in the frame
    pub x_range_name: String,
    /// Name of the y scale in the frame
    pub y_range_name: String,
}

impl Renderer {
    /// Create a renderer with no glyph on the default ranges
    pub fn new(name: impl Into<String>, source: SharedSource) -> Self {
        Self {
            id: RendererId::next(),
            name: name.into(),
            source,
            glyph: None,
            x_range_name: settings::frame::DEFAULT_RANGE.to_string(),
            y_range_name: settings::frame::DEFAULT_RANGE.to_string(),
        }
    }

    pub fn with_glyph(mut self, glyph: XyGlyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn with_x_range(mut self, name: impl Into<String>) -> Self {
        self.x_range_name = name.into();
        self
    }

    pub fn with_y_range(mut self, name: impl Into<String>) -> Self {
        self.y_range_name = name.into();
        self
    }

    /// Selection manager acting on this renderer's data source
    pub fn selection_manager(&self) -> SelectionManager<'_> {
        SelectionManager::new(&self.source)
    }
}
