// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The plot view an edit tool is attached to: its frame plus the rendered
//! glyph view of each renderer.

use super::frame::Frame;
use super::hit_test::{GlyphView, ScatterView};
use crate::model::{Renderer, RendererId};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PlotView {
    pub frame: Frame,
    renderer_views: HashMap<RendererId, Arc<dyn GlyphView>>,
}

impl PlotView {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            renderer_views: HashMap::new(),
        }
    }

    /// Register the rendered view of a renderer, replacing any previous one
    pub fn add_view(&mut self, id: RendererId, view: impl GlyphView + 'static) {
        self.renderer_views.insert(id, Arc::new(view));
    }

    /// Register a scatter view with the given hit radius for each renderer
    pub fn with_scatter_views(mut self, renderers: &[Renderer], radius: f64) -> Self {
        for renderer in renderers {
            self.add_view(
                renderer.id,
                ScatterView::for_renderer(renderer).with_radius(radius),
            );
        }
        self
    }

    pub fn renderer_view(&self, id: RendererId) -> Option<&dyn GlyphView> {
        self.renderer_views.get(&id).map(|v| v.as_ref())
    }
}
