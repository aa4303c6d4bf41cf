// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Tap selection across renderers

use super::EditToolView;
use crate::editing::TapEvent;
use crate::editing::hit_test::{GlyphView, PointGeometry};
use crate::model::{Renderer, RendererId, SourceChange};
use std::collections::HashSet;

impl EditToolView {
    /// Select rows under a tap on each of `renderers`.
    ///
    /// With `append` the hits are added to each renderer's existing
    /// selection, otherwise they replace it (so a miss clears it). Every
    /// renderer's source is notified after its hit test, hit or not.
    /// Returns the renderers that were hit, in input order. Taps outside
    /// the frame select nothing and notify no one.
    pub fn select_at<'r>(
        &self,
        event: &TapEvent,
        append: bool,
        renderers: &'r [Renderer],
    ) -> Vec<&'r Renderer> {
        let (sx, sy) = (event.pos.x, event.pos.y);
        if !self.plot.frame.contains(sx, sy) {
            tracing::debug!("[EditToolView] tap at ({}, {}) outside frame", sx, sy);
            return Vec::new();
        }

        let geometry = PointGeometry::new(sx, sy);
        let mut visited: HashSet<RendererId> = HashSet::new();
        let mut selected = Vec::new();

        for renderer in renderers {
            if !visited.insert(renderer.id) {
                continue;
            }

            let sm = renderer.selection_manager();
            let views: Vec<&dyn GlyphView> =
                self.plot.renderer_view(renderer.id).into_iter().collect();
            if views.is_empty() {
                tracing::debug!("[EditToolView] no view registered for `{}`", renderer.name);
            }

            let did_hit = sm.select(&views, &self.plot.frame, &geometry, true, append);
            if did_hit {
                selected.push(renderer);
            }
            renderer.source.emit(SourceChange::Selected);
        }

        tracing::debug!(
            "[EditToolView] tap at ({}, {}) hit {} of {} renderers",
            sx,
            sy,
            selected.len(),
            renderers.len()
        );
        selected
    }

    /// [`EditToolView::select_at`] over the tool's own renderers, appending
    /// when shift is held
    pub fn select_tap(&self, event: &TapEvent) -> Vec<&Renderer> {
        self.select_at(event, event.wants_append(), &self.model.renderers)
    }
}
