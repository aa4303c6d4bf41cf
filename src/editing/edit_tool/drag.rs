// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag state machine: moving selected rows by pointer deltas

use super::{DragState, EditToolView, map_drag};
use crate::editing::DragEvent;
use crate::editing::frame::Frame;
use crate::model::{DataSource, Renderer, SourceChange};
use kurbo::{Point, Vec2};

impl EditToolView {
    /// Start a drag gesture at the event position
    pub fn begin_drag(&mut self, event: &DragEvent) {
        tracing::debug!("[EditToolView] drag started at {:?}", event.pos);
        self.drag = DragState::Dragging { anchor: event.pos };
    }

    /// End the drag gesture; later drag steps are ignored
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            tracing::debug!("[EditToolView] drag ended");
        }
        self.drag = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Last pointer position of the active drag, in screen space
    pub fn drag_anchor(&self) -> Option<Point> {
        match self.drag {
            DragState::Dragging { anchor } => Some(anchor),
            DragState::Idle => None,
        }
    }

    /// Apply one drag step to the selected rows of `renderers`.
    ///
    /// For each renderer the anchor and the event position are mapped to
    /// its data space and the difference is added to the x/y cells of
    /// every selected row. A renderer for which either point falls outside
    /// the frame is skipped for this step. Once all renderers are updated
    /// each one's source is notified, then the anchor moves to the event
    /// position so the next step measures from here.
    pub fn apply_drag(&mut self, event: &DragEvent, renderers: &[Renderer]) {
        let Some(anchor) = self.drag_anchor() else {
            tracing::trace!("[EditToolView] drag step without anchor ignored");
            return;
        };
        drag_renderers(&self.plot.frame, anchor, event.pos, renderers);
        self.drag = DragState::Dragging { anchor: event.pos };
    }

    /// [`EditToolView::apply_drag`] over the tool's own renderers
    pub fn apply_drag_to_all(&mut self, event: &DragEvent) {
        let Some(anchor) = self.drag_anchor() else {
            tracing::trace!("[EditToolView] drag step without anchor ignored");
            return;
        };
        drag_renderers(&self.plot.frame, anchor, event.pos, &self.model.renderers);
        self.drag = DragState::Dragging { anchor: event.pos };
    }
}

fn drag_renderers(frame: &Frame, anchor: Point, pos: Point, renderers: &[Renderer]) {
    for renderer in renderers {
        let basepoint = map_drag(frame, anchor, renderer);
        let point = map_drag(frame, pos, renderer);
        let (Some(point), Some(basepoint)) = (point, basepoint) else {
            tracing::trace!("[EditToolView] `{}` outside frame, skipped", renderer.name);
            continue;
        };
        offset_selected(renderer, point - basepoint);
    }

    // Every column write is done before anyone is told
    for renderer in renderers {
        renderer.source.emit(SourceChange::Content);
    }
}

/// Add `delta` to the coordinate cells of every selected row
fn offset_selected(renderer: &Renderer, delta: Vec2) {
    let Some(glyph) = &renderer.glyph else {
        return;
    };

    let mut data = renderer.source.write();
    let indices = data.selection().indices();
    for &index in &indices {
        if let Some(x_field) = &glyph.x {
            offset_cell(&mut data, x_field, index, delta.x);
        }
        if let Some(y_field) = &glyph.y {
            offset_cell(&mut data, y_field, index, delta.y);
        }
    }

    tracing::debug!(
        "[EditToolView] moved {} rows of `{}` by ({}, {})",
        indices.len(),
        renderer.source.name(),
        delta.x,
        delta.y
    );
}

fn offset_cell(data: &mut DataSource, column: &str, index: usize, delta: f64) {
    match data.column_mut(column) {
        Some(col) => {
            if let Err(e) = col.offset(index, delta) {
                tracing::warn!("Cannot move `{}` row {}: {}", column, index, e);
            }
        }
        None => tracing::warn!("No column `{}` to move", column),
    }
}
