// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared base of the plot edit tools.
//!
//! `EditTool` is the configuration a tool is built from (its bound
//! renderers and the empty value used to pad new rows). `EditToolView`
//! attaches that configuration to a plot view and holds the interaction
//! state: whether the pointer is inside the frame, and the drag anchor.
//!
//! The operations are split by concern:
//! - `drag`: the drag state machine and per-step row offsets
//! - `select`: tap hit testing across renderers
//! - `rows`: deleting selected rows and padding appended ones

mod drag;
mod rows;
mod select;

use super::frame::Frame;
use super::plot_view::PlotView;
use crate::editing::MoveEvent;
use crate::model::{Renderer, Value};
use crate::settings;
use kurbo::Point;

/// Configuration shared by every edit tool
#[derive(Debug, Clone)]
pub struct EditTool {
    /// Fill value for non-coordinate columns when a row is appended
    pub empty_value: Value,
    /// Renderers this tool edits
    pub renderers: Vec<Renderer>,
}

impl Default for EditTool {
    fn default() -> Self {
        Self {
            empty_value: settings::tool::EMPTY_VALUE,
            renderers: Vec::new(),
        }
    }
}

impl EditTool {
    pub fn new(renderers: Vec<Renderer>) -> Self {
        Self {
            renderers,
            ..Self::default()
        }
    }

    pub fn with_empty_value(mut self, value: impl Into<Value>) -> Self {
        self.empty_value = value.into();
        self
    }
}

/// Drag gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `anchor` is the last pointer position seen, in screen space
    Dragging { anchor: Point },
}

/// An edit tool attached to a plot view
#[derive(Debug, Clone)]
pub struct EditToolView {
    pub model: EditTool,
    pub plot: PlotView,
    drag: DragState,
    mouse_in_frame: bool,
}

impl EditToolView {
    pub fn new(model: EditTool, plot: PlotView) -> Self {
        Self {
            model,
            plot,
            drag: DragState::Idle,
            mouse_in_frame: true,
        }
    }

    // ===== Frame presence =====

    pub fn on_pointer_enter(&mut self, _event: &MoveEvent) {
        self.mouse_in_frame = true;
    }

    pub fn on_pointer_exit(&mut self, _event: &MoveEvent) {
        self.mouse_in_frame = false;
    }

    /// Whether the pointer is currently over the plot canvas
    pub fn mouse_in_frame(&self) -> bool {
        self.mouse_in_frame
    }

    // ===== Coordinates =====

    /// Map a screen point to the data space of `renderer`.
    ///
    /// Returns `None` when the point is outside the visible frame.
    pub fn map_screen_to_data(&self, sx: f64, sy: f64, renderer: &Renderer) -> Option<Point> {
        map_drag(&self.plot.frame, Point::new(sx, sy), renderer)
    }
}

/// Map a screen point through the renderer's named scales
fn map_drag(frame: &Frame, point: Point, renderer: &Renderer) -> Option<Point> {
    frame.map_to_data(
        point.x,
        point.y,
        &renderer.x_range_name,
        &renderer.y_range_name,
    )
}
