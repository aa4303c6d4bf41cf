// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod edit_tool;
pub mod event;
pub mod frame;
pub mod hit_test;
pub mod plot_view;
pub mod selection;

pub use edit_tool::{DragState, EditTool, EditToolView};
pub use event::{DragEvent, Modifiers, MoveEvent, TapEvent};
pub use frame::{Frame, LinearScale, Scale};
pub use hit_test::{GlyphView, PointGeometry, ScatterView, SelectionManager};
pub use plot_view::PlotView;
pub use selection::Selection;
