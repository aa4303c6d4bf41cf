// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Plotedit: the interaction core of a plot edit tool.
//!
//! Renderers bind shared columnar data sources to scatter glyphs on a plot
//! frame. An [`EditToolView`] turns pointer gestures into edits of those
//! sources: taps select rows, drags move the selected rows in data space,
//! and selected rows can be deleted or new rows padded out.

pub mod editing;
pub mod error;
pub mod model;
pub mod scene;
pub mod settings;

pub use editing::{DragEvent, EditTool, EditToolView, Frame, MoveEvent, PlotView, TapEvent};
pub use error::{ColumnError, SourceError};
pub use model::{Column, DataSource, Renderer, SharedSource, SourceChange, Value, XyGlyph};
pub use scene::{Scene, SceneConfig};

use std::path::Path;

/// Install the tracing subscriber (controlled via the RUST_LOG env var).
///
/// Logs go to stderr so stdout stays free for scene output.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plotedit=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load a scene file, replay its steps and return the final sources as
/// pretty JSON
pub fn run(path: &Path) -> anyhow::Result<String> {
    tracing::info!("Loading scene from: {}", path.display());
    let config = SceneConfig::load(path)?;
    let mut scene = Scene::build(&config)?;
    scene.replay(&config.steps)?;
    tracing::info!("Replayed {} steps", config.steps.len());
    Ok(serde_json::to_string_pretty(&scene.snapshot())?)
}
