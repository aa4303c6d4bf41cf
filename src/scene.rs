// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene files: a plot, its data sources and renderers, and a list of
//! gesture steps to replay through an edit tool.
//!
//! Scenes are TOML. Loading resolves every name reference (sources,
//! renderers, scales) up front so a bad reference fails with context
//! instead of silently doing nothing halfway through a replay.

use crate::editing::{
    DragEvent, EditTool, EditToolView, Frame, LinearScale, Modifiers, MoveEvent, PlotView,
    TapEvent,
};
use crate::model::{Column, DataSource, Renderer, SharedSource, SourceChange, Value, XyGlyph};
use crate::settings;
use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub tool: ToolConfig,
    pub frame: FrameConfig,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub renderers: Vec<RendererConfig>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub empty_value: Value,
    pub hit_radius: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            empty_value: settings::tool::EMPTY_VALUE,
            hit_radius: settings::hit_test::RADIUS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrameConfig {
    /// `[x0, y0, x1, y1]` in screen pixels
    pub bbox: [f64; 4],
    #[serde(default)]
    pub x_scales: IndexMap<String, LinearScale>,
    #[serde(default)]
    pub y_scales: IndexMap<String, LinearScale>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    /// Columns to store in fixed-size numeric storage
    #[serde(default)]
    pub typed: Vec<String>,
    #[serde(default)]
    pub columns: IndexMap<String, Column>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    pub id: String,
    pub source: String,
    pub x: Option<String>,
    pub y: Option<String>,
    pub x_range: Option<String>,
    pub y_range: Option<String>,
}

/// One replayed gesture
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Enter {
        #[serde(default)]
        at: [f64; 2],
    },
    Exit {
        #[serde(default)]
        at: [f64; 2],
    },
    DragStart {
        at: [f64; 2],
    },
    Drag {
        at: [f64; 2],
    },
    DragEnd,
    /// Tap over every bound renderer; `append` acts as a held shift key
    Tap {
        at: [f64; 2],
        #[serde(default)]
        append: bool,
    },
    Delete {
        renderer: String,
    },
    /// Append coordinate cells to a source, then pad the other columns
    AppendRow {
        source: String,
        values: IndexMap<String, Value>,
    },
}

impl SceneConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse scene")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid scene: {}", path.display()))
    }
}

// ============================================================================
// SCENE
// ============================================================================

/// A loaded scene: named sources and an edit tool bound to the renderers
#[derive(Debug)]
pub struct Scene {
    pub sources: IndexMap<String, SharedSource>,
    pub view: EditToolView,
}

/// Final state of one source, as printed after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSnapshot {
    pub name: String,
    pub columns: IndexMap<String, Column>,
    pub selected: Vec<usize>,
}

impl Scene {
    pub fn build(config: &SceneConfig) -> Result<Self> {
        let frame = build_frame(&config.frame);

        let mut sources = IndexMap::new();
        for source in &config.sources {
            let data = build_source(source)
                .with_context(|| format!("Invalid source `{}`", source.name))?;
            if sources
                .insert(source.name.clone(), SharedSource::new(source.name.as_str(), data))
                .is_some()
            {
                bail!("Duplicate source `{}`", source.name);
            }
        }

        let mut renderers = Vec::with_capacity(config.renderers.len());
        for rc in &config.renderers {
            let source = sources
                .get(&rc.source)
                .with_context(|| format!("Renderer `{}` uses unknown source `{}`", rc.id, rc.source))?;
            let renderer = build_renderer(rc, source.clone());
            check_scales(&frame, &renderer)?;
            renderers.push(renderer);
        }

        let plot = PlotView::new(frame).with_scatter_views(&renderers, config.tool.hit_radius);
        let tool = EditTool::new(renderers).with_empty_value(config.tool.empty_value.clone());
        tracing::info!(
            "Loaded scene with {} sources and {} renderers",
            sources.len(),
            tool.renderers.len()
        );

        Ok(Self {
            sources,
            view: EditToolView::new(tool, plot),
        })
    }

    /// Replay `steps` in order, stopping at the first bad reference
    pub fn replay(&mut self, steps: &[Step]) -> Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.apply(step)
                .with_context(|| format!("Step {} ({:?}) failed", i + 1, step))?;
        }
        Ok(())
    }

    pub fn apply(&mut self, step: &Step) -> Result<()> {
        tracing::debug!("Replaying {:?}", step);
        match step {
            Step::Enter { at } => self.view.on_pointer_enter(&MoveEvent::new(at[0], at[1])),
            Step::Exit { at } => self.view.on_pointer_exit(&MoveEvent::new(at[0], at[1])),
            Step::DragStart { at } => self.view.begin_drag(&DragEvent::new(at[0], at[1])),
            Step::Drag { at } => self.view.apply_drag_to_all(&DragEvent::new(at[0], at[1])),
            Step::DragEnd => self.view.end_drag(),
            Step::Tap { at, append } => {
                let modifiers = Modifiers {
                    shift: *append,
                    ..Modifiers::default()
                };
                let event = TapEvent::new(at[0], at[1]).with_modifiers(modifiers);
                self.view.select_tap(&event);
            }
            Step::Delete { renderer } => {
                let renderer = self.renderer(renderer)?;
                self.view.delete_selected(renderer);
            }
            Step::AppendRow { source, values } => self.append_row(source, values)?,
        }
        Ok(())
    }

    fn renderer(&self, name: &str) -> Result<&Renderer> {
        self.view
            .model
            .renderers
            .iter()
            .find(|r| r.name == name)
            .with_context(|| format!("Unknown renderer `{}`", name))
    }

    fn append_row(&self, name: &str, values: &IndexMap<String, Value>) -> Result<()> {
        let source = self
            .sources
            .get(name)
            .with_context(|| format!("Unknown source `{}`", name))?;
        {
            let mut data = source.write();
            if let Some(missing) = values.keys().find(|k| data.column(k).is_none()) {
                bail!("Source `{}` has no column `{}`", name, missing);
            }
            for (column, value) in values {
                if let Some(col) = data.column_mut(column) {
                    col.push(value.clone());
                }
            }
        }

        let coord_columns: Vec<&str> = values.keys().map(String::as_str).collect();
        self.view.pad_empty_columns(source, &coord_columns);
        source.emit(SourceChange::Data);
        Ok(())
    }

    /// Current columns and selection of every source, in scene order
    pub fn snapshot(&self) -> Vec<SourceSnapshot> {
        self.sources
            .iter()
            .map(|(name, source)| {
                let data = source.read();
                let columns = data
                    .columns()
                    .filter_map(|c| data.column(c).map(|col| (c.to_string(), col.clone())))
                    .collect();
                SourceSnapshot {
                    name: name.clone(),
                    columns,
                    selected: data.selection().indices(),
                }
            })
            .collect()
    }
}

fn build_frame(config: &FrameConfig) -> Frame {
    let [x0, y0, x1, y1] = config.bbox;
    let mut frame = Frame::new(Rect::from_points(Point::new(x0, y0), Point::new(x1, y1)));
    for (name, scale) in &config.x_scales {
        frame = frame.with_x_scale(name.as_str(), *scale);
    }
    for (name, scale) in &config.y_scales {
        frame = frame.with_y_scale(name.as_str(), *scale);
    }
    frame
}

fn build_source(config: &SourceConfig) -> Result<DataSource> {
    let mut data = DataSource::new();
    for (name, column) in &config.columns {
        data.add_column(name.as_str(), column.clone())?;
    }
    for name in &config.typed {
        let column = data
            .column(name)
            .with_context(|| format!("Typed column `{}` not found", name))?;
        let floats = (0..column.len())
            .map(|i| column.get_f64(i))
            .collect::<Option<Vec<f64>>>()
            .with_context(|| format!("Typed column `{}` is not numeric", name))?;
        data.set_column(name, Column::typed(floats))?;
    }
    Ok(data)
}

fn build_renderer(config: &RendererConfig, source: SharedSource) -> Renderer {
    let mut renderer = Renderer::new(config.id.as_str(), source).with_glyph(XyGlyph {
        x: config.x.clone(),
        y: config.y.clone(),
    });
    if let Some(range) = &config.x_range {
        renderer = renderer.with_x_range(range.as_str());
    }
    if let Some(range) = &config.y_range {
        renderer = renderer.with_y_range(range.as_str());
    }
    renderer
}

fn check_scales(frame: &Frame, renderer: &Renderer) -> Result<()> {
    if frame.x_scale(&renderer.x_range_name).is_none() {
        bail!(
            "Renderer `{}` uses unknown x scale `{}`",
            renderer.name,
            renderer.x_range_name
        );
    }
    if frame.y_scale(&renderer.y_range_name).is_none() {
        bail!(
            "Renderer `{}` uses unknown y scale `{}`",
            renderer.name,
            renderer.y_range_name
        );
    }
    Ok(())
}
