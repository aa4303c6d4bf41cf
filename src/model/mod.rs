// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Data model: values, typed columns, shared data sources and renderers

pub mod column;
pub mod renderer;
pub mod renderer_id;
pub mod source;
pub mod value;

pub use column::Column;
pub use renderer::{Renderer, XyGlyph};
pub use renderer_id::RendererId;
pub use source::{DataSource, SharedSource, SourceChange};
pub use value::Value;
