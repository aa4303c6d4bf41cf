// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Plot frame: the visible screen rectangle and its named scales.
//!
//! Scales map data space to screen space. Editing needs the other
//! direction, so every scale can also invert. A frame may carry several
//! x and y scales (e.g. a secondary y axis); renderers pick theirs by name,
//! which is why mapping always happens per renderer.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// ===== Scales =====

/// A one-dimensional mapping from data space to screen space
pub trait Scale: fmt::Debug + Send + Sync {
    /// Map a data value to a screen coordinate
    fn compute(&self, value: f64) -> f64;

    /// Map a screen coordinate back to a data value
    fn invert(&self, screen: f64) -> f64;
}

/// Linear interpolation between a data interval and a screen interval.
///
/// `target` may run backwards (e.g. `[height, 0]` for a y axis pointing up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub source: (f64, f64),
    pub target: (f64, f64),
}

impl LinearScale {
    pub fn new(source: (f64, f64), target: (f64, f64)) -> Self {
        Self { source, target }
    }
}

impl Scale for LinearScale {
    fn compute(&self, value: f64) -> f64 {
        let (s0, s1) = self.source;
        let (t0, t1) = self.target;
        let span = s1 - s0;
        if span == 0.0 {
            return t0;
        }
        t0 + (value - s0) * (t1 - t0) / span
    }

    fn invert(&self, screen: f64) -> f64 {
        let (s0, s1) = self.source;
        let (t0, t1) = self.target;
        let span = t1 - t0;
        if span == 0.0 {
            return s0;
        }
        s0 + (screen - t0) * (s1 - s0) / span
    }
}

// ===== Frame =====

/// Visible plot area with named x and y scales
#[derive(Debug, Clone)]
pub struct Frame {
    /// Visible screen-space rectangle
    pub bbox: Rect,
    x_scales: HashMap<String, Arc<dyn Scale>>,
    y_scales: HashMap<String, Arc<dyn Scale>>,
}

impl Frame {
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            x_scales: HashMap::new(),
            y_scales: HashMap::new(),
        }
    }

    pub fn with_x_scale(mut self, name: impl Into<String>, scale: impl Scale + 'static) -> Self {
        self.x_scales.insert(name.into(), Arc::new(scale));
        self
    }

    pub fn with_y_scale(mut self, name: impl Into<String>, scale: impl Scale + 'static) -> Self {
        self.y_scales.insert(name.into(), Arc::new(scale));
        self
    }

    pub fn x_scale(&self, name: &str) -> Option<&dyn Scale> {
        self.x_scales.get(name).map(|s| s.as_ref())
    }

    pub fn y_scale(&self, name: &str) -> Option<&dyn Scale> {
        self.y_scales.get(name).map(|s| s.as_ref())
    }

    /// Whether a screen point lies inside the visible area.
    ///
    /// Uses the half-open containment of `kurbo::Rect`: the left and top
    /// edges are inside, the right and bottom edges are not.
    pub fn contains(&self, sx: f64, sy: f64) -> bool {
        self.bbox.contains(Point::new(sx, sy))
    }

    /// Map a screen point to data space through the named scales.
    ///
    /// Returns `None` for points outside the frame, or when either scale
    /// is not registered.
    pub fn map_to_data(&self, sx: f64, sy: f64, x_range: &str, y_range: &str) -> Option<Point> {
        if !self.contains(sx, sy) {
            return None;
        }
        let (x_scale, y_scale) = self.scales(x_range, y_range)?;
        Some(Point::new(x_scale.invert(sx), y_scale.invert(sy)))
    }

    /// Map a data point to screen space through the named scales
    pub fn map_to_screen(&self, x: f64, y: f64, x_range: &str, y_range: &str) -> Option<Point> {
        let (x_scale, y_scale) = self.scales(x_range, y_range)?;
        Some(Point::new(x_scale.compute(x), y_scale.compute(y)))
    }

    fn scales(&self, x_range: &str, y_range: &str) -> Option<(&dyn Scale, &dyn Scale)> {
        let Some(x_scale) = self.x_scale(x_range) else {
            tracing::warn!("No x scale named `{}` in frame", x_range);
            return None;
        };
        let Some(y_scale) = self.y_scale(y_range) else {
            tracing::warn!("No y scale named `{}` in frame", y_range);
            return None;
        };
        Some((x_scale, y_scale))
    }
}
