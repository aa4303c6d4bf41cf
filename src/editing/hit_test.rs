// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing of rendered glyph views and the selection manager that
//! turns hits into a data source selection.

use super::frame::Frame;
use crate::model::{DataSource, Renderer, SharedSource, SourceChange, XyGlyph};
use crate::settings;
use kurbo::Point;
use std::fmt;

/// Screen-space point geometry for hit testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    pub sx: f64,
    pub sy: f64,
}

impl PointGeometry {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self { sx, sy }
    }

    pub fn point(&self) -> Point {
        Point::new(self.sx, self.sy)
    }
}

impl From<Point> for PointGeometry {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

// ===== Glyph Views =====

/// The rendered view of a renderer, able to hit-test screen geometry
pub trait GlyphView: fmt::Debug + Send + Sync {
    /// Rows of `source` under `geometry`.
    ///
    /// `None` means this view cannot hit-test the geometry at all, which
    /// leaves the selection untouched. `Some(vec![])` is a miss.
    fn hit_test(
        &self,
        geometry: &PointGeometry,
        source: &DataSource,
        frame: &Frame,
    ) -> Option<Vec<usize>>;
}

/// Scatter markers: a row is hit when its screen position is within
/// `radius` pixels of the tap
#[derive(Debug, Clone)]
pub struct ScatterView {
    glyph: XyGlyph,
    x_range_name: String,
    y_range_name: String,
    radius: f64,
}

impl ScatterView {
    pub fn for_renderer(renderer: &Renderer) -> Self {
        Self {
            glyph: renderer.glyph.clone().unwrap_or_default(),
            x_range_name: renderer.x_range_name.clone(),
            y_range_name: renderer.y_range_name.clone(),
            radius: settings::hit_test::RADIUS,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

impl GlyphView for ScatterView {
    fn hit_test(
        &self,
        geometry: &PointGeometry,
        source: &DataSource,
        frame: &Frame,
    ) -> Option<Vec<usize>> {
        let (Some(x_field), Some(y_field)) = (&self.glyph.x, &self.glyph.y) else {
            return None;
        };
        let (Some(xs), Some(ys)) = (source.column(x_field), source.column(y_field)) else {
            tracing::debug!("[ScatterView] missing column `{}` or `{}`", x_field, y_field);
            return None;
        };

        let target = geometry.point();
        let rows = xs.len().min(ys.len());
        let hits: Vec<usize> = (0..rows)
            .filter(|&i| {
                let (Some(x), Some(y)) = (xs.get_f64(i), ys.get_f64(i)) else {
                    return false;
                };
                frame
                    .map_to_screen(x, y, &self.x_range_name, &self.y_range_name)
                    .is_some_and(|screen| screen.distance(target) <= self.radius)
            })
            .collect();

        tracing::debug!(
            "[ScatterView] hit test at ({}, {}): {} of {} rows",
            geometry.sx,
            geometry.sy,
            hits.len(),
            rows
        );
        Some(hits)
    }
}

// ===== Selection Manager =====

/// Updates a data source's selection from glyph view hit tests
#[derive(Debug, Clone, Copy)]
pub struct SelectionManager<'a> {
    source: &'a SharedSource,
}

impl<'a> SelectionManager<'a> {
    pub fn new(source: &'a SharedSource) -> Self {
        Self { source }
    }

    /// Hit-test `views` and report whether any row was hit.
    ///
    /// With `update` set, each view that can hit-test writes its hits into
    /// the selection: replacing it, or added to it when `append` is set. A
    /// replacing miss therefore clears the selection. No notification is
    /// emitted here; callers decide when observers refresh.
    pub fn select(
        &self,
        views: &[&dyn GlyphView],
        frame: &Frame,
        geometry: &PointGeometry,
        update: bool,
        append: bool,
    ) -> bool {
        let mut did_hit = false;
        for view in views {
            let hits = {
                let data = self.source.read();
                view.hit_test(geometry, &data, frame)
            };
            let Some(hits) = hits else {
                continue;
            };

            did_hit |= !hits.is_empty();
            if update {
                let mut data = self.source.write();
                let selection = data.selection_mut();
                if append {
                    selection.extend(hits);
                } else {
                    selection.replace(hits);
                }
            }
        }
        did_hit
    }

    /// Empty the selection and notify observers
    pub fn clear(&self) {
        self.source.write().selection_mut().clear();
        self.source.emit(SourceChange::Selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::frame::LinearScale;
    use crate::model::Renderer;
    use kurbo::Rect;

    fn frame() -> Frame {
        Frame::new(Rect::new(0.0, 0.0, 100.0, 100.0))
            .with_x_scale("default", LinearScale::new((0.0, 10.0), (0.0, 100.0)))
            .with_y_scale("default", LinearScale::new((0.0, 10.0), (100.0, 0.0)))
    }

    fn renderer() -> Renderer {
        let source = DataSource::new()
            .with_column("x", vec![0.0, 1.0, 2.0])
            .unwrap()
            .with_column("y", vec![0.0, 1.0, 2.0])
            .unwrap();
        Renderer::new("scatter", SharedSource::new("points", source))
            .with_glyph(XyGlyph::new("x", "y"))
    }

    #[test]
    fn scatter_hits_within_radius() {
        let r = renderer();
        let view = ScatterView::for_renderer(&r).with_radius(3.0);
        let data = r.source.read();

        // Row 1 sits at screen (10, 90)
        let hits = view.hit_test(&PointGeometry::new(12.0, 91.0), &data, &frame());
        assert_eq!(hits, Some(vec![1]));

        let miss = view.hit_test(&PointGeometry::new(50.0, 50.0), &data, &frame());
        assert_eq!(miss, Some(vec![]));
    }

    #[test]
    fn scatter_without_both_fields_cannot_hit_test() {
        let r = renderer().with_glyph(XyGlyph::x_only("x"));
        let view = ScatterView::for_renderer(&r);
        let data = r.source.read();
        assert_eq!(view.hit_test(&PointGeometry::new(10.0, 90.0), &data, &frame()), None);
    }

    #[test]
    fn select_replaces_or_appends() {
        let r = renderer();
        let view = ScatterView::for_renderer(&r);
        let views: [&dyn GlyphView; 1] = [&view];
        let sm = r.selection_manager();

        assert!(sm.select(&views, &frame(), &PointGeometry::new(0.0, 99.0), true, false));
        assert_eq!(r.source.read().selection().indices(), vec![0]);

        assert!(sm.select(&views, &frame(), &PointGeometry::new(20.0, 80.0), true, true));
        assert_eq!(r.source.read().selection().indices(), vec![0, 2]);

        assert!(sm.select(&views, &frame(), &PointGeometry::new(10.0, 90.0), true, false));
        assert_eq!(r.source.read().selection().indices(), vec![1]);
    }

    #[test]
    fn replacing_miss_clears_selection() {
        let r = renderer();
        r.source.write().selection_mut().replace([0, 1]);
        let view = ScatterView::for_renderer(&r);
        let views: [&dyn GlyphView; 1] = [&view];

        let hit = r
            .selection_manager()
            .select(&views, &frame(), &PointGeometry::new(60.0, 20.0), true, false);
        assert!(!hit);
        assert!(r.source.read().selection().is_empty());
    }

    #[test]
    fn appending_miss_keeps_selection() {
        let r = renderer();
        r.source.write().selection_mut().replace([2]);
        let view = ScatterView::for_renderer(&r);
        let views: [&dyn GlyphView; 1] = [&view];

        let hit = r
            .selection_manager()
            .select(&views, &frame(), &PointGeometry::new(60.0, 20.0), true, true);
        assert!(!hit);
        assert_eq!(r.source.read().selection().indices(), vec![2]);
    }

    #[test]
    fn select_without_update_only_reports() {
        let r = renderer();
        let view = ScatterView::for_renderer(&r);
        let views: [&dyn GlyphView; 1] = [&view];

        assert!(r
            .selection_manager()
            .select(&views, &frame(), &PointGeometry::new(10.0, 90.0), false, false));
        assert!(r.source.read().selection().is_empty());
    }

    #[test]
    fn clear_empties_and_notifies() {
        let r = renderer();
        r.source.write().selection_mut().replace([1]);
        let count = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen = count.clone();
        r.source.subscribe(move |change| {
            if *change == SourceChange::Selected {
                seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            }
        });

        r.selection_manager().clear();
        assert!(r.source.read().selection().is_empty());
        assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 1);
    }
}
