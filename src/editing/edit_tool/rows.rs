// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Row lifecycle: deleting selected rows and padding appended ones

use super::EditToolView;
use crate::model::{Renderer, SharedSource, SourceChange};

impl EditToolView {
    /// Delete every selected row of the renderer's data source.
    ///
    /// Rows are removed from every column, not just the coordinate ones,
    /// so columns stay aligned. Fixed-size columns are copied into
    /// resizable storage first. Afterwards observers are told about the
    /// content and data change, and the selection (which would now point
    /// at the wrong rows) is cleared.
    pub fn delete_selected(&self, renderer: &Renderer) {
        let source = &renderer.source;
        {
            let mut data = source.write();
            let indices = data.selection().indices();
            for (name, column) in data.columns_mut() {
                if column.make_resizable() {
                    tracing::debug!("Column `{}` copied to resizable storage", name);
                }
                column.remove_sorted(&indices);
            }
            tracing::debug!(
                "[EditToolView] deleted {} rows from `{}`, {} remain",
                indices.len(),
                source.name(),
                data.len()
            );
        }

        source.emit(SourceChange::Content);
        source.emit(SourceChange::Data);
        renderer.selection_manager().clear();
    }

    /// Append the tool's empty value to every column not named in
    /// `coord_columns`.
    ///
    /// Meant to follow a caller appending coordinate cells directly, so the
    /// new row is complete. A coordinate column left out of
    /// `coord_columns` gets an empty value too; that is the caller's
    /// responsibility.
    pub fn pad_empty_columns(&self, source: &SharedSource, coord_columns: &[&str]) {
        let mut data = source.write();
        let mut padded = 0;
        for (name, column) in data.columns_mut() {
            if coord_columns.contains(&name) {
                continue;
            }
            column.push(self.model.empty_value.clone());
            padded += 1;
        }
        tracing::trace!(
            "[EditToolView] padded {} columns of `{}` with {}",
            padded,
            source.name(),
            self.model.empty_value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::EditTool;
    use super::*;
    use crate::editing::PlotView;
    use crate::model::{Column, DataSource, Value};

    #[test]
    fn delete_selected_rows() {
        // {x:[0,1,2], y:[0,1,2]}, selection {0,2}
        let source = xy_source("s");
        source.write().selection_mut().replace([0, 2]);
        let r = scatter(&source);
        let view = tool_view(vec![r.clone()]);

        view.delete_selected(&r);

        assert_close(&floats(&source, "x"), &[1.0]);
        assert_close(&floats(&source, "y"), &[1.0]);
        assert!(source.read().selection().is_empty());
    }

    #[test]
    fn delete_keeps_columns_aligned_and_ordered() {
        let data = DataSource::new()
            .with_column("x", (0..12).map(f64::from).collect::<Vec<_>>())
            .unwrap()
            .with_column(
                "label",
                (0..12).map(|i| format!("r{i}")).collect::<Vec<_>>(),
            )
            .unwrap();
        let source = SharedSource::new("s", data);
        // 10 after 9: numeric order matters
        source.write().selection_mut().replace([10, 2, 9]);
        let r = scatter(&source);
        let view = tool_view(vec![r.clone()]);

        view.delete_selected(&r);

        let data = source.read();
        assert_eq!(data.len(), 9);
        assert!(data.is_aligned());
        let expected = [0, 1, 3, 4, 5, 6, 7, 8, 11];
        for (row, original) in expected.iter().enumerate() {
            assert_eq!(data.column("x").unwrap().get_f64(row), Some(*original as f64));
            assert_eq!(
                data.column("label").unwrap().get(row),
                Some(Value::Text(format!("r{original}")))
            );
        }
    }

    #[test]
    fn delete_converts_fixed_size_columns() {
        let source = xy_source("s");
        source
            .write()
            .set_column("x", Column::typed(vec![0.0, 1.0, 2.0]))
            .unwrap();
        source.write().selection_mut().replace([1]);
        let r = scatter(&source);
        let view = tool_view(vec![r.clone()]);

        view.delete_selected(&r);

        let data = source.read();
        assert_eq!(data.column("x"), Some(&Column::Float(vec![0.0, 2.0])));
        assert_eq!(data.column("y"), Some(&Column::Float(vec![0.0, 2.0])));
    }

    #[test]
    fn delete_notifies_then_clears() {
        let source = xy_source("s");
        source.write().selection_mut().replace([1]);
        let log = record(&source);
        let r = scatter(&source);
        let view = tool_view(vec![r.clone()]);

        view.delete_selected(&r);

        assert_eq!(
            *log.lock().unwrap(),
            vec![SourceChange::Content, SourceChange::Data, SourceChange::Selected]
        );
    }

    #[test]
    fn delete_with_empty_selection_keeps_rows() {
        let source = xy_source("s");
        let r = scatter(&source);
        let view = tool_view(vec![r.clone()]);

        view.delete_selected(&r);
        assert_eq!(source.read().len(), 3);
    }

    #[test]
    fn pad_after_coordinate_append() {
        // {x:[0,1,5], label:["a","b"]} after appending x=5 directly
        let data = DataSource::new()
            .with_column("x", vec![0.0, 1.0])
            .unwrap()
            .with_column("label", vec!["a", "b"])
            .unwrap();
        let source = SharedSource::new("s", data);
        source.write().column_mut("x").unwrap().push(Value::Number(5.0));

        let plot = PlotView::new(frame());
        let view = EditToolView::new(EditTool::default().with_empty_value(0), plot);
        view.pad_empty_columns(&source, &["x"]);

        let data = source.read();
        assert!(data.is_aligned());
        assert_eq!(
            data.column("label").unwrap().to_values(),
            vec![Value::from("a"), Value::from("b"), Value::Number(0.0)]
        );
        assert_eq!(data.column("x"), Some(&Column::Float(vec![0.0, 1.0, 5.0])));
    }

    #[test]
    fn pad_fills_every_non_coordinate_column() {
        let data = DataSource::new()
            .with_column("x", vec![0.0])
            .unwrap()
            .with_column("y", vec![0.0])
            .unwrap()
            .with_column("size", Column::typed(vec![3.0]))
            .unwrap()
            .with_column("label", vec!["a"])
            .unwrap();
        let source = SharedSource::new("s", data);
        {
            let mut data = source.write();
            data.column_mut("x").unwrap().push(Value::Number(1.0));
            data.column_mut("y").unwrap().push(Value::Number(2.0));
        }

        let view = tool_view(vec![]);
        view.pad_empty_columns(&source, &["x", "y"]);

        let data = source.read();
        assert!(data.is_aligned());
        assert_eq!(data.len(), 2);
        assert_eq!(data.column("size").unwrap().get(1), Some(Value::Null));
        assert_eq!(data.column("label").unwrap().get(1), Some(Value::Null));
    }

    #[test]
    fn pad_with_undeclared_coordinate_column() {
        let source = xy_source("s");
        source.write().column_mut("x").unwrap().push(Value::Number(9.0));

        let view = tool_view(vec![]);
        // Caller forgot `x`: it gets a spurious empty value
        view.pad_empty_columns(&source, &[]);

        let data = source.read();
        assert_eq!(data.column("x").unwrap().len(), 5);
        assert_eq!(data.column("y").unwrap().len(), 4);
        assert_eq!(data.column("x").unwrap().get(4), Some(Value::Null));
    }
}
