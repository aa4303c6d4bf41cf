// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Typed column storage.
//!
//! A column is one of a few storage kinds. Three of them are resizable
//! vectors; `Typed` is fixed-size numeric storage (think a memory-mapped or
//! externally owned buffer) whose cells can change in place but whose
//! length cannot. Operations that add or remove rows convert `Typed` into
//! `Float` first via [`Column::make_resizable`], which is the only place a
//! full copy of a column happens.
//!
//! Appending a value that does not fit the storage kind widens the column
//! to `Mixed` rather than failing, so a numeric empty value can pad a text
//! column.

use super::value::Value;
use crate::error::ColumnError;
use serde::{Deserialize, Serialize};

/// A single named column of a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub enum Column {
    /// Resizable numeric storage
    Float(Vec<f64>),
    /// Resizable string storage
    Text(Vec<String>),
    /// Resizable heterogeneous storage
    Mixed(Vec<Value>),
    /// Fixed-size numeric storage
    Typed(Box<[f64]>),
}

impl Column {
    /// Create fixed-size numeric storage
    pub fn typed(values: impl Into<Box<[f64]>>) -> Self {
        Column::Typed(values.into())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Mixed(v) => v.len(),
            Column::Typed(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether rows can be inserted or removed without conversion
    pub fn is_resizable(&self) -> bool {
        !matches!(self, Column::Typed(_))
    }

    /// Convert fixed-size storage into a resizable vector.
    ///
    /// Returns true if a copy was made.
    pub fn make_resizable(&mut self) -> bool {
        if let Column::Typed(values) = self {
            tracing::trace!("Copying fixed-size column of {} rows", values.len());
            let copied = values.to_vec();
            *self = Column::Float(copied);
            true
        } else {
            false
        }
    }

    /// Read a cell
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Column::Float(v) => v.get(index).map(|n| Value::Number(*n)),
            Column::Text(v) => v.get(index).map(|s| Value::Text(s.clone())),
            Column::Mixed(v) => v.get(index).cloned(),
            Column::Typed(v) => v.get(index).map(|n| Value::Number(*n)),
        }
    }

    /// Read a cell as a number
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match self {
            Column::Float(v) => v.get(index).copied(),
            Column::Typed(v) => v.get(index).copied(),
            Column::Mixed(v) => v.get(index).and_then(Value::as_f64),
            Column::Text(_) => None,
        }
    }

    /// Add `delta` to the numeric cell at `index`, in place
    pub fn offset(&mut self, index: usize, delta: f64) -> Result<(), ColumnError> {
        let len = self.len();
        let cell = match self {
            Column::Float(v) => v.get_mut(index),
            Column::Typed(v) => v.get_mut(index),
            Column::Mixed(v) => match v.get_mut(index) {
                Some(Value::Number(n)) => Some(n),
                Some(_) => return Err(ColumnError::NotNumeric { index }),
                None => None,
            },
            Column::Text(v) => {
                if index < v.len() {
                    return Err(ColumnError::NotNumeric { index });
                }
                None
            }
        };

        match cell {
            Some(n) => {
                *n += delta;
                Ok(())
            }
            None => Err(ColumnError::OutOfRange { index, len }),
        }
    }

    /// Append a cell, converting or widening the storage when needed
    pub fn push(&mut self, value: Value) {
        self.make_resizable();
        let value = match (&mut *self, value) {
            (Column::Float(v), Value::Number(n)) => return v.push(n),
            (Column::Text(v), Value::Text(s)) => return v.push(s),
            (Column::Mixed(v), value) => return v.push(value),
            (_, value) => value,
        };
        self.widen().push(value);
    }

    /// Remove one row.
    ///
    /// Fixed-size storage must be made resizable first.
    pub fn remove(&mut self, index: usize) -> Result<Value, ColumnError> {
        let len = self.len();
        if index >= len {
            return Err(ColumnError::OutOfRange { index, len });
        }
        match self {
            Column::Float(v) => Ok(Value::Number(v.remove(index))),
            Column::Text(v) => Ok(Value::Text(v.remove(index))),
            Column::Mixed(v) => Ok(v.remove(index)),
            Column::Typed(_) => Err(ColumnError::NotResizable),
        }
    }

    /// Remove the rows at `indices`, which must be sorted ascending and
    /// unique.
    ///
    /// The k-th removal targets position `indices[k] - k`, accounting for
    /// the rows already shifted left. Indices past the end are ignored.
    /// Returns the number of rows removed.
    pub fn remove_sorted(&mut self, indices: &[usize]) -> usize {
        self.make_resizable();
        let mut removed = 0;
        for (k, &index) in indices.iter().enumerate() {
            let Some(position) = index.checked_sub(k) else {
                continue;
            };
            match self.remove(position) {
                Ok(_) => removed += 1,
                Err(e) => tracing::debug!("Skipping row {}: {}", index, e),
            }
        }
        removed
    }

    /// All cells as loosely-typed values
    pub fn to_values(&self) -> Vec<Value> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }

    /// Convert to heterogeneous storage and return it
    fn widen(&mut self) -> &mut Vec<Value> {
        if !matches!(self, Column::Mixed(_)) {
            tracing::trace!("Widening column of {} rows to mixed storage", self.len());
            *self = Column::Mixed(self.to_values());
        }
        match self {
            Column::Mixed(v) => v,
            _ => unreachable!("column was just widened"),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Column::Float(Vec::new())
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(str::to_string).collect())
    }
}

/// Infer the narrowest storage kind that holds every value
impl From<Vec<Value>> for Column {
    fn from(values: Vec<Value>) -> Self {
        if values.iter().all(|v| matches!(v, Value::Number(_))) {
            Column::Float(values.iter().filter_map(Value::as_f64).collect())
        } else if values.iter().all(|v| matches!(v, Value::Text(_))) {
            Column::Text(
                values
                    .into_iter()
                    .filter_map(|v| match v {
                        Value::Text(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            )
        } else {
            Column::Mixed(values)
        }
    }
}

impl From<Column> for Vec<Value> {
    fn from(column: Column) -> Self {
        column.to_values()
    }
}
