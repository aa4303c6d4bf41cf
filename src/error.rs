// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for column storage and data source construction.
//!
//! Interactive paths (drag, select, delete) never surface these to the
//! caller; they log and skip instead. The errors exist for construction
//! and for code that edits cells directly.

use thiserror::Error;

/// Failure to read or update a single column
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    #[error("cell {index} does not hold a number")]
    NotNumeric { index: usize },

    #[error("row {index} is out of range for a column of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("column storage has a fixed size")]
    NotResizable,
}

/// Failure to build or extend a data source
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("column `{column}` has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("column `{0}` already exists")]
    DuplicateColumn(String),

    #[error("no column named `{0}`")]
    UnknownColumn(String),
}
