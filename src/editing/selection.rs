// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Selected row indices of a data source.
//!
//! `Selection` wraps an `Arc<BTreeSet<usize>>` so snapshots handed to
//! observers are cheap clones. Mutations go through `Arc::make_mut`
//! (copy-on-write). The `BTreeSet` keeps indices unique and iterates them
//! in ascending order, which row deletion relies on.

use std::collections::BTreeSet;
use std::sync::Arc;

/// A set of selected row indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    inner: Arc<BTreeSet<usize>>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.inner.contains(&index)
    }

    /// Iterate over selected rows in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.inner.iter().copied()
    }

    /// Selected rows, ascending
    pub fn indices(&self) -> Vec<usize> {
        self.iter().collect()
    }

    pub fn insert(&mut self, index: usize) {
        Arc::make_mut(&mut self.inner).insert(index);
    }

    pub fn remove(&mut self, index: usize) {
        Arc::make_mut(&mut self.inner).remove(&index);
    }

    /// Replace the selection with `indices`
    pub fn replace(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.inner = Arc::new(indices.into_iter().collect());
    }

    /// Add `indices` to the selection
    pub fn extend(&mut self, indices: impl IntoIterator<Item = usize>) {
        Arc::make_mut(&mut self.inner).extend(indices);
    }

    pub fn clear(&mut self) {
        if !self.inner.is_empty() {
            self.inner = Arc::new(BTreeSet::new());
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            inner: Arc::new(iter.into_iter().collect()),
        }
    }
}
