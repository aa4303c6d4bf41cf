// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Columnar data sources and the shared handle renderers hold.
//!
//! `DataSource` is plain owned data: an ordered registry of named columns
//! plus the current row selection. Renderers never own one directly; they
//! hold a `SharedSource`, an `Arc<RwLock<DataSource>>` paired with a list
//! of change listeners. Several renderers may hold clones of the same
//! handle, so edits made through one are seen by all of them.
//!
//! Listeners are invoked by [`SharedSource::emit`] with no data lock held,
//! which lets them read the source they were notified about.

use super::column::Column;
use crate::editing::Selection;
use crate::error::SourceError;
use indexmap::IndexMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// DATA SOURCE
// ============================================================================

/// Which attribute of a data source changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceChange {
    /// Cell contents were edited in place
    Content,
    /// The data attribute itself changed (rows added or removed)
    Data,
    /// The selection changed
    Selected,
}

/// A table of equal-length named columns with a row selection
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    columns: IndexMap<String, Column>,
    selection: Selection,
}

impl DataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`DataSource::add_column`]
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<Self, SourceError> {
        self.add_column(name, column)?;
        Ok(self)
    }

    /// Add a column, which must match the length of existing columns
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> Result<(), SourceError> {
        let name = name.into();
        let column = column.into();

        if self.columns.contains_key(&name) {
            return Err(SourceError::DuplicateColumn(name));
        }
        if let Some(expected) = self.columns.values().next().map(Column::len)
            && column.len() != expected
        {
            return Err(SourceError::LengthMismatch {
                column: name,
                expected,
                found: column.len(),
            });
        }

        self.columns.insert(name, column);
        Ok(())
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.get_mut(name)
    }

    /// Mutable access to every column, in insertion order
    pub fn columns_mut(&mut self) -> impl Iterator<Item = (&str, &mut Column)> {
        self.columns.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace the storage of an existing column
    pub fn set_column(&mut self, name: &str, column: impl Into<Column>) -> Result<(), SourceError> {
        match self.columns.get_mut(name) {
            Some(slot) => {
                *slot = column.into();
                Ok(())
            }
            None => Err(SourceError::UnknownColumn(name.to_string())),
        }
    }

    /// Number of rows (length of the longest column)
    pub fn len(&self) -> usize {
        self.columns.values().map(Column::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether all columns have the same length
    pub fn is_aligned(&self) -> bool {
        let mut lens = self.columns.values().map(Column::len);
        match lens.next() {
            Some(first) => lens.all(|len| len == first),
            None => true,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}

// ============================================================================
// SHARED HANDLE
// ============================================================================

type Listener = Arc<dyn Fn(&SourceChange) + Send + Sync>;

/// Reference-counted handle to a data source shared between renderers
#[derive(Clone)]
pub struct SharedSource {
    name: Arc<str>,
    data: Arc<RwLock<DataSource>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl SharedSource {
    pub fn new(name: impl Into<Arc<str>>, source: DataSource) -> Self {
        Self {
            name: name.into(),
            data: Arc::new(RwLock::new(source)),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acquire a read lock, recovering from poison.
    ///
    /// A poisoned lock only means a panic happened mid-edit elsewhere; the
    /// column data is still structurally valid, so we keep going.
    pub fn read(&self) -> RwLockReadGuard<'_, DataSource> {
        self.data.read().unwrap_or_else(|poisoned| {
            tracing::warn!("DataSource `{}` RwLock was poisoned, recovering", self.name);
            poisoned.into_inner()
        })
    }

    /// Acquire a write lock, recovering from poison.
    ///
    /// See [`SharedSource::read`] for details on poison recovery.
    pub fn write(&self) -> RwLockWriteGuard<'_, DataSource> {
        self.data.write().unwrap_or_else(|poisoned| {
            tracing::warn!("DataSource `{}` RwLock was poisoned, recovering", self.name);
            poisoned.into_inner()
        })
    }

    /// Register a listener for change notifications
    pub fn subscribe(&self, listener: impl Fn(&SourceChange) + Send + Sync + 'static) {
        self.lock_listeners().push(Arc::new(listener));
    }

    /// Notify every listener of a change.
    ///
    /// Must not be called while holding a guard from `read`/`write` if a
    /// listener reads the source back.
    pub fn emit(&self, change: SourceChange) {
        let listeners: Vec<Listener> = self.lock_listeners().clone();
        tracing::trace!(
            "DataSource `{}`: {:?} -> {} listeners",
            self.name,
            change,
            listeners.len()
        );
        for listener in listeners {
            listener(&change);
        }
    }

    /// Whether both handles point at the same data source
    pub fn ptr_eq(&self, other: &SharedSource) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("DataSource `{}` listener list was poisoned, recovering", self.name);
            poisoned.into_inner()
        })
    }
}

impl fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("SharedSource");
        s.field("name", &self.name);
        match self.data.try_read() {
            Ok(data) => s.field("data", &*data),
            Err(_) => s.field("data", &"<locked>"),
        };
        s.finish()
    }
}
