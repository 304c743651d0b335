//! Lock-guarded table shared by the in-memory repositories.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDateTime, Utc};
use maintenance_core::errors::{Error, Result};

/// Rows keyed by ID plus the counter used to assign the next one.
#[derive(Debug)]
pub(crate) struct Table<T> {
    next_id: i64,
    rows: HashMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: HashMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Builds a row from the next ID and the current instant, then stores it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64, NaiveDateTime) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id, Utc::now().naive_utc());
        self.rows.insert(id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Copies the rows matching `keep`, sorted by ID ascending.
    pub(crate) fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut ids: Vec<i64> = self
            .rows
            .iter()
            .filter(|(_, row)| keep(row))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| self.rows[&id].clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Cloneable handle to a [`Table`] behind a single reader/writer lock.
#[derive(Debug)]
pub(crate) struct SharedTable<T> {
    inner: Arc<RwLock<Table<T>>>,
}

impl<T> Clone for SharedTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedTable<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Table::default())),
        }
    }
}

impl<T> SharedTable<T> {
    pub(crate) fn read(&self, operation: &str) -> Result<RwLockReadGuard<'_, Table<T>>> {
        self.inner
            .read()
            .map_err(|_| Error::Repository(format!("{}: failed to acquire read lock", operation)))
    }

    pub(crate) fn write(&self, operation: &str) -> Result<RwLockWriteGuard<'_, Table<T>>> {
        self.inner
            .write()
            .map_err(|_| Error::Repository(format!("{}: failed to acquire write lock", operation)))
    }
}
