//! In-memory menu collection with date-keyed lookups.
//!
//! The collection is filled once per page load and only ever replaced as a
//! whole, so readers see either the previous collection or the new one.

mod source;

pub use source::*;

use std::collections::HashSet;

use crate::errors::AppError;
use crate::models::MenuRecord;

/// Holds the most recently fetched menus.
#[derive(Debug, Clone, Default)]
pub struct MenuStore {
    records: Vec<MenuRecord>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<MenuRecord>) -> Self {
        let mut store = Self::new();
        store.replace(records);
        store
    }

    /// Fetch from `source` and replace the collection.
    ///
    /// On failure the previous collection is kept and the error is returned.
    pub async fn fetch(
        &mut self,
        source: &MenuSource,
        force_refresh: bool,
    ) -> Result<&[MenuRecord], AppError> {
        tracing::info!(
            "Fetching menus from {} (force={})",
            source.describe(),
            force_refresh
        );

        match source.load(force_refresh).await {
            Ok(records) => {
                self.replace(records);
                tracing::info!("Loaded {} menus", self.records.len());
                Ok(self.records.as_slice())
            }
            Err(err) => {
                tracing::warn!(
                    "Fetching menus failed, keeping {} cached menus: {}",
                    self.records.len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Replace the whole collection.
    pub fn replace(&mut self, records: Vec<MenuRecord>) {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                tracing::warn!("Duplicate menu id {}, first one wins", record.id);
            }
        }
        self.records = records;
    }

    /// Exact-match lookup by date key.
    pub fn lookup(&self, key: u32) -> Option<&MenuRecord> {
        self.records.iter().find(|record| record.id == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
