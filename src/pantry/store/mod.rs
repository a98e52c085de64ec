//! # Storage Layer
//!
//! Persistence is split in two, the same way for every collection:
//!
//! - [`backend::StorageBackend`]: raw I/O. Knows how to read and write a collection
//!   or the settings, and reports every failure as an error.
//! - [`PersistenceStore`]: decides what a failure means. Loads never fail (a missing,
//!   unreadable or corrupt file is an empty collection), and saves never fail either:
//!   a failed write is logged and the in-memory state stays authoritative until the
//!   next successful save.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one JSON file per collection
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, can simulate failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── shopping_list.json   # JSON array of records
//! ├── inventory.json
//! ├── templates.json
//! ├── recipes.json
//! └── settings.json        # JSON object
//! ```
//!
//! Files are independent. Nothing is atomic across two files.

use crate::error::PantryError;
use crate::model::{CollectionName, Record, Settings};
use backend::StorageBackend;
use tracing::{debug, error, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub struct PersistenceStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn load(&self, name: CollectionName) -> Vec<Record> {
        match self.backend.load_collection(name) {
            Ok(Some(records)) => {
                debug!(collection = %name, count = records.len(), "loaded collection");
                records
            }
            Ok(None) => {
                debug!(collection = %name, "no stored collection, starting empty");
                Vec::new()
            }
            Err(e) => {
                log_load_failure(name.as_str(), &e);
                Vec::new()
            }
        }
    }

    /// Absent or unreadable settings load as an empty mapping.
    pub fn load_settings(&self) -> Settings {
        match self.backend.load_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::empty(),
            Err(e) => {
                log_load_failure("settings", &e);
                Settings::empty()
            }
        }
    }

    /// Returns whether the write landed. A failure is logged, never raised.
    pub fn save(&self, name: CollectionName, records: &[Record]) -> bool {
        match self.backend.save_collection(name, records) {
            Ok(()) => {
                debug!(collection = %name, count = records.len(), "saved collection");
                true
            }
            Err(e) => {
                error!(collection = %name, error = %e, "failed to save collection, on-disk copy is stale");
                false
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> bool {
        match self.backend.save_settings(settings) {
            Ok(()) => {
                debug!("saved settings");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to save settings, on-disk copy is stale");
                false
            }
        }
    }
}

fn log_load_failure(what: &str, e: &PantryError) {
    match e {
        PantryError::Serialization(_) => {
            warn!(collection = what, error = %e, "stored data is not valid, starting empty")
        }
        _ => error!(collection = what, error = %e, "failed to read stored data, starting empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs_backend::FsBackend;
    use crate::store::mem_backend::MemBackend;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn record(value: serde_json::Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = PersistenceStore::new(FsBackend::new(dir.path()));
        assert!(store.load(CollectionName::Inventory).is_empty());
        assert!(store.load_settings().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("recipes.json"), "{ not json").unwrap();
        fs::write(dir.path().join("settings.json"), "[1, 2]").unwrap();
        let store = PersistenceStore::new(FsBackend::new(dir.path()));
        assert!(store.load(CollectionName::Recipes).is_empty());
        assert!(store.load_settings().is_empty());
    }

    #[test]
    fn read_error_loads_empty() {
        let backend = MemBackend::new().with_collection(
            CollectionName::Templates,
            vec![record(json!({"id": 1, "name": "milk"}))],
        );
        backend.set_simulate_read_error(true);
        let store = PersistenceStore::new(backend);
        assert!(store.load(CollectionName::Templates).is_empty());
    }

    #[test]
    fn failed_save_is_swallowed() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let store = PersistenceStore::new(backend);
        let saved = store.save(
            CollectionName::Inventory,
            &[record(json!({"id": 1, "name": "flour"}))],
        );
        assert!(!saved);
        assert!(store.backend().stored(CollectionName::Inventory).is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let records = vec![
            record(json!({"id": 2, "name": "Äpfel", "amount": 3, "unit": "st"})),
            record(json!({"id": 1, "name": "Mehl", "amount": 1.5, "unit": "kg"})),
        ];
        {
            let store = PersistenceStore::new(FsBackend::new(dir.path()));
            assert!(store.save(CollectionName::ShoppingList, &records));
        }
        let store = PersistenceStore::new(FsBackend::new(dir.path()));
        assert_eq!(store.load(CollectionName::ShoppingList), records);
    }
}
