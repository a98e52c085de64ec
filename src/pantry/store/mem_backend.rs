use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use crate::model::{CollectionName, Record, Settings};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage backend for testing.
///
/// The registry owning the backend may be shared between threads, so all state sits
/// behind mutexes.
#[derive(Default)]
pub struct MemBackend {
    collections: Mutex<HashMap<CollectionName, Vec<Record>>>,
    settings: Mutex<Option<Settings>>,
    simulate_write_error: AtomicBool,
    simulate_read_error: AtomicBool,
    writes: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection as if it had been written by an earlier process.
    pub fn with_collection(self, name: CollectionName, records: Vec<Record>) -> Self {
        self.collections.lock().insert(name, records);
        self
    }

    pub fn with_settings(self, settings: Settings) -> Self {
        *self.settings.lock() = Some(settings);
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful writes so far, collections and settings combined.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// What is "on disk" for a collection right now.
    pub fn stored(&self, name: CollectionName) -> Option<Vec<Record>> {
        self.collections.lock().get(&name).cloned()
    }

    pub fn stored_settings(&self) -> Option<Settings> {
        self.settings.lock().clone()
    }

    fn check_read(&self) -> Result<()> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(PantryError::Store("Simulated read error".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(PantryError::Store("Simulated write error".to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_collection(&self, name: CollectionName) -> Result<Option<Vec<Record>>> {
        self.check_read()?;
        Ok(self.collections.lock().get(&name).cloned())
    }

    fn save_collection(&self, name: CollectionName, records: &[Record]) -> Result<()> {
        self.check_write()?;
        self.collections.lock().insert(name, records.to_vec());
        Ok(())
    }

    fn load_settings(&self) -> Result<Option<Settings>> {
        self.check_read()?;
        Ok(self.settings.lock().clone())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.check_write()?;
        *self.settings.lock() = Some(settings.clone());
        Ok(())
    }
}
