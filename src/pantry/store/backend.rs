use crate::error::Result;
use crate::model::{CollectionName, Record, Settings};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`super::PersistenceStore`] decides what a failure means for the caller.
pub trait StorageBackend: Send + Sync {
    /// Load every record of a collection.
    /// Returns Ok(None) if nothing has been stored yet.
    fn load_collection(&self, name: CollectionName) -> Result<Option<Vec<Record>>>;

    /// Replace the stored collection with `records`.
    /// MUST NOT leave a partially written collection behind.
    fn save_collection(&self, name: CollectionName, records: &[Record]) -> Result<()>;

    /// Load the settings mapping. Ok(None) if nothing has been stored yet.
    fn load_settings(&self) -> Result<Option<Settings>>;

    fn save_settings(&self, settings: &Settings) -> Result<()>;
}
