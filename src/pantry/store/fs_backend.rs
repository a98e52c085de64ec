use super::backend::StorageBackend;
use crate::error::{PantryError, Result};
use crate::model::{CollectionName, Record, Settings};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SETTINGS_FILENAME: &str = "settings.json";

/// One pretty-printed JSON file per collection, all inside `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, name: CollectionName) -> PathBuf {
        self.root.join(name.file_name())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PantryError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PantryError::Io)?;
        let data = serde_json::from_str(&content).map_err(PantryError::Serialization)?;
        Ok(Some(data))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(data).map_err(PantryError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".pantry-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(PantryError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PantryError::Io(e));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_collection(&self, name: CollectionName) -> Result<Option<Vec<Record>>> {
        self.read_json(&self.collection_path(name))
    }

    fn save_collection(&self, name: CollectionName, records: &[Record]) -> Result<()> {
        self.write_json(&self.collection_path(name), records)
    }

    fn load_settings(&self) -> Result<Option<Settings>> {
        self.read_json(&self.settings_path())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_json(&self.settings_path(), settings)
    }
}
