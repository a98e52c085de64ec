//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every pantry operation, whichever client is calling (the bundled CLI, a
//! web server, a test).
//!
//! The facade:
//! - **Normalizes inputs**: collection names arrive as strings and are parsed into
//!   [`CollectionName`] here, so an unknown name is `InvalidCollection` everywhere
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`), never formatted text
//!
//! ## Generic Over StorageBackend
//!
//! `PantryApi<B: StorageBackend>` owns the [`Registry`]:
//! - Production: `PantryApi<FsBackend>`
//! - Testing: `PantryApi<MemBackend>`
//!
//! All methods take `&self`; the registry does its own locking, so one API value can
//! be shared between threads behind an `Arc`.

use crate::commands;
use crate::error::Result;
use crate::model::{CollectionName, Record};
use crate::registry::Registry;
use crate::store::backend::StorageBackend;
use serde_json::{Map, Value};

pub struct PantryApi<B: StorageBackend> {
    registry: Registry<B>,
}

impl<B: StorageBackend> PantryApi<B> {
    /// Load all collections from `backend`.
    pub fn open(backend: B) -> Self {
        Self {
            registry: Registry::open(backend),
        }
    }

    pub fn registry(&self) -> &Registry<B> {
        &self.registry
    }

    pub fn list_collection(&self, name: &str) -> Result<CmdResult> {
        commands::list::run(&self.registry, parse_collection(name)?)
    }

    pub fn get_record(&self, name: &str, id: u64) -> Result<CmdResult> {
        commands::get::run(&self.registry, parse_collection(name)?, id)
    }

    pub fn add_record(&self, name: &str, record: Record) -> Result<CmdResult> {
        commands::add::run(&self.registry, parse_collection(name)?, record)
    }

    pub fn update_record(&self, name: &str, id: u64, fields: &Record) -> Result<CmdResult> {
        commands::update::run(&self.registry, parse_collection(name)?, id, fields)
    }

    pub fn delete_record(&self, name: &str, id: u64) -> Result<CmdResult> {
        commands::delete::run(&self.registry, parse_collection(name)?, id)
    }

    pub fn move_record(&self, source: &str, target: &str, id: u64) -> Result<CmdResult> {
        // both names are checked before anything is touched
        let source = parse_collection(source)?;
        let target = parse_collection(target)?;
        commands::move_records::run(&self.registry, source, target, id)
    }

    pub fn use_template(&self, id: u64) -> Result<CmdResult> {
        commands::use_template::run(&self.registry, id)
    }

    pub fn cook_recipe(&self, id: u64) -> Result<CmdResult> {
        commands::cook::run(&self.registry, id)
    }

    pub fn get_settings(&self) -> Result<CmdResult> {
        commands::settings::show(&self.registry)
    }

    pub fn update_settings(&self, fields: &Map<String, Value>) -> Result<CmdResult> {
        commands::settings::update(&self.registry, fields)
    }
}

fn parse_collection(name: &str) -> Result<CollectionName> {
    name.parse()
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
