//! # Collection Registry
//!
//! The registry is the single owner of every collection and of the settings for the
//! lifetime of the process. Everything is loaded once in [`Registry::open`]; after that
//! reads are served from memory and every mutation writes the whole collection back
//! through the [`PersistenceStore`].
//!
//! ## Locking
//!
//! Each collection (and the settings) sits behind its own `RwLock`. A mutation holds
//! the write lock across both the in-memory edit and the save, so readers never see a
//! half-applied change. No method ever holds two collection locks at once, which is
//! what lets `move` and `cook` span collections without deadlocking.
//!
//! ## Ids
//!
//! Ids are `max(ids seen, 0) + 1`. "Seen" covers everything loaded or issued by this
//! process, so deleting the newest record does not hand its id out again.

use crate::error::{PantryError, Result};
use crate::model::{CollectionName, Record, Settings};
use crate::store::backend::StorageBackend;
use crate::store::PersistenceStore;
use parking_lot::RwLock;
use serde_json::{Map, Value};

#[derive(Debug, Default)]
struct Collection {
    records: Vec<Record>,
    last_id: u64,
}

impl Collection {
    fn loaded(records: Vec<Record>) -> Self {
        let last_id = max_id(&records);
        Self { records, last_id }
    }

    fn next_id(&mut self) -> u64 {
        self.last_id = self.last_id.max(max_id(&self.records)) + 1;
        self.last_id
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.id() == Some(id))
    }
}

fn max_id(records: &[Record]) -> u64 {
    records.iter().filter_map(Record::id).max().unwrap_or(0)
}

pub struct Registry<B: StorageBackend> {
    store: PersistenceStore<B>,
    shopping_list: RwLock<Collection>,
    inventory: RwLock<Collection>,
    templates: RwLock<Collection>,
    recipes: RwLock<Collection>,
    settings: RwLock<Settings>,
}

impl<B: StorageBackend> Registry<B> {
    /// Load every collection and the settings from `backend`. Never fails: whatever
    /// cannot be loaded starts out empty.
    pub fn open(backend: B) -> Self {
        let store = PersistenceStore::new(backend);
        let load = |name| RwLock::new(Collection::loaded(store.load(name)));

        let shopping_list = load(CollectionName::ShoppingList);
        let inventory = load(CollectionName::Inventory);
        let templates = load(CollectionName::Templates);
        let recipes = load(CollectionName::Recipes);

        let mut settings = store.load_settings();
        if settings.is_empty() {
            settings = Settings::default();
        }

        Self {
            store,
            shopping_list,
            inventory,
            templates,
            recipes,
            settings: RwLock::new(settings),
        }
    }

    pub fn store(&self) -> &PersistenceStore<B> {
        &self.store
    }

    fn slot(&self, name: CollectionName) -> &RwLock<Collection> {
        match name {
            CollectionName::ShoppingList => &self.shopping_list,
            CollectionName::Inventory => &self.inventory,
            CollectionName::Templates => &self.templates,
            CollectionName::Recipes => &self.recipes,
        }
    }

    /// Snapshot of a collection in insertion order.
    pub fn list(&self, name: CollectionName) -> Vec<Record> {
        self.slot(name).read().records.clone()
    }

    pub fn get(&self, name: CollectionName, id: u64) -> Result<Record> {
        let collection = self.slot(name).read();
        collection
            .position(id)
            .map(|pos| collection.records[pos].clone())
            .ok_or(PantryError::NotFound {
                collection: name,
                id,
            })
    }

    /// Append `candidate` under a fresh id and persist. Any id on the candidate is replaced.
    pub fn add(&self, name: CollectionName, candidate: Record) -> Record {
        let mut collection = self.slot(name).write();
        let id = collection.next_id();
        let record = candidate.with_id(id);
        collection.records.push(record.clone());
        self.store.save(name, &collection.records);
        record
    }

    /// Merge `fields` into the record with `id` and persist. Nothing is written when
    /// the record does not exist.
    pub fn update(&self, name: CollectionName, id: u64, fields: &Record) -> Result<Record> {
        let mut collection = self.slot(name).write();
        let pos = collection.position(id).ok_or(PantryError::NotFound {
            collection: name,
            id,
        })?;
        let record = &mut collection.records[pos];
        record.merge(fields);
        let updated = record.clone();
        self.store.save(name, &collection.records);
        Ok(updated)
    }

    /// Drop every record with `id`, then persist whether or not anything was removed.
    pub fn remove(&self, name: CollectionName, id: u64) -> Option<Record> {
        let mut collection = self.slot(name).write();
        let (removed, kept): (Vec<Record>, Vec<Record>) = collection
            .records
            .drain(..)
            .partition(|r| r.id() == Some(id));
        collection.records = kept;
        self.store.save(name, &collection.records);
        removed.into_iter().next()
    }

    /// Like [`Registry::remove`], but a missing record is `NotFound` and causes no write.
    pub fn take(&self, name: CollectionName, id: u64) -> Result<Record> {
        let mut collection = self.slot(name).write();
        let pos = collection.position(id).ok_or(PantryError::NotFound {
            collection: name,
            id,
        })?;
        let record = collection.records.remove(pos);
        self.store.save(name, &collection.records);
        Ok(record)
    }

    /// Run `f` over the records of a collection under its write lock, then persist once.
    pub fn modify<T>(&self, name: CollectionName, f: impl FnOnce(&mut [Record]) -> T) -> T {
        let mut collection = self.slot(name).write();
        let out = f(collection.records.as_mut_slice());
        self.store.save(name, &collection.records);
        out
    }

    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Validate and merge `fields` into the settings, then persist.
    pub fn update_settings(&self, fields: &Map<String, Value>) -> Result<Settings> {
        let mut settings = self.settings.write();
        settings.merge(fields)?;
        self.store.save_settings(&settings);
        Ok(settings.clone())
    }
}
