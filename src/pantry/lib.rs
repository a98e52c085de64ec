//! # Pantry Architecture
//!
//! Pantry keeps a household's kitchen lists (shopping list, inventory, item templates
//! and recipes) in plain JSON files. It is a **UI-agnostic library** with a small CLI
//! on top; a web server would sit on [`api::PantryApi`] exactly the way the CLI does.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses collection names                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / update / delete / list, move, use, cook, settings  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - In-memory collections, one lock each, write-through      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - PersistenceStore: lenient load, logged-and-swallowed save│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Durability
//!
//! Memory is authoritative. Every mutation rewrites the affected collection's file,
//! but a failed write is only logged: the operation still succeeds and the file
//! catches up on the next successful save. `move` and `cook` span more than one step
//! and have no rollback; see their modules for what a crash mid-way leaves behind.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: one module per operation
//! - [`registry`]: the in-memory collections and settings
//! - [`store`]: storage backends and the persistence policy
//! - [`model`]: records, collection names, settings and typed item/recipe shapes
//! - [`config`]: data directory and log filter resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
