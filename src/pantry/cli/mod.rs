//! # CLI Behavior
//!
//! This is **one possible UI client** for pantry, not the application itself. It plays
//! the part a web front end would: turn user input into records and collection names,
//! call the API, show the result.
//!
//! - Collections are named as on the web routes: `shopping` (or `shopping_list`),
//!   `inventory`, `templates`, `recipes`.
//! - Items can be given with `--name/--amount/--unit`; anything else (recipes, extra
//!   fields) goes in as `--json`.
//! - Running `pantry` with no command lists the tab configured as `default_tab`.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: output formatting (tables, colors, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
