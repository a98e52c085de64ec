//! # CLI Layer
//!
//! The only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves configuration and opens the API on the data directory
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{print_messages, print_record_detail, print_records, print_settings};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use pantry::api::PantryApi;
use pantry::config::PantryConfig;
use pantry::error::{PantryError, Result};
use pantry::model::{Record, Settings, Tab};
use pantry::store::fs_backend::FsBackend;
use serde_json::{Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: PantryApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PantryConfig::from_env(cli.data_dir.clone(), cli.verbose);
    init_logging(&config);

    let ctx = init_context(&config);

    match cli.command {
        Some(Commands::List { collection }) => handle_list(&ctx, &collection),
        Some(Commands::Get { collection, id }) => handle_get(&ctx, &collection, id),
        Some(Commands::Add { collection, fields }) => handle_add(&ctx, &collection, fields),
        Some(Commands::Update {
            collection,
            id,
            fields,
        }) => handle_update(&ctx, &collection, id, fields),
        Some(Commands::Delete { collection, id }) => handle_delete(&ctx, &collection, id),
        Some(Commands::Move { source, id, target }) => handle_move(&ctx, &source, id, &target),
        Some(Commands::Use { id }) => handle_use(&ctx, id),
        Some(Commands::Cook { id }) => handle_cook(&ctx, id),
        Some(Commands::Settings { key, value }) => handle_settings(&ctx, key, value),
        None => handle_default(&ctx),
    }
}

fn init_logging(config: &PantryConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(config: &PantryConfig) -> AppContext {
    debug!(data_path = %config.data_path.display(), "opening pantry");
    let api = PantryApi::open(FsBackend::new(&config.data_path));
    AppContext { api }
}

fn handle_list(ctx: &AppContext, collection: &str) -> Result<()> {
    let result = ctx.api.list_collection(collection)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

/// No command: list whatever tab the settings open on.
fn handle_default(ctx: &AppContext) -> Result<()> {
    let settings = ctx.api.get_settings()?.settings.unwrap_or_default();
    let collection = match settings.default_tab() {
        Tab::Shopping => "shopping_list",
        Tab::Inventory => "inventory",
        Tab::Recipes => "recipes",
        Tab::Templates => "templates",
    };
    handle_list(ctx, collection)
}

fn handle_get(ctx: &AppContext, collection: &str, id: u64) -> Result<()> {
    let result = ctx.api.get_record(collection, id)?;
    for record in &result.listed_records {
        print_record_detail(record);
    }
    Ok(())
}

fn handle_add(ctx: &AppContext, collection: &str, fields: FieldArgs) -> Result<()> {
    let record = build_record(fields)?;
    if record.is_empty() {
        return Err(PantryError::InvalidRecord(
            "nothing to add, give --name/--amount/--unit or --json".into(),
        ));
    }
    let result = ctx.api.add_record(collection, record)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &AppContext, collection: &str, id: u64, fields: FieldArgs) -> Result<()> {
    let fields = build_record(fields)?;
    let result = ctx.api.update_record(collection, id, &fields)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, collection: &str, id: u64) -> Result<()> {
    let result = ctx.api.delete_record(collection, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &AppContext, source: &str, id: u64, target: &str) -> Result<()> {
    let result = ctx.api.move_record(source, target, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_use(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.use_template(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cook(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.cook_recipe(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_settings(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let result = ctx.api.get_settings()?;
            print_settings(&result.settings.unwrap_or_default());
        }
        (Some(key), None) => {
            let result = ctx.api.get_settings()?;
            let settings = result.settings.unwrap_or_else(Settings::empty);
            match settings.get(&setting_key(&key)) {
                Some(Value::String(s)) => println!("{}", s),
                Some(other) => println!("{}", other),
                None => println!("Unknown setting: {}", key),
            }
        }
        (Some(key), Some(value)) => {
            let mut fields = Map::new();
            fields.insert(setting_key(&key), Value::String(value));
            let result = ctx.api.update_settings(&fields)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

/// `default-tab` on the command line, `default_tab` on disk.
fn setting_key(key: &str) -> String {
    key.replace('-', "_")
}

/// Start from `--json` (if any), then let the individual flags override.
fn build_record(fields: FieldArgs) -> Result<Record> {
    let mut record = match fields.json {
        Some(json) => Record::from_value(serde_json::from_str(&json)?)?,
        None => Record::new(),
    };
    if let Some(name) = fields.name {
        record.insert("name", name);
    }
    if let Some(amount) = fields.amount {
        record.insert("amount", amount);
    }
    if let Some(unit) = fields.unit {
        record.insert("unit", unit.as_str());
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry::model::Unit;
    use serde_json::json;

    #[test]
    fn flags_override_json_fields() {
        let fields = FieldArgs {
            name: Some("oat milk".into()),
            amount: None,
            unit: Some(Unit::Litre),
            json: Some(r#"{"name": "milk", "amount": 2}"#.into()),
        };
        let record = build_record(fields).unwrap();
        assert_eq!(record.name(), Some("oat milk"));
        assert_eq!(record.get("amount"), Some(&json!(2)));
        assert_eq!(record.get("unit"), Some(&json!("l")));
    }

    #[test]
    fn json_must_be_an_object() {
        let fields = FieldArgs {
            json: Some("[1]".into()),
            ..FieldArgs::default()
        };
        assert!(matches!(
            build_record(fields),
            Err(PantryError::InvalidRecord(_))
        ));
    }

    #[test]
    fn setting_keys_use_underscores() {
        assert_eq!(setting_key("default-tab"), "default_tab");
    }
}
