use clap::{Args, Parser, Subcommand};
use pantry::model::Unit;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pantry", bin_name = "pantry", version)]
#[command(about = "Shopping list, inventory, templates and recipes for your kitchen", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data files (defaults to $DATA_PATH)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a collection
    #[command(alias = "ls")]
    List {
        /// shopping, inventory, templates or recipes
        collection: String,
    },

    /// Show one record in full
    Get { collection: String, id: u64 },

    /// Add a record
    #[command(alias = "a")]
    Add {
        collection: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Change fields of a record; fields not given are kept
    #[command(alias = "up")]
    Update {
        collection: String,
        id: u64,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    #[command(alias = "rm")]
    Delete { collection: String, id: u64 },

    /// Move a record to another collection (e.g. bought: shopping -> inventory)
    #[command(alias = "mv")]
    Move {
        source: String,
        id: u64,
        target: String,
    },

    /// Put a copy of a template on the shopping list
    Use {
        /// Template id
        id: u64,
    },

    /// Deduct a recipe's ingredients from the inventory
    Cook {
        /// Recipe id
        id: u64,
    },

    /// Show or change settings
    Settings {
        /// Setting name (e.g. default-tab)
        key: Option<String>,

        /// New value (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Item name
    #[arg(long)]
    pub name: Option<String>,

    /// Quantity
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// One of st, g, kg, l, ml, Kiste
    #[arg(long)]
    pub unit: Option<Unit>,

    /// Raw JSON object; flags above override its fields
    #[arg(long, value_name = "JSON")]
    pub json: Option<String>,
}
