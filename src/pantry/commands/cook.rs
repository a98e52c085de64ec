//! Cooking a recipe deducts its ingredients from the inventory.
//!
//! Ingredients are matched to inventory items by name, ignoring case; the first match
//! wins. Ingredients with no match are skipped. Amounts may end up at or below zero and
//! are left that way. The inventory is saved once, after every ingredient has been
//! applied.

use crate::commands::helpers::{format_amount, label};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CollectionName, Record};
use crate::registry::Registry;
use crate::store::backend::StorageBackend;
use serde_json::{Number, Value};

#[derive(Debug)]
enum Outcome {
    Deducted {
        ingredient: String,
        item: Record,
    },
    Skipped {
        ingredient: String,
    },
}

struct Usage {
    name: String,
    amount: Value,
}

pub fn run<B: StorageBackend>(registry: &Registry<B>, recipe_id: u64) -> Result<CmdResult> {
    let recipe = registry.get(CollectionName::Recipes, recipe_id)?;
    let usages = ingredient_usages(&recipe);

    let outcomes = registry.modify(CollectionName::Inventory, |inventory| {
        usages
            .iter()
            .map(|usage| deduct(inventory, usage))
            .collect::<Vec<_>>()
    });

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Cooked {}", label(&recipe))));

    for outcome in outcomes {
        match outcome {
            Outcome::Deducted { ingredient, item } => {
                let remaining = item.get("amount").cloned().unwrap_or(Value::Null);
                let quantity = match item.get("unit").and_then(Value::as_str) {
                    Some(unit) => format!("{} {}", format_amount(&remaining), unit),
                    None => format_amount(&remaining),
                };
                if remaining.as_f64().is_some_and(|n| n <= 0.0) {
                    result.add_message(CmdMessage::warning(format!(
                        "{}: {} left (used up)",
                        ingredient, quantity
                    )));
                } else {
                    result.add_message(CmdMessage::info(format!(
                        "{}: {} left",
                        ingredient, quantity
                    )));
                }
                result.affected_records.push(item);
            }
            Outcome::Skipped { ingredient } => {
                result.add_message(CmdMessage::info(format!(
                    "{}: not in inventory, skipped",
                    ingredient
                )));
            }
        }
    }

    Ok(result)
}

/// Ingredients in stored order. Entries without a name or amount are ignored.
fn ingredient_usages(recipe: &Record) -> Vec<Usage> {
    recipe
        .get("ingredients")
        .and_then(Value::as_array)
        .map(|ingredients| {
            ingredients
                .iter()
                .filter_map(|entry| {
                    Some(Usage {
                        name: entry.get("name")?.as_str()?.to_string(),
                        amount: entry.get("amount")?.clone(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

fn deduct(inventory: &mut [Record], usage: &Usage) -> Outcome {
    let wanted = usage.name.to_lowercase();
    let item = inventory
        .iter_mut()
        .find(|item| item.name().is_some_and(|name| name.to_lowercase() == wanted));

    let Some(item) = item else {
        return Outcome::Skipped {
            ingredient: usage.name.clone(),
        };
    };

    let remaining = item
        .get("amount")
        .and_then(|have| subtract(have, &usage.amount));
    match remaining {
        Some(remaining) => {
            item.insert("amount", remaining);
            Outcome::Deducted {
                ingredient: usage.name.clone(),
                item: item.clone(),
            }
        }
        None => Outcome::Skipped {
            ingredient: usage.name.clone(),
        },
    }
}

/// Integer minus integer stays an integer; anything else is done in floating point.
fn subtract(have: &Value, used: &Value) -> Option<Value> {
    if let (Some(a), Some(b)) = (have.as_i64(), used.as_i64()) {
        if let Some(diff) = a.checked_sub(b) {
            return Some(Value::from(diff));
        }
    }
    let diff = have.as_f64()? - used.as_f64()?;
    Number::from_f64(diff).map(Value::Number)
}
