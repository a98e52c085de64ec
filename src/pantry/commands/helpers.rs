use crate::model::Record;
use serde_json::Value;

/// Short human label for a record: its name, a recipe's title, or its id.
pub fn label(record: &Record) -> String {
    record
        .name()
        .or_else(|| record.get("title").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| match record.id() {
            Some(id) => format!("#{}", id),
            None => "(unnamed)".to_string(),
        })
}

/// Render an amount the way people write it: `800` rather than `800.0`.
pub fn format_amount(amount: &Value) -> String {
    match amount.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
        Some(n) => format!("{}", n),
        None => amount.to_string(),
    }
}
