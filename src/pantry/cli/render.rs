use colored::Colorize;
use pantry::api::{CmdMessage, MessageLevel};
use pantry::commands::helpers::{format_amount, label};
use pantry::model::{Record, Settings};
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per record: id, name (or title) and quantity.
pub(super) fn print_records(records: &[Record]) {
    let id_width = records
        .iter()
        .filter_map(Record::id)
        .map(|id| id.to_string().len())
        .max()
        .unwrap_or(1);

    for record in records {
        let id = record.id().map(|id| id.to_string()).unwrap_or_default();
        let idx = format!("{:>width$}. ", id, width = id_width);

        let name = truncate_to_width(&label(record), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());

        println!(
            "  {}{}{}  {}",
            idx.yellow(),
            name,
            " ".repeat(padding),
            summary(record).dimmed()
        );
    }
}

/// Full record as indented JSON, the same way it sits on disk.
pub(super) fn print_record_detail(record: &Record) {
    match serde_json::to_string_pretty(record) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", label(record)),
    }
}

pub(super) fn print_settings(settings: &Settings) {
    for (key, value) in settings.fields() {
        let shown = value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string());
        println!("{} = {}", key.replace('_', "-"), shown);
    }
}

fn summary(record: &Record) -> String {
    if let Some(ingredients) = record.get("ingredients").and_then(Value::as_array) {
        let servings = record
            .get("servings")
            .map(format_amount)
            .unwrap_or_else(|| "?".to_string());
        return format!("{} servings, {} ingredients", servings, ingredients.len());
    }

    let amount = record.get("amount").map(format_amount);
    let unit = record.get("unit").and_then(Value::as_str);
    match (amount, unit) {
        (Some(amount), Some(unit)) => format!("{} {}", amount, unit),
        (Some(amount), None) => amount,
        (None, Some(unit)) => unit.to_string(),
        (None, None) => String::new(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
