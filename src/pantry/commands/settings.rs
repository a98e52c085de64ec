use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::backend::StorageBackend;
use serde_json::{Map, Value};

pub fn show<B: StorageBackend>(registry: &Registry<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_settings(registry.settings()))
}

/// Partial update: keys not in `fields` keep their current value.
pub fn update<B: StorageBackend>(
    registry: &Registry<B>,
    fields: &Map<String, Value>,
) -> Result<CmdResult> {
    let settings = registry.update_settings(fields)?;

    let mut result = CmdResult::default();
    for key in fields.keys() {
        if let Some(value) = settings.get(key) {
            let shown = value.as_str().map(str::to_string).unwrap_or_else(|| value.to_string());
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }
    Ok(result.with_settings(settings))
}
