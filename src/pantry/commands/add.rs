use crate::commands::helpers::label;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CollectionName, Record};
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    collection: CollectionName,
    candidate: Record,
) -> Result<CmdResult> {
    let record = registry.add(collection, candidate);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added to {} ({}): {}",
        collection,
        record.id().unwrap_or_default(),
        label(&record)
    )));
    Ok(result.with_affected_records(vec![record]))
}
