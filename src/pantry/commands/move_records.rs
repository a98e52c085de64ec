//! Moving a record from one collection to another.
//!
//! The record is taken out of the source (and the source saved) before it is added to
//! the target (and the target saved). There is no rollback: if the process dies in
//! between, the record is in neither file. The record keeps its fields but gets a new
//! id in the target.

use crate::commands::helpers::label;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CollectionName;
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    source: CollectionName,
    target: CollectionName,
    id: u64,
) -> Result<CmdResult> {
    let taken = registry.take(source, id)?;
    let moved = registry.add(target, taken.without_id());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Moved {} from {} ({}) to {} ({})",
        label(&moved),
        source,
        id,
        target,
        moved.id().unwrap_or_default()
    )));
    Ok(result.with_affected_records(vec![moved]))
}
