use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::CollectionName;
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    collection: CollectionName,
    id: u64,
) -> Result<CmdResult> {
    let record = registry.get(collection, id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
