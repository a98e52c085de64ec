use crate::commands::helpers::label;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CollectionName;
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

/// Deleting an id that does not exist is not an error.
pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    collection: CollectionName,
    id: u64,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match registry.remove(collection, id) {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Deleted from {} ({}): {}",
                collection,
                id,
                label(&record)
            )));
            result.affected_records.push(record);
        }
        None => {
            result.add_message(CmdMessage::info(format!(
                "Nothing to delete: {} has no item {}",
                collection, id
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use crate::test_utils::RegistryFixture;

    #[test]
    fn removes_record() {
        let fixture = RegistryFixture::new()
            .with_item(CollectionName::ShoppingList, "milk", 1.0, Unit::Litre)
            .with_item(CollectionName::ShoppingList, "eggs", 10.0, Unit::Piece);

        let result = run(&fixture.registry, CollectionName::ShoppingList, 1).unwrap();

        assert_eq!(result.affected_records[0].name(), Some("milk"));
        let left = fixture.list(CollectionName::ShoppingList);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].name(), Some("eggs"));
    }

    #[test]
    fn missing_record_is_a_noop_that_still_saves() {
        let fixture =
            RegistryFixture::new().with_item(CollectionName::Inventory, "milk", 1.0, Unit::Litre);
        let writes = fixture.backend().write_count();

        let result = run(&fixture.registry, CollectionName::Inventory, 9).unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(fixture.list(CollectionName::Inventory).len(), 1);
        assert_eq!(fixture.backend().write_count(), writes + 1);
    }
}
