use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CollectionName;
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(registry: &Registry<B>, collection: CollectionName) -> Result<CmdResult> {
    let records = registry.list(collection);
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info(format!("{} is empty.", collection)));
    }
    Ok(result.with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use crate::test_utils::RegistryFixture;

    #[test]
    fn lists_in_insertion_order() {
        let fixture = RegistryFixture::new()
            .with_item(CollectionName::Inventory, "rice", 500.0, Unit::Gram)
            .with_item(CollectionName::Inventory, "eggs", 6.0, Unit::Piece);

        let result = run(&fixture.registry, CollectionName::Inventory).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.name().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["rice", "eggs"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn listing_does_not_write() {
        let fixture = RegistryFixture::new();
        let result = run(&fixture.registry, CollectionName::Templates).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(fixture.backend().write_count(), 0);
    }
}
