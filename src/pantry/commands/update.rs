use crate::commands::helpers::label;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CollectionName, Record};
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    collection: CollectionName,
    id: u64,
    fields: &Record,
) -> Result<CmdResult> {
    let record = registry.update(collection, id, fields)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Updated in {} ({}): {}",
        collection,
        id,
        label(&record)
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PantryError;
    use crate::model::Unit;
    use crate::test_utils::RegistryFixture;
    use serde_json::json;

    #[test]
    fn merges_only_given_fields() {
        let fixture =
            RegistryFixture::new().with_item(CollectionName::Inventory, "sugar", 1.0, Unit::Kilogram);
        let fields = Record::from_value(json!({"amount": 0.5})).unwrap();

        let result = run(&fixture.registry, CollectionName::Inventory, 1, &fields).unwrap();

        let updated = &result.affected_records[0];
        assert_eq!(updated.name(), Some("sugar"));
        assert_eq!(updated.get("amount"), Some(&json!(0.5)));
        assert_eq!(updated.get("unit"), Some(&json!("kg")));
    }

    #[test]
    fn missing_record_is_not_found() {
        let fixture = RegistryFixture::new();
        let err = run(&fixture.registry, CollectionName::Templates, 3, &Record::new()).unwrap_err();
        assert!(matches!(
            err,
            PantryError::NotFound {
                collection: CollectionName::Templates,
                id: 3
            }
        ));
    }
}
