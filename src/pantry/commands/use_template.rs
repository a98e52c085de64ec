use crate::commands::helpers::label;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CollectionName, Record};
use crate::registry::Registry;
use crate::store::backend::StorageBackend;

const COPIED_FIELDS: [&str; 3] = ["name", "amount", "unit"];

/// Put a copy of a template on the shopping list. The template itself is left alone.
pub fn run<B: StorageBackend>(registry: &Registry<B>, template_id: u64) -> Result<CmdResult> {
    let template = registry.get(CollectionName::Templates, template_id)?;

    let mut candidate = Record::new();
    for field in COPIED_FIELDS {
        if let Some(value) = template.get(field) {
            candidate.insert(field, value.clone());
        }
    }
    let added = registry.add(CollectionName::ShoppingList, candidate);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added to shopping_list ({}): {}",
        added.id().unwrap_or_default(),
        label(&added)
    )));
    Ok(result.with_affected_records(vec![added]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PantryError;
    use crate::model::Unit;
    use crate::test_utils::RegistryFixture;
    use serde_json::json;

    #[test]
    fn copies_template_to_shopping_list() {
        let fixture = RegistryFixture::new()
            .with_item(CollectionName::ShoppingList, "bread", 1.0, Unit::Piece)
            .with_item(CollectionName::Templates, "Wasser", 2.0, Unit::Crate);
        let templates_before = fixture.list(CollectionName::Templates);

        let result = run(&fixture.registry, 1).unwrap();

        let added = &result.affected_records[0];
        assert_eq!(added.id(), Some(2));
        assert_eq!(added.name(), Some("Wasser"));
        assert_eq!(added.get("unit"), Some(&json!("Kiste")));
        assert_eq!(fixture.list(CollectionName::ShoppingList).len(), 2);
        assert_eq!(fixture.list(CollectionName::Templates), templates_before);
    }

    #[test]
    fn only_item_fields_are_copied() {
        let fixture = RegistryFixture::new();
        fixture.registry.add(
            CollectionName::Templates,
            Record::from_value(json!({"name": "milk", "amount": 1, "unit": "l", "note": "weekly"}))
                .unwrap(),
        );

        let result = run(&fixture.registry, 1).unwrap();

        let keys: Vec<_> = result.affected_records[0].fields().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name", "amount", "unit"]);
    }

    #[test]
    fn missing_template_is_not_found() {
        let fixture = RegistryFixture::new();
        let err = run(&fixture.registry, 1).unwrap_err();
        assert!(matches!(
            err,
            PantryError::NotFound {
                collection: CollectionName::Templates,
                ..
            }
        ));
        assert!(fixture.list(CollectionName::ShoppingList).is_empty());
    }
}
