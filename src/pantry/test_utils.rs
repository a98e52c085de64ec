//! Fixtures shared by the command tests (and by downstream crates with `test_utils`).

use crate::model::{CollectionName, Ingredient, Item, Recipe, Record, Unit};
use crate::registry::Registry;
use crate::store::mem_backend::MemBackend;

pub struct RegistryFixture {
    pub registry: Registry<MemBackend>,
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryFixture {
    pub fn new() -> Self {
        Self {
            registry: Registry::open(MemBackend::new()),
        }
    }

    pub fn with_item(self, collection: CollectionName, name: &str, amount: f64, unit: Unit) -> Self {
        let record = Record::from_shape(&Item::new(name, amount, unit)).unwrap();
        self.registry.add(collection, record);
        self
    }

    pub fn with_recipe(self, title: &str, ingredients: &[(&str, f64, Unit)]) -> Self {
        let recipe = Recipe {
            title: title.to_string(),
            description: String::new(),
            servings: 2,
            ingredients: ingredients
                .iter()
                .map(|(name, amount, unit)| Ingredient {
                    name: name.to_string(),
                    amount: *amount,
                    unit: *unit,
                })
                .collect(),
            is_custom: true,
        };
        self.registry
            .add(CollectionName::Recipes, Record::from_shape(&recipe).unwrap());
        self
    }

    pub fn backend(&self) -> &MemBackend {
        self.registry.store().backend()
    }

    pub fn list(&self, collection: CollectionName) -> Vec<Record> {
        self.registry.list(collection)
    }
}
