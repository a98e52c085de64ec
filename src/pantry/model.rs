//! # Data Model
//!
//! The store itself only knows about [`Record`]s: ordered JSON objects that carry an
//! integer `id` and whatever other fields the caller put in them. Everything else in
//! this module is a typed view on top of that.
//!
//! - [`CollectionName`]: the closed set of collections, one backing file each
//! - [`Record`]: an opaque entry in a collection
//! - [`Settings`]: the single, non-collection configuration mapping
//! - [`Item`], [`Recipe`], [`Ingredient`], [`Unit`]: the shapes callers build records from
//!
//! Typed shapes convert to and from records through serde, so the store never has to
//! care which collection holds which shape.

use crate::error::{PantryError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    ShoppingList,
    Inventory,
    Templates,
    Recipes,
}

impl CollectionName {
    pub const ALL: [CollectionName; 4] = [
        CollectionName::ShoppingList,
        CollectionName::Inventory,
        CollectionName::Templates,
        CollectionName::Recipes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::ShoppingList => "shopping_list",
            CollectionName::Inventory => "inventory",
            CollectionName::Templates => "templates",
            CollectionName::Recipes => "recipes",
        }
    }

    /// Name of the backing file inside the data directory.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionName {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "shopping" is the short name the web routes use
            "shopping_list" | "shopping" => Ok(CollectionName::ShoppingList),
            "inventory" => Ok(CollectionName::Inventory),
            "templates" => Ok(CollectionName::Templates),
            "recipes" => Ok(CollectionName::Recipes),
            other => Err(PantryError::InvalidCollection(other.to_string())),
        }
    }
}

/// A single entry of a collection.
///
/// Records are JSON objects. The only field the store interprets is `id`, which is
/// assigned on insert and never changed afterwards. Field order is kept as inserted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; anything but an object is rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(PantryError::InvalidRecord(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn from_shape<T: Serialize>(shape: &T) -> Result<Self> {
        Self::from_value(serde_json::to_value(shape)?)
    }

    pub fn to_shape<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| PantryError::InvalidRecord(e.to_string()))
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// Returns the record with `id` as its first field, replacing any previous id.
    pub fn with_id(self, id: u64) -> Self {
        let mut map = Map::with_capacity(self.0.len() + 1);
        map.insert("id".to_string(), Value::from(id));
        for (key, value) in self.0 {
            if key != "id" {
                map.insert(key, value);
            }
        }
        Self(map)
    }

    pub fn without_id(&self) -> Self {
        let mut map = self.0.clone();
        map.remove("id");
        Self(map)
    }

    /// Shallow merge of `fields` into this record. `id` is never overwritten.
    pub fn merge(&mut self, fields: &Record) {
        for (key, value) in &fields.0 {
            if key == "id" {
                continue;
            }
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tabs the UI can open on start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Shopping,
    Inventory,
    Recipes,
    Templates,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Shopping => "shopping",
            Tab::Inventory => "inventory",
            Tab::Recipes => "recipes",
            Tab::Templates => "templates",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shopping" => Ok(Tab::Shopping),
            "inventory" => Ok(Tab::Inventory),
            "recipes" => Ok(Tab::Recipes),
            "templates" => Ok(Tab::Templates),
            other => Err(PantryError::InvalidSetting {
                key: Settings::DEFAULT_TAB.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// The settings mapping, stored in `settings.json`.
///
/// Only `default_tab` is recognised; other keys are kept as they are so that a newer
/// client can store its own preferences without this version dropping them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(Map<String, Value>);

impl Default for Settings {
    fn default() -> Self {
        let mut map = Map::new();
        map.insert(
            Self::DEFAULT_TAB.to_string(),
            Value::from(Tab::default().as_str()),
        );
        Self(map)
    }
}

impl Settings {
    pub const DEFAULT_TAB: &'static str = "default_tab";

    /// A mapping with no keys at all; what a corrupt settings file loads as.
    pub fn empty() -> Self {
        Self(Map::new())
    }

    pub fn default_tab(&self) -> Tab {
        self.0
            .get(Self::DEFAULT_TAB)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validates `fields`, then merges them in. Nothing is changed on error.
    pub fn merge(&mut self, fields: &Map<String, Value>) -> Result<()> {
        if let Some(value) = fields.get(Self::DEFAULT_TAB) {
            let tab = value.as_str().and_then(|s| s.parse::<Tab>().ok());
            if tab.is_none() {
                return Err(PantryError::InvalidSetting {
                    key: Self::DEFAULT_TAB.to_string(),
                    value: value.to_string(),
                });
            }
        }
        for (key, value) in fields {
            self.0.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "st")]
    Piece,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "l")]
    Litre,
    #[serde(rename = "ml")]
    Millilitre,
    #[serde(rename = "Kiste")]
    Crate,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Piece,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Litre,
        Unit::Millilitre,
        Unit::Crate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Piece => "st",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Litre => "l",
            Unit::Millilitre => "ml",
            Unit::Crate => "Kiste",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = PantryError;

    fn from_str(s: &str) -> Result<Self> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| PantryError::InvalidRecord(format!("unknown unit: {}", s)))
    }
}

/// Shopping list, inventory and template entries all share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

impl Item {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default = "default_is_custom")]
    pub is_custom: bool,
}

fn default_is_custom() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collection_names_parse_with_route_alias() {
        assert_eq!(
            "shopping".parse::<CollectionName>().unwrap(),
            CollectionName::ShoppingList
        );
        assert_eq!(
            "shopping_list".parse::<CollectionName>().unwrap(),
            CollectionName::ShoppingList
        );
        assert!(matches!(
            "bogus".parse::<CollectionName>(),
            Err(PantryError::InvalidCollection(name)) if name == "bogus"
        ));
    }

    #[test]
    fn with_id_puts_id_first_and_replaces_old_one() {
        let record = Record::from_value(json!({"name": "milk", "id": 9})).unwrap();
        let record = record.with_id(3);
        let keys: Vec<_> = record.fields().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name"]);
        assert_eq!(record.id(), Some(3));
    }

    #[test]
    fn merge_keeps_id() {
        let mut record = Record::from_value(json!({"id": 1, "name": "milk"})).unwrap();
        let fields = Record::from_value(json!({"id": 42, "amount": 2})).unwrap();
        record.merge(&fields);
        assert_eq!(record.id(), Some(1));
        assert_eq!(record.get("amount"), Some(&json!(2)));
        assert_eq!(record.name(), Some("milk"));
    }

    #[test]
    fn rejects_non_object_records() {
        assert!(Record::from_value(json!([1, 2])).is_err());
    }

    #[test]
    fn unit_serializes_to_short_names() {
        let item = Item::new("Wasser", 1.0, Unit::Crate);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"name": "Wasser", "amount": 1.0, "unit": "Kiste"}));
        assert_eq!("ml".parse::<Unit>().unwrap(), Unit::Millilitre);
        assert!("cup".parse::<Unit>().is_err());
    }

    #[test]
    fn recipe_defaults_optional_fields() {
        let record = Record::from_value(json!({
            "title": "Pancakes",
            "servings": 2,
            "ingredients": [{"name": "flour", "amount": 200, "unit": "g"}]
        }))
        .unwrap();
        let recipe: Recipe = record.to_shape().unwrap();
        assert_eq!(recipe.description, "");
        assert!(recipe.is_custom);
        assert_eq!(recipe.ingredients[0].unit, Unit::Gram);
    }

    #[test]
    fn settings_default_to_shopping_tab() {
        assert_eq!(Settings::default().default_tab(), Tab::Shopping);
        assert_eq!(Settings::empty().default_tab(), Tab::Shopping);
    }

    #[test]
    fn settings_merge_rejects_unknown_tab() {
        let mut settings = Settings::default();
        let fields = json!({"default_tab": "garage", "theme": "dark"});
        let err = settings.merge(fields.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, PantryError::InvalidSetting { .. }));
        // nothing applied
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn settings_merge_is_partial() {
        let mut settings = Settings::default();
        settings
            .merge(json!({"theme": "dark"}).as_object().unwrap())
            .unwrap();
        settings
            .merge(json!({"default_tab": "recipes"}).as_object().unwrap())
            .unwrap();
        assert_eq!(settings.default_tab(), Tab::Recipes);
        assert_eq!(settings.get("theme"), Some(&json!("dark")));
    }
}
