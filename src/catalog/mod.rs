//! Tool catalog: service cards plus the category id → label lookup.
//!
//! Cards arrive from `serviceCards.json` and labels from `categories.json`.
//! The matching engine only ever reads a [`Catalog`].

pub mod loader;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub use loader::{load_catalog, resolve_metadata_paths, MetadataPaths};

/// One entry of the tool catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolCard {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub detailed_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: String,
    #[serde(deserialize_with = "truthy")]
    pub offline_enabled: bool,
    #[serde(deserialize_with = "truthy")]
    pub auth_required: bool,
    /// Only an explicit `false` deactivates a card.
    #[serde(default = "default_active", deserialize_with = "unless_false")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Loose flag: non-zero numbers, non-empty strings, arrays and objects count
/// as set.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    })
}

fn unless_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(!matches!(Value::deserialize(deserializer)?, Value::Bool(false)))
}

/// Category id → human-readable label. Keys are trimmed and lower-cased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap(HashMap<String, String>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, label: &str) {
        self.0
            .insert(id.trim().to_lowercase(), label.trim().to_string());
    }

    pub fn label_for(&self, category_id: &str) -> Option<&str> {
        self.0
            .get(&category_id.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = CategoryMap::new();
        for (id, label) in iter {
            map.insert(id, label);
        }
        map
    }
}

/// Immutable snapshot handed to one scoring pass.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub cards: Vec<ToolCard>,
    pub categories: CategoryMap,
}

impl Catalog {
    pub fn new(cards: Vec<ToolCard>, categories: CategoryMap) -> Self {
        Self { cards, categories }
    }
}

#[cfg(test)]
mod tests;
