//! # Storage Layer
//!
//! The wardrobe is persisted as a single record: the items of every category,
//! the display order of categories, and the explicit layer tag of each
//! category. Layer selections are deliberately absent; they are rebuilt on
//! load.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `wardrobe.json` in the data
//!   directory
//! - [`memory::InMemoryStore`]: keeps the serialized record in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── wardrobe.json   # { "wardrobe": {..}, "categoryOrder": [..], "categoryLayers": {..} }
//! └── config.json     # WardrobeConfig
//! ```
//!
//! Records written before layer tags existed have no `categoryLayers`; those
//! load fine and are migrated by the registry heuristic. The oldest records
//! also lack `categoryOrder`, in which case the key order of the `wardrobe`
//! object is the display order.

use crate::error::{Result, WardrobeError};
use crate::model::{CategoryId, Layer};
use crate::registry::CategoryRegistry;
use crate::wardrobe::Wardrobe;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod fs;
pub mod memory;

/// The persisted shape of a wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeRecord {
    pub wardrobe: BTreeMap<CategoryId, Vec<String>>,
    #[serde(default)]
    pub category_order: Vec<CategoryId>,
    #[serde(default)]
    pub category_layers: BTreeMap<CategoryId, Layer>,
}

impl WardrobeRecord {
    /// Parses a saved record.
    ///
    /// Without `categoryOrder`, categories keep the order their keys appear
    /// in the `wardrobe` object.
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut value: serde_json::Value =
            serde_json::from_str(raw).map_err(WardrobeError::Serialization)?;
        if let Some(record) = value.as_object_mut() {
            if !record.contains_key("categoryOrder") {
                let order: Vec<serde_json::Value> = record
                    .get("wardrobe")
                    .and_then(serde_json::Value::as_object)
                    .map(|items| {
                        items
                            .keys()
                            .map(|id| serde_json::Value::String(id.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                record.insert("categoryOrder".to_string(), serde_json::Value::Array(order));
            }
        }
        serde_json::from_value(value).map_err(WardrobeError::Serialization)
    }

    pub fn from_state(wardrobe: &Wardrobe, registry: &CategoryRegistry) -> Self {
        Self {
            wardrobe: wardrobe.items_by_category().clone(),
            category_order: wardrobe.category_order().to_vec(),
            category_layers: registry.tags().clone(),
        }
    }

    /// Rebuilds the wardrobe and registry.
    ///
    /// Tags for categories no longer in the wardrobe are dropped; categories
    /// without a tag are migrated with the legacy heuristic and returned.
    pub fn into_state(self) -> (Wardrobe, CategoryRegistry, Vec<CategoryId>) {
        let wardrobe = Wardrobe::from_parts(self.wardrobe, self.category_order);
        let tags = self
            .category_layers
            .into_iter()
            .filter(|(id, _)| wardrobe.contains_category(id))
            .collect();
        let mut registry = CategoryRegistry::from_tags(tags);
        let migrated = registry.migrate(wardrobe.category_order());
        (wardrobe, registry, migrated)
    }
}

/// Abstract interface for wardrobe persistence.
pub trait DataStore {
    /// The saved record, or `None` when nothing has been saved yet.
    ///
    /// A record that exists but cannot be parsed is an error.
    fn load(&self) -> Result<Option<WardrobeRecord>>;

    /// Replace the saved record.
    fn save(&mut self, record: &WardrobeRecord) -> Result<()>;
}
