//! # Category Registry
//!
//! Knows which [`Layer`] every category belongs to and how to display it.
//!
//! Layers are explicit: a category created through [`add_category`] records the
//! layer the user picked, and that tag is persisted alongside the wardrobe.
//! Wardrobes saved before layer tags existed carry no tags at all, so
//! [`infer_layer`] recovers a layer from the category id. It runs once, when a
//! legacy record is loaded, and the result is stored as an explicit tag from
//! then on.
//!
//! [`add_category`]: crate::commands::categories::add

use crate::model::{CategoryId, Layer};
use std::collections::BTreeMap;

/// The one-piece category shipped with the defaults. Never combined.
pub const ONE_PIECE_CATEGORY: &str = "dress";

/// A category shipped with the application.
#[derive(Debug, Clone)]
pub struct DefaultCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub layer: Layer,
    /// Sample items used when no saved wardrobe exists.
    pub seed: &'static [&'static str],
}

pub const DEFAULT_CATEGORIES: &[DefaultCategory] = &[
    DefaultCategory {
        id: "innerWear",
        name: "Inner top",
        layer: Layer::Inner,
        seed: &["Camisole", "White camisole"],
    },
    DefaultCategory {
        id: "shortSleeve",
        name: "Short sleeve",
        layer: Layer::Inner,
        seed: &["White scoop neck"],
    },
    DefaultCategory {
        id: "longSleeve",
        name: "Long sleeve",
        layer: Layer::Inner,
        seed: &["Polo"],
    },
    DefaultCategory {
        id: "thickLongSleeve",
        name: "Heavy long sleeve",
        layer: Layer::Inner,
        seed: &["Striped knit"],
    },
    DefaultCategory {
        id: "shirt",
        name: "Shirt",
        layer: Layer::Inner,
        seed: &["White oxford"],
    },
    DefaultCategory {
        id: "jacket",
        name: "Jacket",
        layer: Layer::Outer,
        seed: &["Denim"],
    },
    DefaultCategory {
        id: "thickJacket",
        name: "Heavy jacket",
        layer: Layer::Outer,
        seed: &["Charcoal coat"],
    },
    DefaultCategory {
        id: "pants",
        name: "Pants",
        layer: Layer::Bottom,
        seed: &["Olive cargo"],
    },
    DefaultCategory {
        id: "skirt",
        name: "Skirt",
        layer: Layer::Bottom,
        seed: &["Denim skirt"],
    },
    DefaultCategory {
        id: ONE_PIECE_CATEGORY,
        name: "Dress",
        layer: Layer::Special,
        seed: &["Black linen dress"],
    },
];

fn default_category(id: &str) -> Option<&'static DefaultCategory> {
    DEFAULT_CATEGORIES.iter().find(|c| c.id == id)
}

/// Legacy layer inference from a category id.
///
/// `dress` is special, anything mentioning a jacket is outer, anything
/// mentioning pants or a skirt is bottom, and everything else is inner.
/// Matching ignores case.
pub fn infer_layer(id: &str) -> Layer {
    if id == ONE_PIECE_CATEGORY {
        return Layer::Special;
    }
    let lowered = id.to_lowercase();
    if lowered.contains("jacket") {
        Layer::Outer
    } else if lowered.contains("pants") || lowered.contains("skirt") {
        Layer::Bottom
    } else {
        Layer::Inner
    }
}

/// Explicit per-category layer tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRegistry {
    layers: BTreeMap<CategoryId, Layer>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry tagging every default category with its shipped layer.
    pub fn builtin() -> Self {
        let layers = DEFAULT_CATEGORIES
            .iter()
            .map(|c| (c.id.to_string(), c.layer))
            .collect();
        Self { layers }
    }

    pub fn from_tags(layers: BTreeMap<CategoryId, Layer>) -> Self {
        Self { layers }
    }

    /// The explicit tags, as persisted.
    pub fn tags(&self) -> &BTreeMap<CategoryId, Layer> {
        &self.layers
    }

    /// Explicit tag first, then the legacy heuristic.
    pub fn layer_of(&self, id: &str) -> Layer {
        self.layers
            .get(id)
            .copied()
            .unwrap_or_else(|| infer_layer(id))
    }

    pub fn is_tagged(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }

    pub fn set_layer(&mut self, id: impl Into<CategoryId>, layer: Layer) {
        self.layers.insert(id.into(), layer);
    }

    pub fn remove(&mut self, id: &str) -> Option<Layer> {
        self.layers.remove(id)
    }

    /// Tags every listed category that has no explicit layer yet.
    ///
    /// Returns the ids that were migrated.
    pub fn migrate<'a, I>(&mut self, ids: I) -> Vec<CategoryId>
    where
        I: IntoIterator<Item = &'a CategoryId>,
    {
        let mut migrated = Vec::new();
        for id in ids {
            if !self.layers.contains_key(id) {
                self.layers.insert(id.clone(), infer_layer(id));
                migrated.push(id.clone());
            }
        }
        migrated
    }
}

/// Human readable name: the shipped name for defaults, the id otherwise.
pub fn display_name(id: &str) -> &str {
    default_category(id).map(|c| c.name).unwrap_or(id)
}

/// Shipped categories cannot be removed through the category-removal action.
pub fn is_protected(id: &str) -> bool {
    default_category(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ships_ten_categories() {
        assert_eq!(DEFAULT_CATEGORIES.len(), 10);
        assert_eq!(
            DEFAULT_CATEGORIES
                .iter()
                .filter(|c| c.layer == Layer::Special)
                .count(),
            1
        );
    }

    #[test]
    fn infers_layers_from_names() {
        assert_eq!(infer_layer("jacket"), Layer::Outer);
        assert_eq!(infer_layer("thickJacket"), Layer::Outer);
        assert_eq!(infer_layer("rainJacket"), Layer::Outer);
        assert_eq!(infer_layer("pants"), Layer::Bottom);
        assert_eq!(infer_layer("longSkirt"), Layer::Bottom);
        assert_eq!(infer_layer("dress"), Layer::Special);
        assert_eq!(infer_layer("hoodie"), Layer::Inner);
    }

    #[test]
    fn explicit_tag_wins_over_heuristic() {
        let mut registry = CategoryRegistry::new();
        registry.set_layer("jacketLiner", Layer::Inner);
        assert_eq!(registry.layer_of("jacketLiner"), Layer::Inner);
        assert_eq!(registry.layer_of("denimJacket"), Layer::Outer);
    }

    #[test]
    fn migrate_tags_only_untagged_categories() {
        let mut registry = CategoryRegistry::new();
        registry.set_layer("scarves", Layer::Outer);
        let ids = vec!["scarves".to_string(), "pants".to_string()];

        let migrated = registry.migrate(&ids);

        assert_eq!(migrated, vec!["pants".to_string()]);
        assert_eq!(registry.layer_of("scarves"), Layer::Outer);
        assert!(registry.is_tagged("pants"));
    }

    #[test]
    fn display_names_fall_back_to_id() {
        assert_eq!(display_name("thickJacket"), "Heavy jacket");
        assert_eq!(display_name("Scarves"), "Scarves");
        assert!(is_protected("dress"));
        assert!(!is_protected("Scarves"));
    }
}
