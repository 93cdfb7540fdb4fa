//! # Layer Selection Model
//!
//! For each combinable layer, an ordered mapping from category to [`Selection`].
//! Every non-special category of the wardrobe sits in exactly one of the three
//! mappings; the generator walks them in insertion order.
//!
//! Selections are never persisted. They are rebuilt from the wardrobe and the
//! [`CategoryRegistry`] each time the wardrobe is loaded, with every category
//! starting at [`Selection::Any`].

use crate::model::{CategoryId, Layer, Selection};
use crate::registry::CategoryRegistry;
use crate::wardrobe::Wardrobe;

/// Insertion-ordered `category -> selection` entries for one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerMap {
    entries: Vec<(CategoryId, Selection)>,
}

impl LayerMap {
    pub fn get(&self, category: &str) -> Option<&Selection> {
        self.entries
            .iter()
            .find(|(id, _)| id == category)
            .map(|(_, selection)| selection)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &Selection)> {
        self.entries.iter().map(|(id, selection)| (id, selection))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, category: CategoryId, selection: Selection) {
        self.entries.push((category, selection));
    }

    fn replace(&mut self, category: &str, selection: Selection) -> bool {
        match self.entries.iter_mut().find(|(id, _)| id == category) {
            Some(entry) => {
                entry.1 = selection;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, category: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| id != category);
        before != self.entries.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSelection {
    outer: LayerMap,
    inner: LayerMap,
    bottom: LayerMap,
}

impl LayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every non-special category of the wardrobe at `Any`, in display order.
    pub fn from_wardrobe(wardrobe: &Wardrobe, registry: &CategoryRegistry) -> Self {
        let mut selections = Self::new();
        selections.reconcile(wardrobe, registry);
        selections
    }

    /// The mapping for a layer. `Special` has none.
    pub fn layer(&self, layer: Layer) -> Option<&LayerMap> {
        match layer {
            Layer::Outer => Some(&self.outer),
            Layer::Inner => Some(&self.inner),
            Layer::Bottom => Some(&self.bottom),
            Layer::Special => None,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> Option<&mut LayerMap> {
        match layer {
            Layer::Outer => Some(&mut self.outer),
            Layer::Inner => Some(&mut self.inner),
            Layer::Bottom => Some(&mut self.bottom),
            Layer::Special => None,
        }
    }

    /// Which mapping currently holds the category, if any.
    pub fn layer_containing(&self, category: &str) -> Option<Layer> {
        Layer::COMBINABLE
            .into_iter()
            .find(|layer| self.layer(*layer).is_some_and(|map| map.contains(category)))
    }

    pub fn get(&self, category: &str) -> Option<&Selection> {
        Layer::COMBINABLE
            .into_iter()
            .find_map(|layer| self.layer(layer).and_then(|map| map.get(category)))
    }

    /// Adds the category to `layer` at `Any`.
    ///
    /// No-op for special categories and for categories already present in
    /// any mapping.
    pub fn register(&mut self, category: &str, layer: Layer) -> bool {
        if self.layer_containing(category).is_some() {
            return false;
        }
        match self.layer_mut(layer) {
            Some(map) => {
                map.push(category.to_string(), Selection::Any);
                true
            }
            None => false,
        }
    }

    /// Replaces the selection of a category already in `layer`.
    pub fn set(&mut self, layer: Layer, category: &str, selection: Selection) -> bool {
        self.layer_mut(layer)
            .is_some_and(|map| map.replace(category, selection))
    }

    /// Purges the category from all three mappings.
    pub fn remove(&mut self, category: &str) -> bool {
        let mut removed = false;
        for layer in Layer::COMBINABLE {
            if let Some(map) = self.layer_mut(layer) {
                removed |= map.remove(category);
            }
        }
        removed
    }

    /// Registers every wardrobe category missing from all mappings.
    ///
    /// Returns the categories that were added.
    pub fn reconcile(
        &mut self,
        wardrobe: &Wardrobe,
        registry: &CategoryRegistry,
    ) -> Vec<CategoryId> {
        wardrobe
            .category_order()
            .iter()
            .filter(|id| self.register(id, registry.layer_of(id)))
            .cloned()
            .collect()
    }
}
