use crate::model::CategoryId;
use crate::registry::DEFAULT_CATEGORIES;
use std::collections::BTreeMap;

/// Items per category plus the order categories are displayed in.
///
/// Every key of the item mapping appears in the order list exactly once.
/// All mutations keep the two in step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wardrobe {
    items: BTreeMap<CategoryId, Vec<String>>,
    order: Vec<CategoryId>,
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped categories with their sample items.
    pub fn seeded() -> Self {
        let mut wardrobe = Self::new();
        for category in DEFAULT_CATEGORIES {
            wardrobe.add_category(category.id);
            for item in category.seed {
                wardrobe.add_item(category.id, item);
            }
        }
        wardrobe
    }

    /// Rebuilds a wardrobe from a saved mapping and order.
    ///
    /// Order entries without items are dropped, duplicates are collapsed, and
    /// categories missing from the order are appended after it.
    pub fn from_parts(items: BTreeMap<CategoryId, Vec<String>>, order: Vec<CategoryId>) -> Self {
        let mut normalized: Vec<CategoryId> = Vec::with_capacity(items.len());
        for id in order {
            if items.contains_key(&id) && !normalized.contains(&id) {
                normalized.push(id);
            }
        }
        for id in items.keys() {
            if !normalized.contains(id) {
                normalized.push(id.clone());
            }
        }
        Self {
            items,
            order: normalized,
        }
    }

    pub fn items_by_category(&self) -> &BTreeMap<CategoryId, Vec<String>> {
        &self.items
    }

    pub fn category_order(&self) -> &[CategoryId] {
        &self.order
    }

    pub fn items(&self, category: &str) -> Option<&[String]> {
        self.items.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.items.contains_key(category)
    }

    pub fn contains_item(&self, category: &str, item: &str) -> bool {
        self.items(category)
            .is_some_and(|items| items.iter().any(|i| i == item))
    }

    /// Appends a trimmed item name. Blank names are ignored.
    ///
    /// Returns whether the wardrobe changed.
    pub fn add_item(&mut self, category: &str, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if !self.items.contains_key(category) {
            self.order.push(category.to_string());
        }
        self.items
            .entry(category.to_string())
            .or_default()
            .push(name.to_string());
        true
    }

    /// Removes every entry equal to `name` from one category.
    ///
    /// Returns how many entries were removed.
    pub fn remove_item(&mut self, category: &str, name: &str) -> usize {
        let Some(items) = self.items.get_mut(category) else {
            return 0;
        };
        let before = items.len();
        items.retain(|i| i != name);
        before - items.len()
    }

    /// Adds an empty category at the end of the display order.
    pub fn add_category(&mut self, id: &str) -> bool {
        if self.items.contains_key(id) {
            return false;
        }
        self.items.insert(id.to_string(), Vec::new());
        self.order.push(id.to_string());
        true
    }

    /// Drops a category and its items from both the mapping and the order.
    pub fn remove_category(&mut self, id: &str) -> bool {
        let removed = self.items.remove(id).is_some();
        self.order.retain(|c| c != id);
        removed
    }
}
