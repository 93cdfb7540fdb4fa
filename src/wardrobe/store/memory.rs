use super::{DataStore, WardrobeRecord};
use crate::error::{Result, WardrobeError};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// The record is kept serialized so tests can plant corrupt data.
#[derive(Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saved record is exactly `raw`.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<WardrobeRecord>> {
        match &self.raw {
            Some(raw) => WardrobeRecord::from_json(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, record: &WardrobeRecord) -> Result<()> {
        self.raw = Some(serde_json::to_string(record).map_err(WardrobeError::Serialization)?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Layer;
    use crate::registry::CategoryRegistry;
    use crate::wardrobe::Wardrobe;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        wardrobe: Wardrobe,
        registry: CategoryRegistry,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// An empty saved wardrobe.
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                wardrobe: Wardrobe::new(),
                registry: CategoryRegistry::new(),
            }
        }

        /// A saved wardrobe equal to the shipped defaults.
        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::new(),
                wardrobe: Wardrobe::seeded(),
                registry: CategoryRegistry::builtin(),
            }
        }

        pub fn with_category(mut self, id: &str, layer: Layer, items: &[&str]) -> Self {
            self.wardrobe.add_category(id);
            self.registry.set_layer(id, layer);
            for item in items {
                self.wardrobe.add_item(id, item);
            }
            self
        }

        /// Writes the fixture wardrobe into the store and returns it.
        pub fn build(mut self) -> InMemoryStore {
            let record = WardrobeRecord::from_state(&self.wardrobe, &self.registry);
            self.store.save(&record).unwrap();
            InMemoryStore::with_raw(self.store.raw().unwrap_or_default())
        }
    }
}
