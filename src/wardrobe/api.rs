//! # API Facade
//!
//! The single entry point for UI clients. [`WardrobeApi`] owns the storage
//! backend and the session state, dispatches actions to the command layer and
//! writes the wardrobe back whenever a command reports `wardrobe_changed`.
//!
//! Like the rest of the core, it never prints. Errors come back as
//! [`Result`], messages as [`CmdResult`].
//!
//! ## Loading
//!
//! [`WardrobeApi::load`] never fails. A missing record yields the shipped
//! defaults; an unreadable or malformed one is logged and also replaced by the
//! defaults. The broken record is left on disk until the next change overwrites
//! it.
//!
//! ## Generic Over DataStore
//!
//! - Production: `WardrobeApi<FileStore>`
//! - Testing: `WardrobeApi<InMemoryStore>`

use crate::app::{update, Action, AppState};
use crate::commands::{self, CmdResult, WardrobePaths};
use crate::error::{Result, WardrobeError};
use crate::model::{Layer, Selection};
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CategoryListing, CmdMessage, MessageLevel};

pub struct WardrobeApi<S: DataStore> {
    store: S,
    state: AppState,
    paths: WardrobePaths,
}

impl<S: DataStore> WardrobeApi<S> {
    /// Reads the saved wardrobe, falling back to the defaults.
    pub fn load(store: S, paths: WardrobePaths, page_size: usize) -> Self {
        let state = match store.load() {
            Ok(Some(record)) => AppState::from_record(record, page_size),
            Ok(None) => {
                tracing::debug!("no saved wardrobe, starting from defaults");
                AppState::seeded(page_size)
            }
            Err(e) => {
                tracing::error!(error = %e, "could not read saved wardrobe, using defaults");
                AppState::seeded(page_size)
            }
        };
        Self {
            store,
            state,
            paths,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies one action and saves if the wardrobe changed.
    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        tracing::debug!(?action, "dispatch");
        let result = update(&mut self.state, action);
        if result.wardrobe_changed {
            self.store.save(&self.state.record())?;
        }
        Ok(result)
    }

    pub fn list_categories(&self) -> CmdResult {
        commands::list::run(&self.state)
    }

    pub fn add_item(&mut self, category: &str, name: &str) -> Result<CmdResult> {
        self.dispatch(Action::AddItem {
            category: category.to_string(),
            name: name.to_string(),
        })
    }

    pub fn request_remove_item(&mut self, category: &str, item: &str) -> Result<CmdResult> {
        self.dispatch(Action::RequestRemoveItem {
            category: category.to_string(),
            item: item.to_string(),
        })
    }

    pub fn add_category(&mut self, name: &str, layer: Option<Layer>) -> Result<CmdResult> {
        self.dispatch(Action::AddCategory {
            name: name.to_string(),
            layer,
        })
    }

    pub fn request_remove_category(&mut self, category: &str) -> Result<CmdResult> {
        self.dispatch(Action::RequestRemoveCategory {
            category: category.to_string(),
        })
    }

    /// Sets a selection without the caller naming the layer.
    ///
    /// The layer is whichever one currently holds `category`.
    pub fn select(&mut self, category: &str, selection: Selection) -> Result<CmdResult> {
        let layer = self
            .state
            .selections()
            .layer_containing(category)
            .ok_or_else(|| {
                WardrobeError::Api(format!("{} is not a selectable category", category))
            })?;
        self.dispatch(Action::SetSelection {
            layer,
            category: category.to_string(),
            selection,
        })
    }

    pub fn generate(&mut self) -> Result<CmdResult> {
        self.dispatch(Action::Generate)
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<CmdResult> {
        self.dispatch(Action::GoToPage(page))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn paths() -> WardrobePaths {
        WardrobePaths {
            data: PathBuf::from("/nonexistent/wardrobe"),
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let api = WardrobeApi::load(InMemoryStore::new(), paths(), 5);
        assert_eq!(api.state().wardrobe().category_order().len(), 10);
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn corrupt_record_falls_back_to_defaults() {
        let store = InMemoryStore::with_raw("{ not json");
        let api = WardrobeApi::load(store, paths(), 5);

        assert!(api.state().wardrobe().contains_item("jacket", "Denim"));
        assert_eq!(api.store().raw(), Some("{ not json"));
    }

    #[test]
    fn saves_only_when_wardrobe_changes() {
        let mut api = WardrobeApi::load(StoreFixture::seeded().build(), paths(), 5);

        api.generate().unwrap();
        api.go_to_page(2).unwrap();
        api.select("jacket", Selection::None).unwrap();
        api.request_remove_item("pants", "Olive cargo").unwrap();
        assert_eq!(api.store().save_count(), 0);

        api.add_item("pants", "Chino").unwrap();
        assert_eq!(api.store().save_count(), 1);

        api.dispatch(Action::ConfirmRemoveItem).unwrap();
        assert_eq!(api.store().save_count(), 2);
    }

    #[test]
    fn added_category_survives_reload() {
        let mut api = WardrobeApi::load(InMemoryStore::new(), paths(), 5);
        api.add_category("Scarves", Some(Layer::Outer)).unwrap();
        api.add_item("Scarves", "Wool").unwrap();

        let raw = api.store().raw().unwrap_or_default().to_string();
        let reloaded = WardrobeApi::load(InMemoryStore::with_raw(raw), paths(), 5);

        let state = reloaded.state();
        assert_eq!(state.registry().layer_of("Scarves"), Layer::Outer);
        assert_eq!(
            state.selections().layer_containing("Scarves"),
            Some(Layer::Outer)
        );
        assert_eq!(state.selections().get("Scarves"), Some(&Selection::Any));
        assert_eq!(state.wardrobe().category_order().last().unwrap(), "Scarves");
    }

    #[test]
    fn fixture_category_is_selectable() {
        let store = StoreFixture::new()
            .with_category("shirt", Layer::Inner, &["Oxford"])
            .with_category("pants", Layer::Bottom, &["Cargo", "Chino"])
            .build();
        let mut api = WardrobeApi::load(store, paths(), 5);

        api.generate().unwrap();
        assert_eq!(api.state().outfits().len(), 2);
        assert!(api.state().outfits().iter().all(|o| o.outer.is_none()));
    }

    #[test]
    fn select_on_special_category_is_an_error() {
        let mut api = WardrobeApi::load(InMemoryStore::new(), paths(), 5);
        assert!(api.select("dress", Selection::None).is_err());
    }
}
