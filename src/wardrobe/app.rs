//! # Application State
//!
//! Everything a UI needs between events lives in [`AppState`]: the wardrobe,
//! its layer tags, the current selections, the last generated outfits, the
//! page being shown, and any removal waiting for confirmation.
//!
//! State only changes through [`update`], which applies one [`Action`] to
//! completion and reports what happened in a [`CmdResult`]. When
//! `wardrobe_changed` is set the caller is expected to persist the wardrobe;
//! selection, page and confirmation changes never need saving.

use crate::commands::{self, CmdResult};
use crate::model::{CategoryId, Layer, Outfit, Selection};
use crate::pagination::Page;
use crate::registry::CategoryRegistry;
use crate::selection::LayerSelection;
use crate::store::WardrobeRecord;
use crate::wardrobe::Wardrobe;

/// An item removal waiting for the user to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingItemRemoval {
    pub category: CategoryId,
    pub item: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) registry: CategoryRegistry,
    pub(crate) wardrobe: Wardrobe,
    pub(crate) selections: LayerSelection,
    pub(crate) outfits: Vec<Outfit>,
    pub(crate) current_page: usize,
    pub(crate) page_size: usize,
    pub(crate) pending_item_removal: Option<PendingItemRemoval>,
    pub(crate) pending_category_removal: Option<CategoryId>,
}

impl AppState {
    /// Fresh state over a wardrobe, with every category selected as `Any`.
    pub fn new(wardrobe: Wardrobe, registry: CategoryRegistry, page_size: usize) -> Self {
        let selections = LayerSelection::from_wardrobe(&wardrobe, &registry);
        Self {
            registry,
            wardrobe,
            selections,
            outfits: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            pending_item_removal: None,
            pending_category_removal: None,
        }
    }

    /// The shipped default wardrobe.
    pub fn seeded(page_size: usize) -> Self {
        Self::new(Wardrobe::seeded(), CategoryRegistry::builtin(), page_size)
    }

    /// State rebuilt from a saved record, migrating untagged categories.
    pub fn from_record(record: WardrobeRecord, page_size: usize) -> Self {
        let (wardrobe, registry, migrated) = record.into_state();
        if !migrated.is_empty() {
            tracing::info!(categories = ?migrated, "inferred layers for untagged categories");
        }
        Self::new(wardrobe, registry, page_size)
    }

    /// The record to persist.
    pub fn record(&self) -> WardrobeRecord {
        WardrobeRecord::from_state(&self.wardrobe, &self.registry)
    }

    pub fn wardrobe(&self) -> &Wardrobe {
        &self.wardrobe
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn selections(&self) -> &LayerSelection {
        &self.selections
    }

    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The outfits on the current page.
    pub fn page(&self) -> Page<'_, Outfit> {
        Page::of(&self.outfits, self.current_page, self.page_size)
    }

    pub fn pending_item_removal(&self) -> Option<&PendingItemRemoval> {
        self.pending_item_removal.as_ref()
    }

    pub fn pending_category_removal(&self) -> Option<&str> {
        self.pending_category_removal.as_deref()
    }
}

/// Every event that can change [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem { category: CategoryId, name: String },
    RequestRemoveItem { category: CategoryId, item: String },
    ConfirmRemoveItem,
    CancelRemoveItem,
    /// `layer` is `None` when the user has not picked one yet.
    AddCategory { name: String, layer: Option<Layer> },
    RequestRemoveCategory { category: CategoryId },
    ConfirmRemoveCategory,
    CancelRemoveCategory,
    SetSelection {
        layer: Layer,
        category: CategoryId,
        selection: Selection,
    },
    Generate,
    GoToPage(usize),
    NextPage,
    PrevPage,
}

/// Applies one action to the state.
pub fn update(state: &mut AppState, action: Action) -> CmdResult {
    match action {
        Action::AddItem { category, name } => commands::items::add(state, &category, &name),
        Action::RequestRemoveItem { category, item } => {
            commands::items::request_remove(state, &category, &item)
        }
        Action::ConfirmRemoveItem => commands::items::confirm_remove(state),
        Action::CancelRemoveItem => commands::items::cancel_remove(state),
        Action::AddCategory { name, layer } => commands::categories::add(state, &name, layer),
        Action::RequestRemoveCategory { category } => {
            commands::categories::request_remove(state, &category)
        }
        Action::ConfirmRemoveCategory => commands::categories::confirm_remove(state),
        Action::CancelRemoveCategory => commands::categories::cancel_remove(state),
        Action::SetSelection {
            layer,
            category,
            selection,
        } => commands::select::run(state, layer, &category, selection),
        Action::Generate => commands::generate::run(state),
        Action::GoToPage(page) => commands::page::go_to(state, page),
        Action::NextPage => commands::page::next(state),
        Action::PrevPage => commands::page::prev(state),
    }
}
