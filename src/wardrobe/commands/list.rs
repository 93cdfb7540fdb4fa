use crate::app::AppState;
use crate::commands::{CategoryListing, CmdResult};
use crate::registry::{display_name, is_protected};

/// Every category in display order, with its layer and items.
pub fn run(state: &AppState) -> CmdResult {
    let listed = state
        .wardrobe
        .category_order()
        .iter()
        .map(|id| CategoryListing {
            id: id.clone(),
            name: display_name(id).to_string(),
            layer: state.registry.layer_of(id),
            items: state.wardrobe.items(id).unwrap_or_default().to_vec(),
            protected: is_protected(id),
        })
        .collect();
    CmdResult::default().with_listed_categories(listed)
}
