//! Adding and removing categories.
//!
//! A new category is tagged with the layer the user picked and joins that
//! layer's selections at `Any`. Removal is two-step like item removal, and the
//! shipped categories refuse it outright.

use crate::app::AppState;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Layer;
use crate::registry::{display_name, is_protected};

pub fn add(state: &mut AppState, name: &str, layer: Option<Layer>) -> CmdResult {
    let id = name.trim();
    let Some(layer) = layer else {
        return CmdResult::default();
    };
    if id.is_empty() {
        return CmdResult::default();
    }
    if !state.wardrobe.add_category(id) {
        return CmdResult::default()
            .with_message(CmdMessage::warning(format!("Category {} already exists", id)));
    }
    state.registry.set_layer(id, layer);
    state.selections.register(id, layer);
    CmdResult::default().changed().with_message(CmdMessage::success(format!(
        "Added {} category {}",
        layer, id
    )))
}

pub fn request_remove(state: &mut AppState, category: &str) -> CmdResult {
    if is_protected(category) {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} is a default category and cannot be removed",
            display_name(category)
        )));
    }
    if !state.wardrobe.contains_category(category) {
        return CmdResult::default()
            .with_message(CmdMessage::warning(format!("Unknown category: {}", category)));
    }
    state.pending_category_removal = Some(category.to_string());
    CmdResult::default()
        .awaiting_confirmation()
        .with_message(CmdMessage::info(format!(
            "Remove category {} and all its items?",
            category
        )))
}

pub fn confirm_remove(state: &mut AppState) -> CmdResult {
    let Some(category) = state.pending_category_removal.take() else {
        return CmdResult::default().with_message(CmdMessage::info("Nothing to remove."));
    };
    state.wardrobe.remove_category(&category);
    state.registry.remove(&category);
    state.selections.remove(&category);
    if state
        .pending_item_removal
        .as_ref()
        .is_some_and(|pending| pending.category == category)
    {
        state.pending_item_removal = None;
    }
    CmdResult::default()
        .changed()
        .with_message(CmdMessage::success(format!("Removed category {}", category)))
}

pub fn cancel_remove(state: &mut AppState) -> CmdResult {
    match state.pending_category_removal.take() {
        Some(_) => CmdResult::default().with_message(CmdMessage::info("Operation cancelled.")),
        None => CmdResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{generate, items};
    use crate::model::{LayerPick, Selection};

    #[test]
    fn added_category_joins_its_layer() {
        let mut state = AppState::seeded(5);
        let result = add(&mut state, " Scarves ", Some(Layer::Outer));

        assert!(result.wardrobe_changed);
        assert_eq!(state.wardrobe().category_order().last().unwrap(), "Scarves");
        assert_eq!(state.registry().layer_of("Scarves"), Layer::Outer);
        assert_eq!(
            state.selections().layer_containing("Scarves"),
            Some(Layer::Outer)
        );
        assert_eq!(state.selections().get("Scarves"), Some(&Selection::Any));
    }

    #[test]
    fn scarves_become_outer_options() {
        let mut state = AppState::seeded(5);
        add(&mut state, "Scarves", Some(Layer::Outer));
        items::add(&mut state, "Scarves", "Wool");
        items::add(&mut state, "Scarves", "Silk");
        generate::run(&mut state);

        for scarf in ["Wool", "Silk"] {
            let pick = LayerPick::new("Scarves", scarf);
            assert!(state
                .outfits()
                .iter()
                .any(|o| o.outer.as_ref() == Some(&pick)));
        }
    }

    #[test]
    fn special_category_is_not_combined() {
        let mut state = AppState::seeded(5);
        add(&mut state, "Jumpsuits", Some(Layer::Special));
        assert!(state.wardrobe().contains_category("Jumpsuits"));
        assert_eq!(state.selections().layer_containing("Jumpsuits"), None);
    }

    #[test]
    fn missing_name_or_layer_is_a_no_op() {
        let mut state = AppState::seeded(5);
        let before = state.wardrobe().clone();

        assert!(!add(&mut state, "   ", Some(Layer::Inner)).wardrobe_changed);
        assert!(!add(&mut state, "Vests", None).wardrobe_changed);
        assert_eq!(state.wardrobe(), &before);
    }

    #[test]
    fn duplicate_category_is_refused() {
        let mut state = AppState::seeded(5);
        let result = add(&mut state, "jacket", Some(Layer::Inner));
        assert!(!result.wardrobe_changed);
        assert_eq!(state.registry().layer_of("jacket"), Layer::Outer);
    }

    #[test]
    fn default_categories_cannot_be_removed() {
        let mut state = AppState::seeded(5);
        let result = request_remove(&mut state, "jacket");
        assert!(!result.awaiting_confirmation);
        assert!(state.pending_category_removal().is_none());
    }

    #[test]
    fn confirmed_removal_purges_everywhere() {
        let mut state = AppState::seeded(5);
        add(&mut state, "Scarves", Some(Layer::Outer));
        items::add(&mut state, "Scarves", "Wool");
        items::request_remove(&mut state, "Scarves", "Wool");

        assert!(request_remove(&mut state, "Scarves").awaiting_confirmation);
        assert!(state.wardrobe().contains_category("Scarves"));

        let result = confirm_remove(&mut state);

        assert!(result.wardrobe_changed);
        assert!(!state.wardrobe().contains_category("Scarves"));
        assert!(!state
            .wardrobe()
            .category_order()
            .contains(&"Scarves".to_string()));
        assert!(!state.registry().is_tagged("Scarves"));
        assert_eq!(state.selections().layer_containing("Scarves"), None);
        assert!(state.pending_item_removal().is_none());
    }

    #[test]
    fn cancelled_removal_keeps_category() {
        let mut state = AppState::seeded(5);
        add(&mut state, "Scarves", Some(Layer::Outer));
        request_remove(&mut state, "Scarves");
        cancel_remove(&mut state);

        assert!(!confirm_remove(&mut state).wardrobe_changed);
        assert!(state.wardrobe().contains_category("Scarves"));
    }
}
