//! Adding and removing items.
//!
//! Removal is two-step: [`request_remove`] records what should go, and only
//! [`confirm_remove`] touches the wardrobe. [`cancel_remove`] forgets the
//! request.

use crate::app::{AppState, PendingItemRemoval};
use crate::commands::{CmdMessage, CmdResult};
use crate::registry::display_name;

pub fn add(state: &mut AppState, category: &str, name: &str) -> CmdResult {
    if !state.wardrobe.contains_category(category) {
        return CmdResult::default()
            .with_message(CmdMessage::warning(format!("Unknown category: {}", category)));
    }
    if !state.wardrobe.add_item(category, name) {
        return CmdResult::default();
    }
    CmdResult::default().changed().with_message(CmdMessage::success(format!(
        "Added {} to {}",
        name.trim(),
        display_name(category)
    )))
}

pub fn request_remove(state: &mut AppState, category: &str, item: &str) -> CmdResult {
    if !state.wardrobe.contains_item(category, item) {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "No item '{}' in {}",
            item,
            display_name(category)
        )));
    }
    state.pending_item_removal = Some(PendingItemRemoval {
        category: category.to_string(),
        item: item.to_string(),
    });
    CmdResult::default()
        .awaiting_confirmation()
        .with_message(CmdMessage::info(format!(
            "Remove {} from {}?",
            item,
            display_name(category)
        )))
}

pub fn confirm_remove(state: &mut AppState) -> CmdResult {
    let Some(pending) = state.pending_item_removal.take() else {
        return CmdResult::default().with_message(CmdMessage::info("Nothing to remove."));
    };
    let removed = state.wardrobe.remove_item(&pending.category, &pending.item);
    if removed == 0 {
        return CmdResult::default();
    }
    CmdResult::default().changed().with_message(CmdMessage::success(format!(
        "Removed {} from {}",
        pending.item,
        display_name(&pending.category)
    )))
}

pub fn cancel_remove(state: &mut AppState) -> CmdResult {
    match state.pending_item_removal.take() {
        Some(_) => CmdResult::default().with_message(CmdMessage::info("Operation cancelled.")),
        None => CmdResult::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_trimmed_item() {
        let mut state = AppState::seeded(5);
        let result = add(&mut state, "pants", "  Chino ");
        assert!(result.wardrobe_changed);
        assert!(state.wardrobe().contains_item("pants", "Chino"));
    }

    #[test]
    fn blank_item_is_silently_ignored() {
        let mut state = AppState::seeded(5);
        let before = state.wardrobe().clone();
        let result = add(&mut state, "pants", "   ");
        assert!(!result.wardrobe_changed);
        assert!(result.messages.is_empty());
        assert_eq!(state.wardrobe(), &before);
    }

    #[test]
    fn unknown_category_is_not_created() {
        let mut state = AppState::seeded(5);
        let result = add(&mut state, "hats", "beanie");
        assert!(!result.wardrobe_changed);
        assert!(!state.wardrobe().contains_category("hats"));
    }

    #[test]
    fn removal_waits_for_confirmation() {
        let mut state = AppState::seeded(5);
        let result = request_remove(&mut state, "jacket", "Denim");

        assert!(result.awaiting_confirmation);
        assert!(!result.wardrobe_changed);
        assert!(state.wardrobe().contains_item("jacket", "Denim"));
        assert_eq!(
            state.pending_item_removal(),
            Some(&PendingItemRemoval {
                category: "jacket".into(),
                item: "Denim".into()
            })
        );
    }

    #[test]
    fn confirm_removes_only_from_named_category() {
        let mut state = AppState::seeded(5);
        add(&mut state, "skirt", "Denim");
        request_remove(&mut state, "jacket", "Denim");

        let result = confirm_remove(&mut state);

        assert!(result.wardrobe_changed);
        assert!(!state.wardrobe().contains_item("jacket", "Denim"));
        assert!(state.wardrobe().contains_item("skirt", "Denim"));
        assert!(state.pending_item_removal().is_none());
    }

    #[test]
    fn cancel_keeps_item() {
        let mut state = AppState::seeded(5);
        request_remove(&mut state, "jacket", "Denim");
        cancel_remove(&mut state);

        let result = confirm_remove(&mut state);
        assert!(!result.wardrobe_changed);
        assert!(state.wardrobe().contains_item("jacket", "Denim"));
    }

    #[test]
    fn request_for_missing_item_is_refused() {
        let mut state = AppState::seeded(5);
        let result = request_remove(&mut state, "jacket", "Parka");
        assert!(!result.awaiting_confirmation);
        assert!(state.pending_item_removal().is_none());
    }
}
