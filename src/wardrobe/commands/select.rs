use crate::app::AppState;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Layer, Selection};
use crate::registry::display_name;

/// Replaces the selection of one category within one layer.
///
/// A specific item is accepted even when the category does not hold it; the
/// generator will offer it as-is.
pub fn run(state: &mut AppState, layer: Layer, category: &str, selection: Selection) -> CmdResult {
    let mut result = CmdResult::default();
    if let Selection::Item(item) = &selection {
        if !state.wardrobe.contains_item(category, item) {
            result.add_message(CmdMessage::warning(format!(
                "{} has no item '{}', selecting it anyway",
                display_name(category),
                item
            )));
        }
    }
    if !state.selections.set(layer, category, selection) {
        return CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} is not an {} category",
            display_name(category),
            layer
        )));
    }
    result
}
