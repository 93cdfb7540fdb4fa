use crate::app::AppState;
use crate::commands::{CmdMessage, CmdResult};
use crate::generator::generate;

/// Regenerates the outfit list from scratch and returns to the first page.
pub fn run(state: &mut AppState) -> CmdResult {
    state.outfits = generate(&state.wardrobe, &state.selections);
    state.current_page = 1;

    let message = match state.outfits.len() {
        0 => CmdMessage::warning("No outfits: pick at least one inner and one bottom item."),
        1 => CmdMessage::info("1 outfit"),
        n => CmdMessage::info(format!("{} outfits", n)),
    };
    CmdResult::default().with_message(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{page, select};
    use crate::model::{Layer, Selection};

    #[test]
    fn generation_resets_to_first_page() {
        let mut state = AppState::seeded(5);
        run(&mut state);
        page::go_to(&mut state, 3);
        assert_eq!(state.current_page(), 3);

        run(&mut state);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn empty_inner_layer_reports_no_outfits() {
        let mut state = AppState::seeded(5);
        for category in ["innerWear", "shortSleeve", "longSleeve", "thickLongSleeve", "shirt"] {
            select::run(&mut state, Layer::Inner, category, Selection::None);
        }

        let result = run(&mut state);

        assert!(state.outfits().is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(state.page().total_pages, 0);
    }

    #[test]
    fn outfits_are_replaced_wholesale() {
        let mut state = AppState::seeded(5);
        run(&mut state);
        let first = state.outfits().len();

        select::run(&mut state, Layer::Bottom, "skirt", Selection::None);
        run(&mut state);

        assert_eq!(state.outfits().len(), first / 2);
    }
}
