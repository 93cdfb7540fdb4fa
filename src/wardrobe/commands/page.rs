use crate::app::AppState;
use crate::commands::CmdResult;
use crate::pagination::clamp_page;

/// Moves to `page`, clamped into the available range.
pub fn go_to(state: &mut AppState, page: usize) -> CmdResult {
    state.current_page = clamp_page(page, state.outfits.len(), state.page_size);
    CmdResult::default()
}

pub fn next(state: &mut AppState) -> CmdResult {
    go_to(state, state.current_page.saturating_add(1))
}

pub fn prev(state: &mut AppState) -> CmdResult {
    go_to(state, state.current_page.saturating_sub(1))
}
