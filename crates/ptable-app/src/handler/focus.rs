//! Keyboard focus handlers

use crate::state::AppState;

use super::{pointer::refresh_hover, UpdateResult};

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    let count = state.cards.len();
    if count > 0 {
        let next = (state.focused + 1) % count;
        handle_focus_to(state, next);
    }
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    let count = state.cards.len();
    if count > 0 {
        let prev = (state.focused + count - 1) % count;
        handle_focus_to(state, prev);
    }
    UpdateResult::none()
}

/// One grid row up; stays put on the first row
pub fn handle_focus_up(state: &mut AppState) -> UpdateResult {
    let columns = state.grid_columns();
    if state.focused >= columns {
        let target = state.focused - columns;
        handle_focus_to(state, target);
    }
    UpdateResult::none()
}

/// One grid row down; moves to the last card from a partially filled row
pub fn handle_focus_down(state: &mut AppState) -> UpdateResult {
    let columns = state.grid_columns();
    let last = state.cards.len().saturating_sub(1);
    let row = state.focused / columns;
    if row < last / columns {
        let target = (state.focused + columns).min(last);
        handle_focus_to(state, target);
    }
    UpdateResult::none()
}

pub fn handle_focus_to(state: &mut AppState, index: usize) -> UpdateResult {
    if index < state.cards.len() {
        state.focused = index;
        let scroll = state.scroll;
        state.ensure_focused_visible();
        if state.scroll != scroll {
            refresh_hover(state);
        }
    }
    UpdateResult::none()
}
