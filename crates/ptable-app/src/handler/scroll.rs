//! Scroll message handlers
//!
//! Scrolling moves content under a stationary pointer, so every handler
//! re-resolves the hover afterwards.

use crate::state::AppState;

use super::{pointer::refresh_hover, UpdateResult};

fn scroll_to(state: &mut AppState, scroll: u16) -> UpdateResult {
    if scroll != state.scroll {
        state.set_scroll(scroll);
        refresh_hover(state);
    }
    UpdateResult::none()
}

fn page_rows(state: &AppState) -> u16 {
    state.hit_map.viewport.height.saturating_sub(1).max(1)
}

pub fn handle_scroll_up(state: &mut AppState, rows: u16) -> UpdateResult {
    let target = state.scroll.saturating_sub(rows);
    scroll_to(state, target)
}

pub fn handle_scroll_down(state: &mut AppState, rows: u16) -> UpdateResult {
    let target = state.scroll.saturating_add(rows);
    scroll_to(state, target)
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    scroll_to(state, 0)
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    let target = state.hit_map.max_scroll();
    scroll_to(state, target)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let rows = page_rows(state);
    handle_scroll_up(state, rows)
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let rows = page_rows(state);
    handle_scroll_down(state, rows)
}
