//! Pointer input and hover handlers
//!
//! Mouse positions are resolved against the hit map of the last render and
//! turned into ordered card enter/leave events by [`HoverTracker`]. The
//! keyboard hover commands go through the same tracker so both input paths
//! obey the same state machine.

use tracing::trace;

use crate::card::CardMessage;
use crate::hit::HitTarget;
use crate::hover::HoverTracker;
use crate::input_key::{PointerInput, PointerKind};
use crate::message::Message;
use crate::state::AppState;

use super::{scroll, UpdateResult};

/// Rows scrolled per mouse wheel notch
pub const WHEEL_SCROLL_ROWS: u16 = 3;

pub fn handle_pointer(state: &mut AppState, input: PointerInput) -> UpdateResult {
    match input.kind {
        PointerKind::Moved => {
            move_pointer(state, input.column, input.row);
            UpdateResult::none()
        }
        PointerKind::Down => {
            move_pointer(state, input.column, input.row);
            handle_click(state, input.column, input.row)
        }
        PointerKind::ScrollUp => {
            state.pointer = Some((input.column, input.row));
            scroll::handle_scroll_up(state, WHEEL_SCROLL_ROWS)
        }
        PointerKind::ScrollDown => {
            state.pointer = Some((input.column, input.row));
            scroll::handle_scroll_down(state, WHEEL_SCROLL_ROWS)
        }
    }
}

fn move_pointer(state: &mut AppState, column: u16, row: u16) {
    state.pointer = Some((column, row));
    let next = HoverTracker::from_hit(state.hit_map.resolve(column, row));
    hover_to(state, next);
}

fn hover_to(state: &mut AppState, next: HoverTracker) {
    let events = state.hover.move_to(next, &state.hit_map);
    if !events.is_empty() {
        trace!("Hover events: {:?}", events);
    }
    state.dispatch(events);
}

fn handle_click(state: &mut AppState, column: u16, row: u16) -> UpdateResult {
    let Some(hit) = state.hit_map.resolve(column, row) else {
        return UpdateResult::none();
    };
    state.focused = hit.card;

    match hit.target {
        HitTarget::AttributesButton => {
            state.apply_card_message(hit.card, CardMessage::ToggleAttributes);
            UpdateResult::none()
        }
        HitTarget::SnippetButton => {
            state.apply_card_message(hit.card, CardMessage::ToggleSnippet);
            UpdateResult::none()
        }
        HitTarget::Link => UpdateResult::message(Message::OpenLink { index: hit.card }),
        HitTarget::Badge(_) | HitTarget::Body => UpdateResult::none(),
    }
}

/// Re-resolve the hover after content moved under the pointer
pub fn refresh_hover(state: &mut AppState) {
    if let Some((column, row)) = state.pointer {
        move_pointer(state, column, row);
    }
}

/// Show the focused card's bubbles, or hide them if already shown
pub fn handle_peek_facts(state: &mut AppState) -> UpdateResult {
    let Some(showing) = state.cards.get(state.focused).map(|c| c.bubbles_visible()) else {
        return UpdateResult::none();
    };

    // Leaving a badge does not re-hover its card, so start from scratch
    let mut events = state.hover.clear(&state.hit_map);
    if !showing {
        let target = HoverTracker {
            card: Some(state.focused),
            badge: None,
        };
        events.extend(state.hover.move_to(target, &state.hit_map));
    }
    state.dispatch(events);
    UpdateResult::none()
}

/// Step through the focused card's badges, then back to no tooltip
pub fn handle_cycle_paradigm(state: &mut AppState) -> UpdateResult {
    let focused = state.focused;
    let Some(tags) = state.language(focused).map(|l| l.paradigms.clone()) else {
        return UpdateResult::none();
    };

    let current = match state.hover {
        HoverTracker {
            card: Some(card),
            badge: Some(tag),
        } if card == focused => tags.iter().position(|t| *t == tag),
        _ => None,
    };
    let next = match current {
        None => tags.first().copied(),
        Some(pos) => tags.get(pos + 1).copied(),
    };

    match next {
        Some(tag) => hover_to(
            state,
            HoverTracker {
                card: Some(focused),
                badge: Some(tag),
            },
        ),
        None => {
            let events = state.hover.clear(&state.hit_map);
            state.dispatch(events);
        }
    }
    UpdateResult::none()
}

pub fn handle_clear_hover(state: &mut AppState) -> UpdateResult {
    let events = state.hover.clear(&state.hit_map);
    state.dispatch(events);
    UpdateResult::none()
}
