//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, warn};

use crate::message::Message;
use crate::state::AppState;

use super::{focus, keys::handle_key, pointer, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Pointer(input) => pointer::handle_pointer(state, input),

        Message::Card { index, msg } => {
            state.apply_card_message(index, msg);
            UpdateResult::none()
        }

        Message::Tick { elapsed_ms } => {
            state.advance_clock(elapsed_ms);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => focus::handle_focus_next(state),
        Message::FocusPrev => focus::handle_focus_prev(state),
        Message::FocusUp => focus::handle_focus_up(state),
        Message::FocusDown => focus::handle_focus_down(state),
        Message::FocusFirst => focus::handle_focus_to(state, 0),
        Message::FocusLast => {
            let last = state.cards.len().saturating_sub(1);
            focus::handle_focus_to(state, last)
        }

        Message::ToggleFocusedAttributes => {
            state.apply_card_message(state.focused, crate::card::CardMessage::ToggleAttributes);
            UpdateResult::none()
        }
        Message::ToggleFocusedSnippet => {
            state.apply_card_message(state.focused, crate::card::CardMessage::ToggleSnippet);
            UpdateResult::none()
        }
        Message::PeekFacts => pointer::handle_peek_facts(state),
        Message::CycleParadigm => pointer::handle_cycle_paradigm(state),
        Message::ClearHover => pointer::handle_clear_hover(state),

        // ─────────────────────────────────────────────────────────
        // Links
        // ─────────────────────────────────────────────────────────
        Message::OpenLink { index } => handle_open_link(state, index),
        Message::OpenFocusedLink => {
            let index = state.focused;
            handle_open_link(state, index)
        }
        Message::LinkOpenFailed { url, error } => {
            warn!("Failed to open {}: {}", url, error);
            state.status = Some(format!("Could not open {url}: {error}"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp(rows) => scroll::handle_scroll_up(state, rows),
        Message::ScrollDown(rows) => scroll::handle_scroll_down(state, rows),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
    }
}

fn handle_open_link(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(url) = state.language(index).map(|l| l.link.clone()) else {
        return UpdateResult::none();
    };

    if !state.settings.behavior.open_links {
        debug!("Link opening disabled, ignoring {}", url);
        state.status = Some(url);
        return UpdateResult::none();
    }

    state.status = Some(format!("Opening {url}"));
    UpdateResult::action(UpdateAction::OpenLink {
        url,
        browser: state.settings.behavior.browser.clone(),
    })
}
