//! Application state (the Model in TEA)

use std::sync::Arc;

use ptable_core::{ContentBundle, LanguageEntry};
use tracing::trace;

use crate::card::{CardMessage, CardUiState};
use crate::config::Settings;
use crate::hit::HitMap;
use crate::hover::HoverTracker;

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Read-only content shared with the renderer
    pub content: Arc<ContentBundle>,

    /// Application settings from config file and CLI
    pub settings: Settings,

    /// One state per language, in content order
    pub cards: Vec<CardUiState>,

    /// Card with keyboard focus
    pub focused: usize,

    /// Rows of the grid scrolled above the viewport
    pub scroll: u16,

    /// Regions recorded by the last render
    pub hit_map: HitMap,

    /// Card and badge the pointer (or keyboard peek) is over
    pub hover: HoverTracker,

    /// Last known pointer cell
    pub pointer: Option<(u16, u16)>,

    /// Monotonic clock advanced by ticks
    pub clock_ms: u64,

    /// Card whose bubbles are showing and the clock value they appeared at
    pub bubbles_shown_at: Option<(usize, u64)>,

    /// One-line status shown in the header
    pub status: Option<String>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(content: Arc<ContentBundle>, settings: Settings) -> Self {
        let cards = vec![CardUiState::new(); content.languages().len()];
        Self {
            content,
            settings,
            cards,
            focused: 0,
            scroll: 0,
            hit_map: HitMap::default(),
            hover: HoverTracker::default(),
            pointer: None,
            clock_ms: 0,
            bubbles_shown_at: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn language(&self, index: usize) -> Option<&LanguageEntry> {
        self.content.languages().get(index)
    }

    pub fn focused_language(&self) -> Option<&LanguageEntry> {
        self.language(self.focused)
    }

    /// Apply one event to one card
    pub fn apply_card_message(&mut self, index: usize, msg: CardMessage) {
        let Some(card) = self.cards.get_mut(index) else {
            trace!("Dropping {:?} for unknown card {}", msg, index);
            return;
        };
        card.update(msg);
        self.sync_bubble_clock();
    }

    /// Apply events in order
    pub fn dispatch(&mut self, events: Vec<(usize, CardMessage)>) {
        for (index, msg) in events {
            self.apply_card_message(index, msg);
        }
    }

    /// Restart the bubble animation whenever a different card starts showing
    /// bubbles, and stop it when none does.
    fn sync_bubble_clock(&mut self) {
        let showing = self.cards.iter().position(CardUiState::bubbles_visible);
        self.bubbles_shown_at = match (showing, self.bubbles_shown_at) {
            (Some(card), Some((prev, since))) if prev == card => Some((card, since)),
            (Some(card), _) => Some((card, self.clock_ms)),
            (None, _) => None,
        };
    }

    /// Time since `card`'s bubbles appeared, when they should be animated
    pub fn bubble_elapsed_ms(&self, card: usize) -> Option<u64> {
        if !self.settings.ui.animate_bubbles {
            return None;
        }
        match self.bubbles_shown_at {
            Some((shown, since)) if shown == card => Some(self.clock_ms.saturating_sub(since)),
            _ => None,
        }
    }

    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);
    }

    /// Grid column count of the last layout
    pub fn grid_columns(&self) -> usize {
        self.hit_map.columns.max(1)
    }

    /// Set the scroll offset, clamped to the last rendered content height
    pub fn set_scroll(&mut self, scroll: u16) {
        self.scroll = scroll.min(self.hit_map.max_scroll());
        self.hit_map.scroll = self.scroll;
    }

    /// Scroll so the focused card is inside the viewport
    pub fn ensure_focused_visible(&mut self) {
        let Some(bounds) = self.hit_map.cards.get(self.focused).map(|c| c.bounds) else {
            return;
        };
        let view = self.hit_map.viewport.height as i32;
        let top = self.scroll as i32;

        let target = if bounds.y < top || bounds.height as i32 > view {
            bounds.y
        } else if bounds.bottom() > top + view {
            bounds.bottom() - view
        } else {
            return;
        };
        self.set_scroll(target.clamp(0, u16::MAX as i32) as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::{CardRegions, CellRect};
    use ptable_core::ParadigmTag;

    fn state() -> AppState {
        let content = Arc::new(ContentBundle::builtin().unwrap());
        AppState::new(content, Settings::default())
    }

    fn tall_map() -> HitMap {
        HitMap {
            viewport: CellRect::new(0, 2, 80, 10),
            scroll: 0,
            content_height: 40,
            columns: 1,
            cards: (0..4)
                .map(|i| CardRegions {
                    bounds: CellRect::new(0, i * 10, 80, 9),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_new_state_has_card_per_language() {
        let state = state();
        assert_eq!(state.cards.len(), state.content.languages().len());
        assert_eq!(state.focused_language().unwrap().name, "JavaScript");
        assert!(state.bubbles_shown_at.is_none());
    }

    #[test]
    fn test_unknown_card_is_ignored() {
        let mut state = state();
        state.apply_card_message(999, CardMessage::ToggleSnippet);
        assert!(state.cards.iter().all(|c| !c.snippet_panel_open));
    }

    #[test]
    fn test_bubble_clock_starts_on_hover_and_stops_on_leave() {
        let mut state = state();
        state.advance_clock(500);
        state.apply_card_message(2, CardMessage::PointerEnterCard);
        assert_eq!(state.bubbles_shown_at, Some((2, 500)));

        state.advance_clock(1000);
        assert_eq!(state.bubble_elapsed_ms(2), Some(1000));
        assert_eq!(state.bubble_elapsed_ms(1), None);

        // toggling a panel keeps the animation running
        state.apply_card_message(2, CardMessage::ToggleAttributes);
        assert_eq!(state.bubbles_shown_at, Some((2, 500)));

        state.apply_card_message(2, CardMessage::PointerLeaveCard);
        assert!(state.bubbles_shown_at.is_none());
    }

    #[test]
    fn test_badge_hover_stops_bubbles() {
        let mut state = state();
        state.apply_card_message(0, CardMessage::PointerEnterCard);
        state.apply_card_message(
            0,
            CardMessage::PointerEnterBadge {
                tag: ParadigmTag::Functional,
                badge: None,
                card: None,
            },
        );
        assert!(state.bubbles_shown_at.is_none());
    }

    #[test]
    fn test_animation_disabled() {
        let mut state = state();
        state.settings.ui.animate_bubbles = false;
        state.apply_card_message(0, CardMessage::PointerEnterCard);
        state.advance_clock(1000);
        assert_eq!(state.bubble_elapsed_ms(0), None);
    }

    #[test]
    fn test_set_scroll_clamps() {
        let mut state = state();
        state.set_scroll(5);
        assert_eq!(state.scroll, 0);

        state.hit_map = tall_map();
        state.set_scroll(100);
        assert_eq!(state.scroll, 30);
        assert_eq!(state.hit_map.scroll, 30);
    }

    #[test]
    fn test_ensure_focused_visible() {
        let mut state = state();
        state.hit_map = tall_map();

        state.focused = 2;
        state.ensure_focused_visible();
        // card 2 spans rows 20..29, viewport is 10 rows tall
        assert_eq!(state.scroll, 19);

        state.focused = 0;
        state.ensure_focused_visible();
        assert_eq!(state.scroll, 0);

        // already visible: no change
        state.focused = 0;
        state.set_scroll(0);
        state.ensure_focused_visible();
        assert_eq!(state.scroll, 0);
    }
}
