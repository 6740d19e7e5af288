//! Per-card disclosure and hover state
//!
//! Each card owns exactly one [`CardUiState`]. It is created when the grid is
//! built, mutated only through [`CardUiState::update`] and never shared with
//! another card.
//!
//! Hover follows a three-state machine:
//!
//! ```text
//!            enter card (no badge)            enter badge
//!   Idle  ───────────────────────▶ CardHover ─────────────▶ BadgeHover
//!    ▲  ◀─────────────────────────    │                        │
//!    │         leave card             │ enter badge            │
//!    │                                ▼                        │
//!    └──────────────────────────── leave badge ◀───────────────┘
//! ```
//!
//! Leaving a badge always returns to `Idle`, even when the pointer is still
//! over the card body; the card re-enters `CardHover` only on a fresh card
//! enter.

use ptable_core::{compute_anchor, Anchor, ParadigmTag, ScreenRect};

/// Derived hover state of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Idle,
    /// Card body hovered, fact bubbles showing
    CardHover,
    /// A paradigm badge hovered, tooltip showing
    BadgeHover,
}

/// Events a card reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardMessage {
    PointerEnterCard,
    PointerLeaveCard,
    /// Pointer entered a badge. Bounds are `None` when the elements could
    /// not be measured, in which case no anchor is stored.
    PointerEnterBadge {
        tag: ParadigmTag,
        badge: Option<ScreenRect>,
        card: Option<ScreenRect>,
    },
    PointerLeaveBadge,
    ToggleAttributes,
    ToggleSnippet,
}

/// Ephemeral UI state of one card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUiState {
    pub is_card_hovered: bool,
    pub hovered_paradigm: Option<ParadigmTag>,
    pub hovered_badge_anchor: Option<Anchor>,
    pub attributes_panel_open: bool,
    pub snippet_panel_open: bool,
}

impl CardUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event to the card
    pub fn update(&mut self, message: CardMessage) {
        match message {
            CardMessage::PointerEnterCard => self.on_pointer_enter_card(),
            CardMessage::PointerLeaveCard => self.on_pointer_leave_card(),
            CardMessage::PointerEnterBadge { tag, badge, card } => {
                self.on_pointer_enter_badge(tag, badge, card)
            }
            CardMessage::PointerLeaveBadge => self.on_pointer_leave_badge(),
            CardMessage::ToggleAttributes => self.toggle_attributes_panel(),
            CardMessage::ToggleSnippet => self.toggle_snippet_panel(),
        }
    }

    /// Hover the card body, unless a badge already holds the hover
    pub fn on_pointer_enter_card(&mut self) {
        if self.hovered_paradigm.is_none() {
            self.is_card_hovered = true;
        }
    }

    pub fn on_pointer_leave_card(&mut self) {
        self.is_card_hovered = false;
    }

    /// Hover a badge; suppresses the card-level bubbles
    pub fn on_pointer_enter_badge(
        &mut self,
        tag: ParadigmTag,
        badge: Option<ScreenRect>,
        card: Option<ScreenRect>,
    ) {
        self.hovered_paradigm = Some(tag);
        self.hovered_badge_anchor = match (badge, card) {
            (Some(badge), Some(card)) => compute_anchor(badge, card),
            _ => None,
        };
        self.is_card_hovered = false;
    }

    pub fn on_pointer_leave_badge(&mut self) {
        self.hovered_paradigm = None;
        self.hovered_badge_anchor = None;
    }

    pub fn toggle_attributes_panel(&mut self) {
        self.attributes_panel_open = !self.attributes_panel_open;
    }

    pub fn toggle_snippet_panel(&mut self) {
        self.snippet_panel_open = !self.snippet_panel_open;
    }

    pub fn phase(&self) -> HoverPhase {
        if self.hovered_paradigm.is_some() {
            HoverPhase::BadgeHover
        } else if self.is_card_hovered {
            HoverPhase::CardHover
        } else {
            HoverPhase::Idle
        }
    }

    /// Fact bubbles render iff the card body is hovered and no badge is
    pub fn bubbles_visible(&self) -> bool {
        self.is_card_hovered && self.hovered_paradigm.is_none()
    }

    /// The paradigm tooltip renders iff a badge is hovered and anchored
    pub fn tooltip(&self) -> Option<(ParadigmTag, Anchor)> {
        self.hovered_paradigm.zip(self.hovered_badge_anchor)
    }
}
