//! Message types for the application (TEA pattern)

use crate::card::CardMessage;
use crate::input_key::{InputKey, PointerInput};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Pointer(PointerInput),

    /// Event addressed to a single card
    Card { index: usize, msg: CardMessage },

    /// Time passed since the previous tick
    Tick { elapsed_ms: u64 },

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Keyboard focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    /// Move focus one grid row up
    FocusUp,
    /// Move focus one grid row down
    FocusDown,
    FocusFirst,
    FocusLast,

    /// Toggle the attributes panel of the focused card
    ToggleFocusedAttributes,
    /// Toggle the code panel of the focused card
    ToggleFocusedSnippet,
    /// Show or hide the fact bubbles of the focused card
    PeekFacts,
    /// Show the tooltip of the focused card's next paradigm badge
    CycleParadigm,
    /// Leave every hovered card and badge
    ClearHover,

    // ─────────────────────────────────────────────────────────
    // Links
    // ─────────────────────────────────────────────────────────
    OpenLink { index: usize },
    OpenFocusedLink,
    /// Browser launch failed in the background
    LinkOpenFailed { url: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Scroll
    // ─────────────────────────────────────────────────────────
    ScrollUp(u16),
    ScrollDown(u16),
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,
}
