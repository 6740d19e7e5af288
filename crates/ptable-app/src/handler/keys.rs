//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Map a key press to a message
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Focus
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::FocusPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::FocusDown),
        InputKey::Up | InputKey::Char('k') => Some(Message::FocusUp),
        InputKey::Home | InputKey::Char('g') => Some(Message::FocusFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::FocusLast),

        // Focused card
        InputKey::Char('a') => Some(Message::ToggleFocusedAttributes),
        InputKey::Char('s') => Some(Message::ToggleFocusedSnippet),
        InputKey::Char('f') => Some(Message::PeekFacts),
        InputKey::Char('p') => Some(Message::CycleParadigm),
        InputKey::Enter | InputKey::Char('o') => Some(Message::OpenFocusedLink),
        InputKey::Esc => Some(Message::ClearHover),

        // Scroll
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::PageUp),
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::PageDown),
        InputKey::CharCtrl('e') => Some(Message::ScrollDown(1)),
        InputKey::CharCtrl('y') => Some(Message::ScrollUp(1)),

        _ => None,
    }
}
