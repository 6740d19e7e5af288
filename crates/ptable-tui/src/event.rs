//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ptable_app::{InputKey, Message, PointerInput, PointerKind};
use ptable_core::prelude::*;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm MouseEvent to PointerInput
///
/// Drags count as moves so hover follows a held button. Other buttons and
/// horizontal scrolling are ignored.
pub fn mouse_event_to_pointer(mouse: MouseEvent) -> Option<PointerInput> {
    let kind = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Moved,
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::ScrollUp => PointerKind::ScrollUp,
        MouseEventKind::ScrollDown => PointerKind::ScrollDown,
        _ => return None,
    };
    Some(PointerInput::new(mouse.column, mouse.row, kind))
}

/// Poll for a terminal event for at most `timeout`
///
/// Returns `None` on timeout and for events with no message (key releases,
/// resizes, focus changes); the caller redraws every iteration anyway.
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_pointer(mouse).map(Message::Pointer),
        _ => None,
    };
    Ok(message)
}
