//! Terminal-independent input values
//!
//! The TUI converts crossterm key and mouse events into these types so that
//! the state and handlers never depend on a terminal library.

/// A key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

/// Kind of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved (with or without a button held)
    Moved,
    /// Primary button pressed
    Down,
    ScrollUp,
    ScrollDown,
}

/// A pointer event at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    pub column: u16,
    pub row: u16,
    pub kind: PointerKind,
}

impl PointerInput {
    pub fn new(column: u16, row: u16, kind: PointerKind) -> Self {
        Self { column, row, kind }
    }

    pub fn moved(column: u16, row: u16) -> Self {
        Self::new(column, row, PointerKind::Moved)
    }

    pub fn down(column: u16, row: u16) -> Self {
        Self::new(column, row, PointerKind::Down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_pointer_constructors() {
        assert_eq!(PointerInput::moved(3, 4).kind, PointerKind::Moved);
        let down = PointerInput::down(7, 1);
        assert_eq!((down.column, down.row, down.kind), (7, 1, PointerKind::Down));
    }
}
