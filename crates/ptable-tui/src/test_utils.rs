//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering using ratatui's
//! TestBackend.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MainHeader::new(), term.area());
//! assert!(term.buffer_contains("Programming Paradigms Table"));
//! ```

use std::sync::Arc;

use ptable_app::config::Settings;
use ptable_app::AppState;
use ptable_core::ContentBundle;
use ratatui::backend::TestBackend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Wrapper around a TestBackend terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with [`crate::render::view`]
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (within one row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Text of one row
    pub fn line_text(&self, line: u16) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        if line < buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, line)].symbol());
            }
        }
        result
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.line_text(line).contains(text)
    }

    pub fn cell(&self, x: u16, y: u16) -> &Cell {
        &self.buffer()[(x, y)]
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// AppState over the bundled content with default settings
pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(ContentBundle::builtin().expect("bundled content parses")),
        Settings::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_line_helpers() {
        let mut term = TestTerminal::with_size(10, 2);
        term.draw_with(|frame| {
            frame
                .buffer_mut()
                .set_string(0, 1, "hello", ratatui::style::Style::default());
        });
        assert!(term.line_contains(1, "hello"));
        assert!(!term.line_contains(0, "hello"));
        assert_eq!(term.cell(0, 1).symbol(), "h");
    }
}
