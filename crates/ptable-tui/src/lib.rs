//! ptable-tui - Terminal UI for Paradigms Table
//!
//! Renders the language card grid with ratatui, records the hit map used for
//! pointer resolution, and runs the terminal event loop around the TEA
//! update function from ptable-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
