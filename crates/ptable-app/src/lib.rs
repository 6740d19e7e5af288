//! ptable-app - Application state and input routing for Paradigms Table
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] updated by [`handler::update`] in response to [`Message`]s.
//! It also owns per-card hover state, pointer hit resolution, overlay
//! placement math and configuration loading. It has no terminal types; the
//! TUI converts terminal events into [`Message`]s at its boundary.

pub mod actions;
pub mod card;
pub mod config;
pub mod handler;
pub mod hit;
pub mod hover;
pub mod input_key;
pub mod message;
pub mod overlay;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use card::{CardMessage, CardUiState, HoverPhase};
pub use handler::{UpdateAction, UpdateResult};
pub use hit::{CardRegions, CellRect, Hit, HitMap, HitTarget};
pub use input_key::{InputKey, PointerInput, PointerKind};
pub use message::Message;
pub use state::AppState;
