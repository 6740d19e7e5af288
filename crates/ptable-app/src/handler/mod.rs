//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key bindings
//! - `pointer`: Mouse input, hover routing and keyboard hover
//! - `focus`: Keyboard focus movement
//! - `scroll`: Scroll handlers

pub(crate) mod focus;
pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Open a URL in the system browser.
    ///
    /// Fire-and-forget OS call. If `browser` is empty, the platform default
    /// opener is used.
    OpenLink { url: String, browser: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
