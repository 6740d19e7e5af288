//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Content directory not found: {path}")]
    ContentNotFound { path: PathBuf },

    #[error("Failed to parse content file {path}: {message}")]
    ContentParse { path: PathBuf, message: String },

    #[error("Invalid content: {message}")]
    ContentInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn content_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ContentNotFound { path: path.into() }
    }

    pub fn content_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ContentParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn content_invalid(message: impl Into<String>) -> Self {
        Self::ContentInvalid {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Errors that stop the program before the UI is usable
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::ContentNotFound { .. }
                | Error::ContentParse { .. }
                | Error::ContentInvalid { .. }
        )
    }
}
