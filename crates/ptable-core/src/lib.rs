//! # ptable-core - Core Domain Types
//!
//! Foundation crate for Paradigms Table. Provides the content model, the
//! bundled content tables, anchor geometry, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, toml, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`ContentBundle`] - Read-only tables loaded once at startup
//! - [`LanguageEntry`], [`ParadigmExplanation`], [`CodeSnippet`], [`CoreAttributes`]
//!
//! ### Paradigms (`paradigm`)
//! - [`ParadigmTag`] - Closed set of paradigm badges
//!
//! ### Geometry (`geometry`)
//! - [`compute_anchor()`] - Badge/card rectangles to tooltip [`Anchor`]
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ptable_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod paradigm;

/// Prelude for common imports used throughout all Paradigms Table crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{
    CodeSnippet, ContentBundle, ContentSummary, CoreAttributes, LanguageEntry,
    ParadigmExplanation, FACT_PLACEHOLDER, NOT_AVAILABLE, NO_PROBLEM_PLACEHOLDER,
};
pub use error::{Error, Result};
pub use geometry::{compute_anchor, Anchor, ScreenRect, Side};
pub use paradigm::ParadigmTag;
