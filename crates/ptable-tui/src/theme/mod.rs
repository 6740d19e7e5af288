//! Centralized theme for the card grid.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
