//! Paradigms Table Library
//!
//! A terminal table of programming languages, the paradigms they support and
//! what those paradigms mean. The work is split across the workspace crates:
//! `ptable-core` (content, geometry, errors), `ptable-app` (state and input
//! routing) and `ptable-tui` (rendering and the event loop).

pub mod launch;

// Re-export main entry point
pub use launch::{run, LaunchOptions};
