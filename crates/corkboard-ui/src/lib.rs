//! Terminal presentation for corkboard.
//!
//! Renders boards, lists, and cards for the CLI. The document is the only
//! input: rendering reads the current state and never mutates it.

pub mod render;
pub mod styles;
pub mod terminal;
