//! Core domain logic for corkboard.
//!
//! This crate owns the document model (boards holding ordered lists, lists
//! holding ordered cards) and the [`store::BoardStore`] through which every
//! mutation flows.

pub mod document;
pub mod ids;
pub mod snapshot;
pub mod store;
pub mod validation;
