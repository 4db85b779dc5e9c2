//! Persistence backends for the corkboard document.
//!
//! The document is persisted as one unit: a single JSON blob under a single
//! constant key. This crate provides the SQLite-backed implementation of the
//! `DocumentStore` trait defined in `corkboard-core`.

pub mod error;
pub mod sqlite;
