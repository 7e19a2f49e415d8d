//! Collection filter/sort engine.
//!
//! This crate derives the ordered product view shown on a collection page
//! from a read-only catalog snapshot and the caller-owned selection. It is
//! purely deterministic domain logic (no IO, no shared state, nothing held
//! between calls).

pub mod engine;
pub mod selection;

pub use engine::compute;
pub use selection::{FilterAxis, Selection, SortKey};
