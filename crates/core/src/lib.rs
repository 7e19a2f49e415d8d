//! `vitrine-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! crates (no IO, no framework concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
