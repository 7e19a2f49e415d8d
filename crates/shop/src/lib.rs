//! Storefront context facade.
//!
//! Bundles the state the host application owns (catalog snapshot, config,
//! search bar) and forwards it into the pure collection and detail crates.
//! The catalog and selection stay explicit parameters of the underlying
//! engine, so the filter/sort logic remains testable without this crate.

pub mod config;
pub mod search;
pub mod shop;

pub use config::ShopConfig;
pub use search::SearchState;
pub use shop::Shop;
