//! Product-detail view state: gallery image and size selection.
//!
//! The state is an explicit immutable value; every transition returns a new
//! value instead of mutating shared bindings.

pub mod view;

pub use view::{CartIntent, DetailError, ProductView};
