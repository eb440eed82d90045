//! Helper Utilities
//!
//! Common utilities used across the application.

mod bounded;
mod element_id;
mod fs;

pub use bounded::*;
pub use element_id::*;
pub use fs::*;
