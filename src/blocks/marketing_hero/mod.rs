//! Marketing Hero Block

pub mod model;
pub mod page;
