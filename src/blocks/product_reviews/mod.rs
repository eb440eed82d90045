//! Product Reviews Block

pub mod model;
pub mod page;
