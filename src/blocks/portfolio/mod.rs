//! Portfolio Block

pub mod model;
pub mod page;
