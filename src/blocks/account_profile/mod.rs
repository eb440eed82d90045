//! Account Profile Block

pub mod model;
pub mod page;
