//! Shopping Cart Block

pub mod model;
pub mod page;
