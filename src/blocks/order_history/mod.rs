//! Order History Block

pub mod model;
pub mod page;
