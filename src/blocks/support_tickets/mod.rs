//! Support Tickets Block

pub mod model;
pub mod page;
