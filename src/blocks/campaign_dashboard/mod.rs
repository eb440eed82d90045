//! Campaign Dashboard Block

pub mod model;
pub mod page;
