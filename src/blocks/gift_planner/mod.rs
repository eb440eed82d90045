//! Gift Planner Block

pub mod model;
pub mod page;
