//! Domain - Pure View-Model Records and Display Arithmetic
//!
//! These types don't depend on GPUI. Blocks build their view-models from
//! them and the composite components only format what they are handed.

pub mod date;
pub mod line_item;
pub mod money;
pub mod progress;
pub mod rating;
pub mod status;
pub mod summary;
