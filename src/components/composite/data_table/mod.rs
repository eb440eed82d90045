//! DataTable Component
//!
//! A reusable table over typed rows with per-column cell renderers.

pub mod column;
pub mod table;

pub use column::{Column, ColumnWidth};
pub use table::DataTable;
