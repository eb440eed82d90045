//! Composite Components
//!
//! Small assemblies of primitives driven by one typed record.

pub mod data_table;
pub mod dialog;
pub mod metric_card;
pub mod price_line;
pub mod product_row;
pub mod rating_breakdown;
pub mod star_rating;
pub mod status_badge;
pub mod summary_panel;
