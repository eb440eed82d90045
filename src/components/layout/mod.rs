//! Layout Components
//!
//! Shell, header, sidebar, activity panel and the section frame blocks
//! render into.

pub mod activity_panel;
pub mod header;
pub mod section;
pub mod shell;
pub mod sidebar;
