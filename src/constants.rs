//! UI Constants
//!
//! Centralized UI constants for consistent layout across the catalog.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Collapsed sidebar width in pixels
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;

/// Header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Activity panel heights
pub const ACTIVITY_PANEL_HEIGHT: f32 = 160.0;
pub const ACTIVITY_PANEL_COLLAPSED_HEIGHT: f32 = 32.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1400.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Bounded activity log capacity
pub const ACTIVITY_LOG_CAPACITY: usize = 200;

/// Activity entries shown in the panel
pub const ACTIVITY_PANEL_VISIBLE: usize = 50;

/// Maximum width of a block's content column
pub const BLOCK_MAX_WIDTH: f32 = 1120.0;
