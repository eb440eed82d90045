//! Colors - Catalog Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Catalog color palette - All colors are accessed via associated functions
pub struct CatalogColors;

impl CatalogColors {
    // Brand colors
    /// Primary brand color - near black, used by default buttons and badges
    pub fn primary() -> Rgba { rgb(0x18181b) }
    /// Text on primary
    pub fn primary_foreground() -> Rgba { rgb(0xfafafa) }
    /// Secondary surface (secondary buttons, muted badges)
    pub fn secondary() -> Rgba { rgb(0xf4f4f5) }
    /// Text on secondary
    pub fn secondary_foreground() -> Rgba { rgb(0x18181b) }
    /// Accent - Violet
    pub fn accent() -> Rgba { rgb(0x7c3aed) }

    // Background colors
    /// Main window background
    pub fn background() -> Rgba { rgb(0xf4f4f5) }
    /// Block canvas background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Card surface
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xfafafa) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x18181b) }
    /// Activity panel background
    pub fn activity_panel_bg() -> Rgba { rgb(0x1c1917) }
    /// Hero gradient stand-in
    pub fn hero_bg() -> Rgba { rgb(0x1e1b4b) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x09090b) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x52525b) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x71717a) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Link text
    pub fn link() -> Rgba { rgb(0x2563eb) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Blue
    pub fn info() -> Rgba { rgb(0x2563eb) }
    /// Star fill - Amber
    pub fn star() -> Rgba { rgb(0xf59e0b) }
    /// Empty star
    pub fn star_empty() -> Rgba { rgb(0xd4d4d8) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe4e4e7) }
    /// Focused border
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Button colors
    /// Destructive button background
    pub fn destructive_bg() -> Rgba { rgb(0xdc2626) }
    /// Destructive button text
    pub fn destructive_text() -> Rgba { rgb(0xffffff) }
    /// Ghost hover
    pub fn ghost_hover() -> Rgba { rgb(0xf4f4f5) }
    /// Transparent
    pub fn transparent() -> Rgba { rgba(0x00000000) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xfafafa) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf4f4f5) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd4d4d8) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0xa1a1aa) }

    // Progress colors
    /// Progress track
    pub fn progress_track() -> Rgba { rgb(0xe4e4e7) }
    /// Dialog backdrop
    pub fn backdrop() -> Rgba { rgba(0x00000088) }
}
