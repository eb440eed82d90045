//! Tone - Semantic Color Roles
//!
//! Badges, progress bars and metric deltas pick a tone rather than raw
//! colors, so a status table only has to name one.

use gpui::Rgba;

use crate::theme::colors::CatalogColors;

/// Semantic color role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
    Accent,
}

/// Resolved colors for a tone
#[derive(Debug, Clone, Copy)]
pub struct ToneColors {
    /// Soft background for badges and chips
    pub bg: Rgba,
    /// Foreground text/icon color
    pub fg: Rgba,
    /// Border color
    pub border: Rgba,
    /// Solid fill for progress bars and dots
    pub solid: Rgba,
}

impl Tone {
    pub fn colors(self) -> ToneColors {
        match self {
            Tone::Neutral => ToneColors {
                bg: gpui::rgb(0xf4f4f5),
                fg: gpui::rgb(0x3f3f46),
                border: gpui::rgb(0xd4d4d8),
                solid: CatalogColors::text_muted(),
            },
            Tone::Info => ToneColors {
                bg: gpui::rgb(0xeff6ff),
                fg: gpui::rgb(0x1d4ed8),
                border: gpui::rgb(0xbfdbfe),
                solid: CatalogColors::info(),
            },
            Tone::Success => ToneColors {
                bg: gpui::rgb(0xf0fdf4),
                fg: gpui::rgb(0x15803d),
                border: gpui::rgb(0xbbf7d0),
                solid: CatalogColors::success(),
            },
            Tone::Warning => ToneColors {
                bg: gpui::rgb(0xfffbeb),
                fg: gpui::rgb(0xb45309),
                border: gpui::rgb(0xfde68a),
                solid: CatalogColors::warning(),
            },
            Tone::Danger => ToneColors {
                bg: gpui::rgb(0xfef2f2),
                fg: gpui::rgb(0xb91c1c),
                border: gpui::rgb(0xfecaca),
                solid: CatalogColors::danger(),
            },
            Tone::Accent => ToneColors {
                bg: gpui::rgb(0xf5f3ff),
                fg: gpui::rgb(0x6d28d9),
                border: gpui::rgb(0xddd6fe),
                solid: CatalogColors::accent(),
            },
        }
    }
}
