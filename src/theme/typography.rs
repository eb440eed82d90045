//! Typography - Font Sizes Shared by Primitives

use gpui::{Pixels, px};

/// Typography scale
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;
    pub const TEXT_HERO: f32 = 48.0;

    /// Size for a price at the given emphasis
    pub fn price(size: PriceSize) -> Pixels {
        match size {
            PriceSize::Small => px(Self::TEXT_SM),
            PriceSize::Medium => px(Self::TEXT_BASE),
            PriceSize::Large => px(Self::TEXT_2XL),
        }
    }
}

/// Emphasis of a price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceSize {
    Small,
    #[default]
    Medium,
    Large,
}
