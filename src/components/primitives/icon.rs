//! Glyph Icon

use gpui::{Rgba, Styled, px};
use gpui_component::Icon;

use crate::assets::Glyph;

/// Render a glyph at a pixel size in a color
pub fn glyph_icon(glyph: Glyph, size: f32, color: Rgba) -> Icon {
    Icon::from(glyph).size(px(size)).text_color(color)
}
