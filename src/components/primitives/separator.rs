//! Separator Component

use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, px};

use crate::theme::colors::CatalogColors;

/// A one-pixel rule
#[derive(IntoElement)]
pub struct Separator {
    vertical: bool,
}

impl Separator {
    pub fn horizontal() -> Self {
        Self { vertical: false }
    }

    pub fn vertical() -> Self {
        Self { vertical: true }
    }
}

impl RenderOnce for Separator {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let rule = div().flex_shrink_0().bg(CatalogColors::border());
        if self.vertical {
            rule.w(px(1.0)).h_full()
        } else {
            rule.h(px(1.0)).w_full()
        }
    }
}
