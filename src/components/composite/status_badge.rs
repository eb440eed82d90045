//! StatusBadge Component

use gpui::{App, IntoElement, RenderOnce, Window};

use crate::components::primitives::badge::Badge;
use crate::theme::status::StatusStyle;

/// Badge whose label, tone and glyph come from a status appearance table
#[derive(IntoElement)]
pub struct StatusBadge<S: StatusStyle> {
    status: S,
    show_glyph: bool,
}

impl<S: StatusStyle> StatusBadge<S> {
    pub fn new(status: S) -> Self {
        Self {
            status,
            show_glyph: true,
        }
    }

    pub fn without_glyph(mut self) -> Self {
        self.show_glyph = false;
        self
    }
}

impl<S: StatusStyle> RenderOnce for StatusBadge<S> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let appearance = self.status.appearance();
        let badge = Badge::new(appearance.label).tone(appearance.tone);
        if self.show_glyph {
            badge.glyph(appearance.glyph)
        } else {
            badge
        }
    }
}
