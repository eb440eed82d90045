//! Progress Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px, relative};

use crate::domain::progress::clamp_percent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// A horizontal progress bar taking a 0–100 value
#[derive(IntoElement)]
pub struct Progress {
    value: f32,
    tone: Option<Tone>,
    height: f32,
}

impl Progress {
    /// Create a bar; the value is clamped into `[0, 100]`
    pub fn new(value: f32) -> Self {
        Self {
            value: clamp_percent(value),
            tone: None,
            height: 8.0,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl RenderOnce for Progress {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let fill = self
            .tone
            .map(|tone| tone.colors().solid)
            .unwrap_or_else(CatalogColors::primary);

        div()
            .w_full()
            .h(px(self.height))
            .rounded_full()
            .bg(CatalogColors::progress_track())
            .overflow_hidden()
            .child(
                div()
                    .h_full()
                    .w(relative(self.value / 100.0))
                    .rounded_full()
                    .bg(fill),
            )
    }
}
