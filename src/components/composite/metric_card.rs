//! MetricCard Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::domain::progress::percent_change;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Headline number with an optional change versus the previous period
#[derive(IntoElement)]
pub struct MetricCard {
    label: SharedString,
    value: SharedString,
    glyph: Option<Glyph>,
    change: Option<f32>,
    caption: Option<SharedString>,
}

impl MetricCard {
    pub fn new(label: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            glyph: None,
            change: None,
            caption: None,
        }
    }

    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Percent change, positive is up
    pub fn change(mut self, change: Option<f32>) -> Self {
        self.change = change;
        self
    }

    /// Derive the change from the previous and current values
    pub fn compared(self, previous: f64, current: f64) -> Self {
        self.change(percent_change(previous, current))
    }

    pub fn caption(mut self, caption: impl Into<SharedString>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl RenderOnce for MetricCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex_1()
            .min_w(px(180.0))
            .p_5()
            .flex()
            .flex_col()
            .gap_2()
            .bg(CatalogColors::card_bg())
            .border_1()
            .border_color(CatalogColors::border())
            .rounded_lg()
            .shadow_sm()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(CatalogColors::text_muted())
                            .child(self.label),
                    )
                    .when_some(self.glyph, |el, glyph| {
                        el.child(glyph_icon(glyph, 16.0, CatalogColors::text_muted()))
                    }),
            )
            .child(
                div()
                    .text_2xl()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(CatalogColors::text_primary())
                    .child(self.value),
            )
            .when_some(self.change, |el, change| {
                let (tone, glyph) = if change >= 0.0 {
                    (Tone::Success, Glyph::ArrowUp)
                } else {
                    (Tone::Danger, Glyph::ArrowDown)
                };
                let color = tone.colors().fg;
                el.child(
                    div()
                        .flex()
                        .items_center()
                        .gap_1()
                        .text_xs()
                        .text_color(color)
                        .child(glyph_icon(glyph, 12.0, color))
                        .child(format!("{:.1}%", change.abs()))
                        .when_some(self.caption, |el, caption| {
                            el.child(div().text_color(CatalogColors::text_muted()).child(caption))
                        }),
                )
            })
    }
}
