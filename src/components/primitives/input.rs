//! Input Component
//!
//! A labelled, display-only text field. Blocks are showcases, so the field
//! renders its value or placeholder without an editing buffer.

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;

/// A labelled text field
#[derive(IntoElement)]
pub struct Input {
    label: Option<SharedString>,
    value: Option<SharedString>,
    placeholder: SharedString,
    glyph: Option<Glyph>,
    masked: bool,
}

impl Input {
    pub fn new(placeholder: impl Into<SharedString>) -> Self {
        Self {
            label: None,
            value: None,
            placeholder: placeholder.into(),
            glyph: None,
            masked: false,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Leading glyph inside the field
    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Render the value as bullets
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}

impl RenderOnce for Input {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (text, text_color) = match self.value {
            Some(value) if self.masked => (
                SharedString::from("•".repeat(value.chars().count())),
                CatalogColors::text_primary(),
            ),
            Some(value) => (value, CatalogColors::text_primary()),
            None => (self.placeholder, CatalogColors::input_placeholder()),
        };

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1p5()
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            })
            .child(
                div()
                    .w_full()
                    .h_9()
                    .px_3()
                    .flex()
                    .items_center()
                    .gap_2()
                    .bg(CatalogColors::input_bg())
                    .border_1()
                    .border_color(CatalogColors::input_border())
                    .rounded_md()
                    .text_sm()
                    .text_color(text_color)
                    .when_some(self.glyph, |el, glyph| {
                        el.child(glyph_icon(glyph, 14.0, CatalogColors::text_muted()))
                    })
                    .child(text),
            )
    }
}
