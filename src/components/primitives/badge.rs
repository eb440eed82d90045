//! Badge Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*, px};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Badge variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Destructive,
}

/// A small pill label
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    variant: BadgeVariant,
    tone: Option<Tone>,
    glyph: Option<Glyph>,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::Default,
            tone: None,
            glyph: None,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Color the badge by a semantic tone, overriding the variant colors
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn secondary(label: impl Into<SharedString>) -> Self {
        Self::new(label).variant(BadgeVariant::Secondary)
    }

    pub fn outline(label: impl Into<SharedString>) -> Self {
        Self::new(label).variant(BadgeVariant::Outline)
    }

    pub fn destructive(label: impl Into<SharedString>) -> Self {
        Self::new(label).variant(BadgeVariant::Destructive)
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg, border) = match self.tone {
            Some(tone) => {
                let colors = tone.colors();
                (colors.bg, colors.fg, colors.border)
            }
            None => match self.variant {
                BadgeVariant::Default => (
                    CatalogColors::primary(),
                    CatalogColors::primary_foreground(),
                    CatalogColors::primary(),
                ),
                BadgeVariant::Secondary => (
                    CatalogColors::secondary(),
                    CatalogColors::secondary_foreground(),
                    CatalogColors::secondary(),
                ),
                BadgeVariant::Outline => (
                    CatalogColors::transparent(),
                    CatalogColors::text_primary(),
                    CatalogColors::border(),
                ),
                BadgeVariant::Destructive => (
                    CatalogColors::destructive_bg(),
                    CatalogColors::destructive_text(),
                    CatalogColors::destructive_bg(),
                ),
            },
        };

        div()
            .flex()
            .flex_shrink_0()
            .items_center()
            .gap_1()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .border_1()
            .border_color(border)
            .bg(bg)
            .text_color(fg)
            .text_xs()
            .font_weight(gpui::FontWeight::MEDIUM)
            .when_some(self.glyph, |el, glyph| el.child(glyph_icon(glyph, 12.0, fg)))
            .child(self.label)
    }
}
