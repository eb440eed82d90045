//! StarRating Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::domain::rating::{MAX_STARS, RatingScale, StarFill};
use crate::theme::colors::CatalogColors;

/// Row of five stars filled from a score
#[derive(IntoElement)]
pub struct StarRating {
    fill: StarFill,
    size: f32,
    caption: Option<String>,
}

impl StarRating {
    /// Score on the five-point scale
    pub fn new(score: f32) -> Self {
        Self::scaled(score, RatingScale::FivePoint)
    }

    pub fn scaled(score: f32, scale: RatingScale) -> Self {
        Self {
            fill: StarFill::from_score(score, scale),
            size: 16.0,
            caption: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Text after the stars, such as "4.6" or "(128)"
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl RenderOnce for StarRating {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let fill = self.fill;
        let size = self.size;

        div()
            .flex()
            .items_center()
            .gap_0p5()
            .children((0..MAX_STARS).map(move |index| {
                let color = if fill.is_filled(index) {
                    CatalogColors::star()
                } else {
                    CatalogColors::star_empty()
                };
                glyph_icon(Glyph::Star, size, color)
            }))
            .when_some(self.caption, |el, caption| {
                el.child(
                    div()
                        .ml_1()
                        .text_sm()
                        .text_color(CatalogColors::text_muted())
                        .child(caption),
                )
            })
    }
}
