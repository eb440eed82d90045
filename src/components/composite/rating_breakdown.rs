//! RatingBreakdown Component

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px};

use crate::components::primitives::progress::Progress;
use crate::domain::rating::RatingDistribution;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Bars showing the share of reviews at each star level
#[derive(IntoElement)]
pub struct RatingBreakdown {
    distribution: RatingDistribution,
}

impl RatingBreakdown {
    pub fn new(distribution: RatingDistribution) -> Self {
        Self { distribution }
    }
}

impl RenderOnce for RatingBreakdown {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(self.distribution.rows().into_iter().map(|row| {
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .text_sm()
                    .child(
                        div()
                            .w(px(48.0))
                            .text_color(CatalogColors::text_secondary())
                            .child(format!("{} star", row.stars)),
                    )
                    .child(
                        div()
                            .flex_1()
                            .child(Progress::new(row.percent).tone(Tone::Warning).height(8.0)),
                    )
                    .child(
                        div()
                            .w(px(40.0))
                            .text_color(CatalogColors::text_muted())
                            .child(format!("{}%", row.percent)),
                    )
            }))
    }
}
