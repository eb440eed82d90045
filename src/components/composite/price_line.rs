//! PriceLine Component
//!
//! Current price, the struck-through original and a discount badge. The
//! original and the badge appear only when an original price is given.

use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*};

use crate::components::primitives::badge::Badge;
use crate::domain::line_item::discount_percent;
use crate::domain::money::Money;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;
use crate::theme::typography::{PriceSize, Typography};

#[derive(IntoElement)]
pub struct PriceLine {
    price: Money,
    original: Option<Money>,
    size: PriceSize,
    show_discount: bool,
}

impl PriceLine {
    pub fn new(price: Money) -> Self {
        Self {
            price,
            original: None,
            size: PriceSize::default(),
            show_discount: true,
        }
    }

    pub fn original(mut self, original: Option<Money>) -> Self {
        self.original = original;
        self
    }

    pub fn size(mut self, size: PriceSize) -> Self {
        self.size = size;
        self
    }

    /// Keep the strikethrough but drop the percentage badge
    pub fn hide_discount(mut self) -> Self {
        self.show_discount = false;
        self
    }
}

impl RenderOnce for PriceLine {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let percent = discount_percent(self.price, self.original);
        let text_size = Typography::price(self.size);

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_size(text_size)
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(CatalogColors::text_primary())
                    .child(self.price.to_string()),
            )
            .when_some(self.original, |el, original| {
                el.child(
                    div()
                        .text_sm()
                        .line_through()
                        .text_color(CatalogColors::text_muted())
                        .child(original.to_string()),
                )
            })
            .when_some(percent.filter(|_| self.show_discount), |el, percent| {
                el.child(Badge::new(format!("-{percent}%")).tone(Tone::Danger))
            })
    }
}
