//! ProductRow Component
//!
//! A cart line: thumbnail, name, variant, stock badge, price line, quantity
//! stepper and remove button.

use std::rc::Rc;

use gpui::{
    App, ClickEvent, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString,
    Styled, StyledImage, Window, div, img, prelude::*, px,
};

use crate::assets::Glyph;
use crate::components::composite::price_line::PriceLine;
use crate::components::composite::status_badge::StatusBadge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::components::primitives::icon::glyph_icon;
use crate::domain::line_item::LineItem;
use crate::domain::status::StockStatus;
use crate::theme::colors::CatalogColors;

type QuantityHandler = Rc<dyn Fn(&u32, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct ProductRow {
    id: SharedString,
    item: LineItem,
    on_quantity: Option<QuantityHandler>,
    on_remove: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl ProductRow {
    pub fn new(id: impl Into<SharedString>, item: LineItem) -> Self {
        Self {
            id: id.into(),
            item,
            on_quantity: None,
            on_remove: None,
        }
    }

    /// Handler receiving the requested quantity, never below one
    pub fn on_quantity(mut self, handler: impl Fn(&u32, &mut Window, &mut App) + 'static) -> Self {
        self.on_quantity = Some(Rc::new(handler));
        self
    }

    pub fn on_remove(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_remove = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ProductRow {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let item = self.item;
        let quantity = item.quantity;
        let id = self.id;

        let stepper_button = |suffix: &str, glyph: Glyph, target: u32, enabled: bool| {
            let button = Button::icon(SharedString::from(format!("{id}-{suffix}")), glyph)
                .variant(ButtonVariant::Outline)
                .size(ButtonSize::Sm)
                .disabled(!enabled);
            match self.on_quantity.clone() {
                Some(handler) => button.on_click(move |_event, window, cx| handler(&target, window, cx)),
                None => button,
            }
        };

        let decrement = stepper_button("dec", Glyph::Minus, quantity.saturating_sub(1).max(1), quantity > 1);
        let increment = stepper_button(
            "inc",
            Glyph::Plus,
            quantity.saturating_add(1),
            item.stock != StockStatus::OutOfStock,
        );

        let thumbnail = div()
            .size(px(80.0))
            .flex_shrink_0()
            .rounded_md()
            .overflow_hidden()
            .bg(CatalogColors::secondary())
            .flex()
            .items_center()
            .justify_center()
            .map(|el| match item.image.clone() {
                Some(src) => el.child(img(SharedString::from(src)).size(px(80.0)).object_fit(ObjectFit::Cover)),
                None => el.child(glyph_icon(Glyph::Package, 28.0, CatalogColors::text_muted())),
            });

        let mut remove = Button::icon(SharedString::from(format!("{id}-remove")), Glyph::Trash)
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm);
        if let Some(handler) = self.on_remove {
            remove = remove.on_click(handler);
        }

        div()
            .w_full()
            .flex()
            .gap_4()
            .py_4()
            .border_b_1()
            .border_color(CatalogColors::border())
            .child(thumbnail)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_base()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .text_color(CatalogColors::text_primary())
                            .child(item.name.clone()),
                    )
                    .when_some(item.variant.clone(), |el, variant| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(CatalogColors::text_muted())
                                .child(variant),
                        )
                    })
                    .when(item.stock != StockStatus::InStock, |el| {
                        el.child(div().flex().child(StatusBadge::new(item.stock)))
                    })
                    .child(PriceLine::new(item.price).original(item.original_price)),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_end()
                    .justify_between()
                    .gap_2()
                    .child(
                        div()
                            .text_base()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(CatalogColors::text_primary())
                            .child(item.line_total().to_string()),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(decrement)
                            .child(
                                div()
                                    .w(px(28.0))
                                    .flex()
                                    .justify_center()
                                    .text_sm()
                                    .text_color(CatalogColors::text_primary())
                                    .child(quantity.to_string()),
                            )
                            .child(increment)
                            .child(remove),
                    ),
            )
    }
}
