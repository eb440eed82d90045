//! Shopping Cart Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::shopping_cart::model::ShoppingCartProps;
use crate::components::composite::product_row::ProductRow;
use crate::components::composite::summary_panel::SummaryPanel;
use crate::components::layout::section::Section;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::input::Input;
use crate::components::primitives::link::Link;
use crate::components::primitives::progress::Progress;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Shopping cart page component
pub struct ShoppingCartPage {
    props: ShoppingCartProps,
}

impl EventEmitter<BlockEvent> for ShoppingCartPage {}

impl ShoppingCartPage {
    pub fn new(props: ShoppingCartProps, _cx: &mut Context<Self>) -> Self {
        Self { props }
    }

    fn render_items(&self, cx: &mut Context<Self>) -> Vec<ProductRow> {
        self.props
            .items
            .iter()
            .map(|item| {
                let name = item.name.clone();
                let removed = item.name.clone();
                ProductRow::new(SharedString::from(format!("cart-{}", item.id)), item.clone())
                    .on_quantity(cx.listener(move |_this, quantity: &u32, _window, cx| {
                        cx.emit(BlockEvent::QuantityChanged {
                            item: name.clone(),
                            quantity: *quantity,
                        });
                    }))
                    .on_remove(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::ItemRemoved {
                            item: removed.clone(),
                        });
                    }))
            })
            .collect()
    }

    fn render_shipping_progress(&self) -> impl IntoElement {
        let message = match self.props.amount_to_free_shipping() {
            Some(remaining) => format!("Add {remaining} more for free shipping"),
            None => "You've unlocked free shipping".to_string(),
        };
        let tone = if self.props.qualifies_for_free_shipping() {
            Tone::Success
        } else {
            Tone::Info
        };

        div()
            .p_4()
            .rounded_md()
            .bg(tone.colors().bg)
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .text_sm()
                    .text_color(tone.colors().fg)
                    .child(glyph_icon(Glyph::Truck, 16.0, tone.colors().fg))
                    .child(message),
            )
            .child(Progress::new(self.props.free_shipping_progress()).tone(tone))
    }

    fn render_promo(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let applied = self.props.promo.clone();
        let discount = self.props.applied_discount();

        div()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .items_end()
                    .gap_2()
                    .child(
                        div().flex_1().child(
                            Input::new("Enter promo code")
                                .label("Promo code")
                                .glyph(Glyph::Ticket),
                        ),
                    )
                    .child(
                        Button::outline("apply-promo", "Apply").on_click(cx.listener(
                            |_this, _event: &ClickEvent, _window, cx| {
                                cx.emit(BlockEvent::action("Apply promo code"));
                            },
                        )),
                    ),
            )
            .when_some(applied, |el, promo| {
                el.child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .child(Badge::new(promo.code).tone(Tone::Success).glyph(Glyph::Check))
                        .child(
                            div()
                                .text_xs()
                                .text_color(CatalogColors::text_muted())
                                .child(format!("{discount} off applied")),
                        ),
                )
            })
    }

    fn render_empty(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        div()
            .py_16()
            .flex()
            .flex_col()
            .items_center()
            .gap_3()
            .child(glyph_icon(Glyph::ShoppingCart, 40.0, CatalogColors::text_muted()))
            .child(
                div()
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("Your cart is empty"),
            )
            .child(
                Link::new("empty-continue", "Continue shopping", "/products").on_click(
                    cx.listener(|_this, href: &SharedString, _window, cx| {
                        cx.emit(BlockEvent::link(href.to_string()));
                    }),
                ),
            )
    }
}

impl Render for ShoppingCartPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let unit_count = self.props.unit_count();
        let section = Section::new("shopping-cart")
            .title("Shopping Cart")
            .description(format!(
                "{unit_count} {} in your cart",
                if unit_count == 1 { "item" } else { "items" }
            ));

        if self.props.is_empty() {
            return section.child(self.render_empty(cx));
        }

        let rows = self.render_items(cx);
        let shipping = self.render_shipping_progress();
        let promo = self.render_promo(cx);
        let total = self.props.summary().total;

        let checkout = div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                Button::new("checkout", "Proceed to checkout")
                    .size(ButtonSize::Lg)
                    .glyph(Glyph::Lock)
                    .full_width()
                    .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action(format!("Checkout {total}")));
                    })),
            )
            .child(
                div().flex().justify_center().child(
                    Link::new("continue-shopping", "Continue shopping", "/products").on_click(
                        cx.listener(|_this, href: &SharedString, _window, cx| {
                            cx.emit(BlockEvent::link(href.to_string()));
                        }),
                    ),
                ),
            );

        section.child(
            div()
                .flex()
                .items_start()
                .gap_8()
                .child(
                    div()
                        .flex_1()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .child(shipping)
                        .child(div().flex().flex_col().children(rows))
                        .child(
                            div().flex().child(
                                Button::ghost("clear-cart", "Clear cart")
                                    .glyph(Glyph::Trash)
                                    .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                                        cx.emit(BlockEvent::action("Clear cart"));
                                    })),
                            ),
                        ),
                )
                .child(
                    div()
                        .w(px(360.0))
                        .flex_shrink_0()
                        .flex()
                        .flex_col()
                        .gap_4()
                        .child(Card::new().child(promo))
                        .child(SummaryPanel::new(self.props.summary_lines()).footer(checkout)),
                ),
        )
    }
}
