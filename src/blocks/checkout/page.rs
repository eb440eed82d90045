//! Checkout Page
//!
//! Contact and shipping fields, a delivery method radio group, payment
//! selection and the order summary for the chosen delivery method.

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::checkout::model::{CheckoutProps, PaymentMethod};
use crate::components::composite::price_line::PriceLine;
use crate::components::composite::summary_panel::SummaryPanel;
use crate::components::layout::section::Section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::input::Input;
use crate::components::primitives::radio_group::{RadioGroup, RadioOption};
use crate::components::primitives::select::{Select, SelectOption};
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::PriceSize;

/// Checkout page component
pub struct CheckoutPage {
    props: CheckoutProps,
    delivery: usize,
    payment: PaymentMethod,
    payment_open: bool,
    save_info: bool,
}

impl EventEmitter<BlockEvent> for CheckoutPage {}

impl CheckoutPage {
    pub fn new(props: CheckoutProps, _cx: &mut Context<Self>) -> Self {
        let payment = props
            .payment_methods
            .first()
            .copied()
            .unwrap_or(PaymentMethod::Card);
        Self {
            props,
            delivery: 0,
            payment,
            payment_open: false,
            save_info: true,
        }
    }

    fn select_delivery(&mut self, ix: usize, cx: &mut Context<Self>) {
        if self.delivery == ix {
            return;
        }
        self.delivery = ix;
        if let Some(method) = self.props.delivery_methods.get(ix) {
            cx.emit(BlockEvent::selected("Delivery", method.label.clone()));
        }
        cx.notify();
    }

    fn select_payment(&mut self, value: &str, cx: &mut Context<Self>) {
        self.payment_open = false;
        if let Some(method) = PaymentMethod::from_value(value) {
            self.payment = method;
            cx.emit(BlockEvent::selected("Payment", method.label()));
        }
        cx.notify();
    }

    fn render_contact(&self) -> impl IntoElement {
        let contact = &self.props.contact;
        let mut phone = Input::new("Phone (optional)").label("Phone").glyph(Glyph::User);
        if let Some(value) = contact.phone.clone() {
            phone = phone.value(value);
        }

        Card::new()
            .title("Contact information")
            .child(
                Input::new("you@example.com")
                    .label("Email")
                    .glyph(Glyph::Mail)
                    .value(contact.email.clone()),
            )
            .child(phone)
    }

    fn render_address(&self) -> impl IntoElement {
        let address = &self.props.address;
        let mut line2 = Input::new("Apartment, suite, etc. (optional)").label("Address line 2");
        if let Some(value) = address.line2.clone() {
            line2 = line2.value(value);
        }

        Card::new()
            .title("Shipping address")
            .child(Input::new("Full name").label("Name").value(address.name.clone()))
            .child(
                Input::new("Street address")
                    .label("Address")
                    .glyph(Glyph::MapPin)
                    .value(address.line1.clone()),
            )
            .child(line2)
            .child(
                div()
                    .flex()
                    .gap_3()
                    .child(Input::new("City").label("City").value(address.city.clone()))
                    .child(Input::new("State").label("State").value(address.region.clone()))
                    .child(
                        Input::new("ZIP")
                            .label("Postal code")
                            .value(address.postal_code.clone()),
                    ),
            )
            .child(Input::new("Country").label("Country").value(address.country.clone()))
    }

    fn render_delivery(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let options = self
            .props
            .delivery_methods
            .iter()
            .map(|method| {
                RadioOption::new(method.label.clone())
                    .description(method.estimate.clone())
                    .trailing(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(method.cost_label()),
                    )
            })
            .collect();

        Card::new().title("Delivery method").child(
            RadioGroup::new("delivery-method", options)
                .selected(self.delivery)
                .on_change(cx.listener(|this, ix: &usize, _window, cx| {
                    this.select_delivery(*ix, cx);
                })),
        )
    }

    fn render_payment(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let options = self
            .props
            .payment_methods
            .iter()
            .map(|method| SelectOption::new(method.value(), method.label()))
            .collect();

        Card::new()
            .title("Payment")
            .description("All transactions are secure and encrypted.")
            .child(
                Select::new("payment-method")
                    .label("Payment method")
                    .options(options)
                    .selected(self.payment.value())
                    .open(self.payment_open)
                    .on_toggle(cx.listener(|this, open: &bool, _window, cx| {
                        this.payment_open = *open;
                        cx.notify();
                    }))
                    .on_select(cx.listener(|this, value: &String, _window, cx| {
                        this.select_payment(value, cx);
                    })),
            )
            .when(self.payment.needs_card_details(), |card| {
                card.child(
                    Input::new("1234 1234 1234 1234")
                        .label("Card number")
                        .glyph(Glyph::CreditCard),
                )
                .child(
                    div()
                        .flex()
                        .gap_3()
                        .child(Input::new("MM / YY").label("Expiry"))
                        .child(Input::new("CVC").label("CVC").value("123").masked()),
                )
            })
    }

    fn render_order(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let total = self.props.summary(self.delivery).total;

        let items = self.props.items.iter().map(|item| {
            div()
                .flex()
                .items_center()
                .justify_between()
                .gap_3()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .child(div().text_sm().font_weight(gpui::FontWeight::MEDIUM).child(item.name.clone()))
                        .when_some(item.variant.clone(), |el, variant| {
                            el.child(div().text_xs().text_color(CatalogColors::text_muted()).child(variant))
                        }),
                )
                .child(
                    PriceLine::new(item.price)
                        .original(item.original_price)
                        .size(PriceSize::Small)
                        .hide_discount(),
                )
        });

        let place_order = Button::new("place-order", format!("Place order · {total}"))
            .size(ButtonSize::Lg)
            .glyph(Glyph::Lock)
            .full_width()
            .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                cx.emit(BlockEvent::action(format!("Place order {total}")));
            }));

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(Card::new().title("Your order").gap(12.0).children(items))
            .child(SummaryPanel::new(self.props.summary_lines(self.delivery)).footer(place_order))
    }
}

impl Render for CheckoutPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let instructions = self.props.instructions.clone();
        let save_info = self.save_info;

        let delivery = self.render_delivery(cx);
        let payment = self.render_payment(cx);
        let order = self.render_order(cx);

        Section::new("checkout")
            .title("Checkout")
            .description("Review your details and place your order")
            .child(
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
                            .child(self.render_contact())
                            .child(self.render_address())
                            .child(delivery)
                            .child(payment)
                            .when_some(instructions, |el, instructions| {
                                el.child(
                                    Card::new().title("Delivery instructions").child(
                                        div()
                                            .flex()
                                            .items_start()
                                            .gap_2()
                                            .p_3()
                                            .rounded_md()
                                            .bg(CatalogColors::secondary())
                                            .text_sm()
                                            .text_color(CatalogColors::text_secondary())
                                            .child(glyph_icon(Glyph::MessageSquare, 14.0, CatalogColors::text_muted()))
                                            .child(instructions),
                                    ),
                                )
                            })
                            .child(
                                Checkbox::new("save-info")
                                    .label("Save this information for next time")
                                    .checked(save_info)
                                    .on_change(cx.listener(|this, checked: &bool, _window, cx| {
                                        this.save_info = *checked;
                                        cx.emit(BlockEvent::toggled("Save checkout details", *checked));
                                        cx.notify();
                                    })),
                            ),
                    )
                    .child(div().w(px(380.0)).flex_shrink_0().child(order)),
            )
    }
}
