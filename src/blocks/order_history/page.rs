//! Order History Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*,
};

use crate::assets::Glyph;
use crate::blocks::order_history::model::{Order, OrderFilter, OrderHistoryProps};
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::composite::dialog::Dialog;
use crate::components::composite::metric_card::MetricCard;
use crate::components::composite::price_line::PriceLine;
use crate::components::composite::status_badge::StatusBadge;
use crate::components::composite::summary_panel::SummaryPanel;
use crate::components::layout::section::Section;
use crate::components::primitives::button::Button;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::link::Link;
use crate::components::primitives::tabs::Tabs;
use crate::domain::date::{format_date, format_short_date};
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::typography::PriceSize;

/// Order history page component
pub struct OrderHistoryPage {
    props: OrderHistoryProps,
    filter: OrderFilter,
    /// Number of the order shown in the detail dialog
    detail: Option<String>,
}

impl EventEmitter<BlockEvent> for OrderHistoryPage {}

impl OrderHistoryPage {
    pub fn new(props: OrderHistoryProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            filter: OrderFilter::default(),
            detail: None,
        }
    }

    fn columns() -> Vec<Column<Order>> {
        vec![
            Column::new("Order", |order: &Order| {
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(order.number.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(CatalogColors::text_muted())
                            .child(format_short_date(order.placed_on)),
                    )
                    .into_any_element()
            })
            .flex_width(1.4),
            Column::new("Status", |order: &Order| {
                StatusBadge::new(order.status).into_any_element()
            })
            .fixed_width(150.0),
            Column::new("Payment", |order: &Order| {
                StatusBadge::new(order.payment).without_glyph().into_any_element()
            })
            .fixed_width(120.0),
            Column::new("Items", |order: &Order| {
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(order.unit_count().to_string())
                    .into_any_element()
            })
            .fixed_width(80.0)
            .align_end(),
            Column::new("Total", |order: &Order| {
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(order.total().to_string())
                    .into_any_element()
            })
            .fixed_width(120.0)
            .align_end(),
        ]
    }

    fn render_stats(&self) -> impl IntoElement {
        div()
            .flex()
            .gap_4()
            .child(
                MetricCard::new("Orders", self.props.count(OrderFilter::All).to_string())
                    .glyph(Glyph::Package),
            )
            .child(
                MetricCard::new("In progress", self.props.count(OrderFilter::InProgress).to_string())
                    .glyph(Glyph::Truck),
            )
            .child(
                MetricCard::new("Total spent", self.props.total_spent().to_string())
                    .glyph(Glyph::CreditCard)
                    .caption("Excludes cancelled and refunded orders"),
            )
    }

    fn render_detail(&self, order: &Order, cx: &mut Context<Self>) -> Dialog {
        let items = order.items.iter().map(|item| {
            div()
                .flex()
                .items_center()
                .justify_between()
                .gap_3()
                .py_2()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .child(div().text_sm().child(format!("{} × {}", item.name, item.quantity)))
                        .when_some(item.variant.clone(), |el, variant| {
                            el.child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(variant),
                            )
                        }),
                )
                .child(
                    PriceLine::new(item.line_total())
                        .size(PriceSize::Small)
                        .hide_discount(),
                )
        });

        let reorder_number = order.number.clone();
        let cancel_number = order.number.clone();
        let can_cancel = order.can_cancel();

        let footer = div()
            .flex()
            .gap_2()
            .when(can_cancel, |el| {
                el.child(Button::destructive("cancel-order", "Cancel order").on_click(
                    cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action(format!("Cancel {cancel_number}")));
                    }),
                ))
            })
            .child(
                Button::outline("reorder", "Buy again")
                    .glyph(Glyph::RotateCcw)
                    .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action(format!("Reorder {reorder_number}")));
                    })),
            )
            .child(Button::new("close-order", "Close").on_click(cx.listener(
                |this, _event: &ClickEvent, _window, cx| {
                    this.detail = None;
                    cx.notify();
                },
            )));

        Dialog::new(format!("Order {}", order.number))
            .description(format!("Placed on {}", format_date(order.placed_on)))
            .width(520.0)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(StatusBadge::new(order.status))
                    .child(StatusBadge::new(order.payment)),
            )
            .child(div().flex().flex_col().children(items))
            .child(SummaryPanel::new(order.summary().lines()))
            .child(
                div()
                    .flex()
                    .items_start()
                    .gap_2()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(glyph_icon(Glyph::MapPin, 14.0, CatalogColors::text_muted()))
                    .child(order.ship_to.clone()),
            )
            .when_some(order.tracking.clone(), |dialog, tracking| {
                dialog.child(
                    div()
                        .flex()
                        .items_center()
                        .gap_2()
                        .text_sm()
                        .child(glyph_icon(Glyph::Truck, 14.0, CatalogColors::text_muted()))
                        .child(format!("{} {}", tracking.carrier, tracking.number))
                        .child(
                            Link::new("track-order", "Track package", tracking.url)
                                .external()
                                .on_click(cx.listener(|_this, href: &SharedString, _window, cx| {
                                    cx.emit(BlockEvent::link(href.to_string()));
                                })),
                        ),
                )
            })
            .footer(footer)
            .on_close(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.detail = None;
                cx.notify();
            }))
    }
}

impl Render for OrderHistoryPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let orders = self.props.filtered(self.filter);
        let numbers: Vec<String> = orders.iter().map(|order| order.number.clone()).collect();
        let selected = OrderFilter::all()
            .iter()
            .position(|filter| *filter == self.filter)
            .unwrap_or_default();

        let tabs = Tabs::new("order-filter")
            .labels(OrderFilter::all().iter().map(|filter| {
                format!("{} ({})", filter.label(), self.props.count(*filter))
            }))
            .selected(selected)
            .on_select(cx.listener(|this, ix: &usize, _window, cx| {
                if let Some(filter) = OrderFilter::all().get(*ix) {
                    this.filter = *filter;
                    cx.notify();
                }
            }));

        let table = DataTable::new("orders")
            .columns(Self::columns())
            .rows(orders)
            .empty_message("No orders in this view")
            .on_row_click(cx.listener(move |this, ix: &usize, _window, cx| {
                if let Some(number) = numbers.get(*ix) {
                    this.detail = Some(number.clone());
                    cx.notify();
                }
            }));

        let dialog = self
            .detail
            .as_deref()
            .and_then(|number| self.props.find(number))
            .cloned()
            .map(|order| self.render_detail(&order, cx));

        Section::new("order-history")
            .title("Order History")
            .description(format!("Past orders for {}", self.props.customer))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(self.render_stats())
                    .child(tabs)
                    .child(table),
            )
            .overlay(dialog)
    }
}
