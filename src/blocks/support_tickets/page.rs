//! Support Tickets Page
//!
//! Per-priority counters above an accordion of tickets. One ticket is
//! expanded at a time.

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*,
};

use crate::assets::Glyph;
use crate::blocks::support_tickets::model::{SupportTicketsProps, Ticket, TicketMessage};
use crate::components::composite::status_badge::StatusBadge;
use crate::components::layout::section::Section;
use crate::components::primitives::accordion::{Accordion, AccordionItem};
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::icon::glyph_icon;
use crate::domain::date::{format_date, format_short_date};
use crate::domain::status::TicketPriority;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::status::StatusStyle;
use crate::theme::tone::Tone;

/// Support tickets page component
pub struct SupportTicketsPage {
    props: SupportTicketsProps,
    expanded: Option<String>,
}

impl EventEmitter<BlockEvent> for SupportTicketsPage {}

impl SupportTicketsPage {
    pub fn new(props: SupportTicketsProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            expanded: None,
        }
    }

    fn render_counts(&self) -> impl IntoElement {
        div()
            .flex()
            .gap_4()
            .children(TicketPriority::all().iter().rev().map(|priority| {
                let appearance = priority.appearance();
                let colors = appearance.tone.colors();
                div()
                    .flex_1()
                    .p_4()
                    .rounded_lg()
                    .border_1()
                    .border_color(colors.border)
                    .bg(colors.bg)
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .text_sm()
                            .text_color(colors.fg)
                            .child(glyph_icon(appearance.glyph, 14.0, colors.fg))
                            .child(appearance.label),
                    )
                    .child(
                        div()
                            .text_xl()
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(colors.fg)
                            .child(self.props.count_by_priority(*priority).to_string()),
                    )
            }))
    }

    fn render_message(message: &TicketMessage) -> impl IntoElement {
        let bg = if message.from_customer {
            CatalogColors::secondary()
        } else {
            Tone::Info.colors().bg
        };

        div()
            .flex()
            .gap_3()
            .child(Avatar::new(message.author.clone()).size(28.0))
            .child(
                div()
                    .flex_1()
                    .p_3()
                    .rounded_md()
                    .bg(bg)
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .text_xs()
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(message.author.clone()),
                            )
                            .child(
                                div()
                                    .text_color(CatalogColors::text_muted())
                                    .child(format_short_date(message.sent_on)),
                            ),
                    )
                    .child(div().text_sm().child(message.body.clone())),
            )
    }

    fn render_details(&self, ticket: &Ticket, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let assign_id = ticket.id.clone();
        let resolve_id = ticket.id.clone();
        let reply_id = ticket.id.clone();
        let unassigned = ticket.assignee.is_none();
        let active = ticket.is_active();

        let meta = |label: &'static str, value: String| {
            div()
                .flex()
                .gap_2()
                .text_xs()
                .child(div().text_color(CatalogColors::text_muted()).child(label))
                .child(div().text_color(CatalogColors::text_secondary()).child(value))
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_x_6()
                    .gap_y_1()
                    .child(meta("Customer", ticket.customer.clone()))
                    .child(meta("Category", ticket.category.clone()))
                    .child(meta("Assignee", ticket.assignee_label().to_string()))
                    .child(meta("Opened", format_date(ticket.opened_on))),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(ticket.messages.iter().map(Self::render_message)),
            )
            .when(active, |el| {
                el.child(
                    div()
                        .flex()
                        .gap_2()
                        .child(
                            Button::new(SharedString::from(format!("reply-{}", ticket.id)), "Reply")
                                .size(ButtonSize::Sm)
                                .glyph(Glyph::MessageSquare)
                                .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                                    cx.emit(BlockEvent::action(format!("Reply to {reply_id}")));
                                })),
                        )
                        .when(unassigned, |el| {
                            el.child(
                                Button::outline(SharedString::from(format!("assign-{}", ticket.id)), "Assign to me")
                                    .size(ButtonSize::Sm)
                                    .glyph(Glyph::User)
                                    .on_click(cx.listener(
                                        move |_this, _event: &ClickEvent, _window, cx| {
                                            cx.emit(BlockEvent::action(format!("Assign {assign_id}")));
                                        },
                                    )),
                            )
                        })
                        .child(
                            Button::ghost(SharedString::from(format!("resolve-{}", ticket.id)), "Mark resolved")
                                .size(ButtonSize::Sm)
                                .glyph(Glyph::CheckCircle)
                                .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                                    cx.emit(BlockEvent::action(format!("Resolve {resolve_id}")));
                                })),
                        ),
                )
            })
    }

    fn render_subtitle(ticket: &Ticket) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .text_xs()
                    .text_color(CatalogColors::text_muted())
                    .child(ticket.id.clone()),
            )
            .child(StatusBadge::new(ticket.priority))
            .child(StatusBadge::new(ticket.status).without_glyph())
            .when(ticket.awaiting_reply(), |el| {
                el.child(Badge::outline("Awaiting reply").tone(Tone::Warning))
            })
    }
}

impl Render for SupportTicketsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let tickets = self.props.sorted();
        let ids: Vec<String> = tickets.iter().map(|ticket| ticket.id.clone()).collect();

        let items: Vec<AccordionItem> = tickets
            .iter()
            .map(|ticket| {
                AccordionItem::new(ticket.subject.clone(), self.render_details(ticket, cx))
                    .subtitle(Self::render_subtitle(ticket))
                    .open(self.expanded.as_deref() == Some(ticket.id.as_str()))
            })
            .collect();

        let accordion = Accordion::new("tickets")
            .items(items)
            .on_toggle(cx.listener(move |this, ix: &usize, _window, cx| {
                let Some(id) = ids.get(*ix) else {
                    return;
                };
                this.expanded = if this.expanded.as_ref() == Some(id) {
                    None
                } else {
                    Some(id.clone())
                };
                cx.notify();
            }));

        Section::new("support-tickets")
            .title("Support Tickets")
            .description(format!(
                "{} active, {} unassigned",
                self.props.active_count(),
                self.props.unassigned_count()
            ))
            .action(
                Button::new("new-ticket", "New ticket")
                    .glyph(Glyph::Plus)
                    .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action("New ticket"));
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(self.render_counts())
                    .child(Card::new().child(accordion)),
            )
    }
}
