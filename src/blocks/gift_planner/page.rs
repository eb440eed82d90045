//! Gift Planner Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::gift_planner::model::{GiftPlannerProps, GiftRecipient};
use crate::components::composite::metric_card::MetricCard;
use crate::components::layout::section::Section;
use crate::components::primitives::avatar::Avatar;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::progress::Progress;
use crate::domain::date::format_short_date;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::tone::Tone;

/// Gift planner page component
pub struct GiftPlannerPage {
    props: GiftPlannerProps,
}

impl EventEmitter<BlockEvent> for GiftPlannerPage {}

impl GiftPlannerPage {
    pub fn new(props: GiftPlannerProps, _cx: &mut Context<Self>) -> Self {
        Self { props }
    }

    fn render_overview(&self) -> impl IntoElement {
        let over = self.props.over_budget_count();

        div()
            .flex()
            .gap_4()
            .child(
                MetricCard::new("Budget", self.props.total_budget().to_string())
                    .glyph(Glyph::CreditCard)
                    .caption(format!("{} recipients", self.props.recipients.len())),
            )
            .child(
                MetricCard::new("Planned", self.props.total_planned().to_string())
                    .glyph(Glyph::Gift)
                    .caption(format!("{} gifts", self.props.gift_count())),
            )
            .child(
                MetricCard::new("Over budget", over.to_string())
                    .glyph(Glyph::AlertTriangle)
                    .caption(if over == 0 {
                        "Everyone is within budget"
                    } else {
                        "Review the highlighted lists"
                    }),
            )
    }

    fn render_recipient(&self, recipient: &GiftRecipient, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let over_budget = recipient.over_budget();
        let tone = if over_budget { Tone::Danger } else { Tone::Success };
        let budget_caption = if over_budget {
            format!("{} over", recipient.planned_total() - recipient.budget)
        } else {
            format!("{} left", recipient.remaining())
        };
        let add_for = recipient.name.clone();

        let items = recipient.items.iter().map(|item| {
            let label = format!("Purchased {}", item.name);
            div()
                .flex()
                .items_center()
                .justify_between()
                .gap_3()
                .child(
                    div()
                        .flex()
                        .items_center()
                        .gap_3()
                        .child(
                            Checkbox::new(SharedString::from(format!(
                                "gift-{}-{}",
                                recipient.id, item.id
                            )))
                            .checked(item.purchased)
                            .on_change(cx.listener(move |_this, checked: &bool, _window, cx| {
                                cx.emit(BlockEvent::toggled(label.clone(), *checked));
                            })),
                        )
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(
                                    div()
                                        .text_sm()
                                        .when(item.purchased, |el| {
                                            el.line_through().text_color(CatalogColors::text_muted())
                                        })
                                        .child(item.name.clone()),
                                )
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(CatalogColors::text_muted())
                                        .child(item.store.clone()),
                                ),
                        ),
                )
                .child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(item.price.to_string()),
                )
        });

        Card::new()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Avatar::new(recipient.name.clone()).size(36.0))
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(recipient.name.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(format!(
                                        "{} · {} {}",
                                        recipient.relationship,
                                        recipient.occasion,
                                        format_short_date(recipient.occasion_date)
                                    )),
                            ),
                    )
                    .when(recipient.is_complete(), |el| {
                        el.child(Badge::new("All bought").tone(Tone::Success).glyph(Glyph::Check))
                    }),
            )
            .child(
                div()
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
                                    .text_color(CatalogColors::text_secondary())
                                    .child(format!(
                                        "{} of {}",
                                        recipient.planned_total(),
                                        recipient.budget
                                    )),
                            )
                            .child(div().text_color(tone.colors().fg).child(budget_caption)),
                    )
                    .child(Progress::new(recipient.budget_progress()).tone(tone)),
            )
            .child(div().flex().flex_col().gap_2().children(items))
            .when_some(recipient.notes.clone(), |card, notes| {
                card.child(
                    div()
                        .flex()
                        .items_start()
                        .gap_2()
                        .p_3()
                        .rounded_md()
                        .bg(Tone::Warning.colors().bg)
                        .text_xs()
                        .text_color(Tone::Warning.colors().fg)
                        .child(glyph_icon(Glyph::MessageSquare, 12.0, Tone::Warning.colors().fg))
                        .child(notes),
                )
            })
            .footer(
                Button::ghost(SharedString::from(format!("add-gift-{}", recipient.id)), "Add gift")
                    .size(ButtonSize::Sm)
                    .glyph(Glyph::Plus)
                    .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action(format!("Add gift for {add_for}")));
                    })),
            )
    }
}

impl Render for GiftPlannerPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let recipients = self.props.recipients.clone();
        let cards: Vec<_> = recipients
            .iter()
            .map(|recipient| div().w(px(340.0)).child(self.render_recipient(recipient, cx)))
            .collect();

        Section::new("gift-planner")
            .title("Gift Planner")
            .description(self.props.title.clone())
            .action(
                Button::new("add-recipient", "Add recipient")
                    .glyph(Glyph::User)
                    .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action("Add recipient"));
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(self.render_overview())
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(CatalogColors::text_secondary())
                                    .child(format!(
                                        "{} of {} planned overall",
                                        self.props.total_planned(),
                                        self.props.total_budget()
                                    )),
                            )
                            .child(Progress::new(self.props.overall_progress())),
                    )
                    .child(div().flex().flex_wrap().items_start().gap_4().children(cards)),
            )
    }
}
