//! Integrations Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::blocks::integrations::model::{Integration, IntegrationFilter, IntegrationsProps};
use crate::components::composite::status_badge::StatusBadge;
use crate::components::layout::section::Section;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::checkbox::Switch;
use crate::components::primitives::icon::glyph_icon;
use crate::components::primitives::link::Link;
use crate::components::primitives::progress::Progress;
use crate::components::primitives::tabs::Tabs;
use crate::domain::date::format_short_date;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::status::StatusStyle;
use crate::theme::tone::Tone;

/// Integrations page component
pub struct IntegrationsPage {
    props: IntegrationsProps,
    filter: IntegrationFilter,
}

impl EventEmitter<BlockEvent> for IntegrationsPage {}

impl IntegrationsPage {
    pub fn new(props: IntegrationsProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            filter: IntegrationFilter::default(),
        }
    }

    fn render_card(&self, integration: &Integration, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let name = integration.name.clone();
        let configure_name = integration.name.clone();
        let connected = integration.connected;
        let health_tone = integration.health.appearance().tone;

        let header = div()
            .flex()
            .items_start()
            .justify_between()
            .gap_3()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(40.0))
                            .flex_shrink_0()
                            .rounded_md()
                            .bg(CatalogColors::secondary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(glyph_icon(integration.glyph, 20.0, CatalogColors::text_primary())),
                    )
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .child(integration.name.clone()),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(integration.category.clone()),
                            ),
                    ),
            )
            .child(
                Switch::new(SharedString::from(format!("connect-{}", integration.id)))
                    .on(connected)
                    .on_change(cx.listener(move |_this, on: &bool, _window, cx| {
                        cx.emit(BlockEvent::toggled(name.clone(), *on));
                    })),
            );

        let uptime = connected.then(|| {
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .flex()
                        .justify_between()
                        .text_xs()
                        .text_color(CatalogColors::text_muted())
                        .child("Uptime (30 days)")
                        .child(integration.uptime_label()),
                )
                .child(
                    Progress::new(integration.uptime_progress())
                        .tone(health_tone)
                        .height(6.0),
                )
        });

        let footer = div()
            .flex()
            .items_center()
            .justify_between()
            .child(
                Link::new(
                    SharedString::from(format!("docs-{}", integration.id)),
                    "Documentation",
                    integration.docs_url.clone(),
                )
                .external()
                .on_click(cx.listener(|_this, href: &SharedString, _window, cx| {
                    cx.emit(BlockEvent::link(href.to_string()));
                })),
            )
            .when(connected, |el| {
                el.child(
                    Button::ghost(SharedString::from(format!("configure-{}", integration.id)), "Configure")
                        .size(ButtonSize::Sm)
                        .glyph(Glyph::Settings)
                        .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                            cx.emit(BlockEvent::action(format!("Configure {configure_name}")));
                        })),
                )
            });

        Card::new()
            .child(header)
            .child(
                div()
                    .text_sm()
                    .text_color(CatalogColors::text_secondary())
                    .child(integration.description.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(StatusBadge::new(integration.health))
                    .when_some(integration.last_sync, |el, date| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(CatalogColors::text_muted())
                                .child(format!("Synced {}", format_short_date(date))),
                        )
                    }),
            )
            .children(uptime)
            .footer(footer)
    }
}

impl Render for IntegrationsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let filters = IntegrationFilter::all();
        let selected = filters
            .iter()
            .position(|filter| *filter == self.filter)
            .unwrap_or_default();

        let tabs = Tabs::new("integration-filter")
            .labels(filters.iter().map(|filter| {
                format!("{} ({})", filter.label(), self.props.count(*filter))
            }))
            .selected(selected)
            .on_select(cx.listener(|this, ix: &usize, _window, cx| {
                if let Some(filter) = IntegrationFilter::all().get(*ix) {
                    this.filter = *filter;
                    cx.notify();
                }
            }));

        let integrations: Vec<Integration> = self
            .props
            .filtered(self.filter)
            .into_iter()
            .cloned()
            .collect();
        let cards: Vec<_> = integrations
            .iter()
            .map(|integration| {
                div()
                    .w(px(340.0))
                    .child(self.render_card(integration, cx))
            })
            .collect();

        let attention = self.props.attention_count();

        Section::new("integrations")
            .title("Integrations")
            .description("Connect your store to the tools you already use")
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(tabs)
                            .when(attention > 0, |el| {
                                el.child(
                                    Badge::new(format!("{attention} need attention"))
                                        .tone(Tone::Warning)
                                        .glyph(Glyph::AlertTriangle),
                                )
                            }),
                    )
                    .child(div().flex().flex_wrap().gap_4().children(cards)),
            )
    }
}
