//! Campaign Dashboard Page

use gpui::{
    ClickEvent, Context, EventEmitter, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div,
};

use crate::assets::Glyph;
use crate::blocks::campaign_dashboard::model::{Campaign, CampaignDashboardProps};
use crate::components::composite::metric_card::MetricCard;
use crate::components::composite::status_badge::StatusBadge;
use crate::components::layout::section::Section;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::card::Card;
use crate::components::primitives::progress::Progress;
use crate::components::primitives::tabs::Tabs;
use crate::domain::date::format_short_date;
use crate::domain::status::CampaignStatus;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;
use crate::theme::status::StatusStyle;
use crate::theme::tone::Tone;

/// Campaign dashboard page component
pub struct CampaignDashboardPage {
    props: CampaignDashboardProps,
    /// `None` shows every campaign
    status_filter: Option<CampaignStatus>,
}

impl EventEmitter<BlockEvent> for CampaignDashboardPage {}

impl CampaignDashboardPage {
    pub fn new(props: CampaignDashboardProps, _cx: &mut Context<Self>) -> Self {
        Self {
            props,
            status_filter: None,
        }
    }

    fn render_metrics(&self) -> impl IntoElement {
        let totals = self.props.totals();
        let previous = self.props.previous;

        div()
            .flex()
            .flex_wrap()
            .gap_4()
            .child(
                MetricCard::new("Spend", self.props.total_spent().to_string())
                    .glyph(Glyph::CreditCard)
                    .compared(previous.spent.to_f64(), self.props.total_spent().to_f64())
                    .caption(format!("of {} budget", self.props.total_budget())),
            )
            .child(
                MetricCard::new("Revenue", totals.revenue.to_string())
                    .glyph(Glyph::BarChart)
                    .compared(previous.metrics.revenue.to_f64(), totals.revenue.to_f64()),
            )
            .child(
                MetricCard::new("Conversions", totals.conversions.to_string())
                    .glyph(Glyph::Zap)
                    .compared(
                        previous.metrics.conversions as f64,
                        totals.conversions as f64,
                    )
                    .caption(format!("{} conversion rate", totals.conversion_rate())),
            )
            .child(
                MetricCard::new("Click-through", totals.ctr())
                    .glyph(Glyph::Activity)
                    .caption(format!("{} impressions", totals.impressions)),
            )
    }

    fn stat(label: &'static str, value: String) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .child(
                div()
                    .text_xs()
                    .text_color(CatalogColors::text_muted())
                    .child(label),
            )
            .child(
                div()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .child(value),
            )
    }

    fn render_campaign(&self, campaign: &Campaign, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let over_budget = campaign.over_budget();
        let tone = if over_budget {
            Tone::Danger
        } else {
            campaign.status.appearance().tone
        };
        let budget_caption = if over_budget {
            format!("{} over budget", campaign.spent - campaign.budget)
        } else {
            format!("{} remaining", campaign.remaining_budget())
        };

        let toggle = campaign.toggle_label().map(|label| {
            let name = campaign.name.clone();
            let glyph = if campaign.status == CampaignStatus::Active {
                Glyph::Pause
            } else {
                Glyph::Play
            };
            Button::outline(SharedString::from(format!("toggle-{}", campaign.id)), label)
                .size(ButtonSize::Sm)
                .glyph(glyph)
                .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                    cx.emit(BlockEvent::action(format!("{label} {name}")));
                }))
        });

        Card::new()
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .gap_4()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_1()
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_2()
                                    .child(
                                        div()
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .child(campaign.name.clone()),
                                    )
                                    .child(StatusBadge::new(campaign.status)),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(CatalogColors::text_muted())
                                    .child(format!(
                                        "{} · {} to {}",
                                        campaign.channel,
                                        format_short_date(campaign.starts_on),
                                        format_short_date(campaign.ends_on)
                                    )),
                            ),
                    )
                    .children(toggle),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .text_sm()
                            .child(format!("{} of {}", campaign.spent, campaign.budget))
                            .child(
                                div()
                                    .text_color(if over_budget {
                                        CatalogColors::danger()
                                    } else {
                                        CatalogColors::text_muted()
                                    })
                                    .child(budget_caption),
                            ),
                    )
                    .child(Progress::new(campaign.spend_progress()).tone(tone)),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(Self::stat("Impressions", campaign.metrics.impressions.to_string()))
                    .child(Self::stat("CTR", campaign.metrics.ctr()))
                    .child(Self::stat("Conversion", campaign.metrics.conversion_rate()))
                    .child(Self::stat("Revenue", campaign.metrics.revenue.to_string()))
                    .child(Self::stat("ROAS", campaign.roas())),
            )
    }
}

impl Render for CampaignDashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let statuses = CampaignStatus::all();
        let selected = self
            .status_filter
            .and_then(|status| statuses.iter().position(|s| *s == status))
            .map_or(0, |ix| ix + 1);

        let labels = std::iter::once(format!("All ({})", self.props.campaigns.len())).chain(
            statuses.iter().map(|status| {
                format!("{} ({})", status.appearance().label, self.props.count(*status))
            }),
        );

        let tabs = Tabs::new("campaign-filter")
            .labels(labels)
            .selected(selected)
            .on_select(cx.listener(|this, ix: &usize, _window, cx| {
                this.status_filter = ix
                    .checked_sub(1)
                    .and_then(|ix| CampaignStatus::all().get(ix).copied());
                cx.notify();
            }));

        let campaigns: Vec<Campaign> = self
            .props
            .filtered(self.status_filter)
            .into_iter()
            .cloned()
            .collect();
        let cards: Vec<_> = campaigns
            .iter()
            .map(|campaign| self.render_campaign(campaign, cx))
            .collect();

        Section::new("campaign-dashboard")
            .title("Campaign Dashboard")
            .description(format!("Marketing performance, {}", self.props.period.to_lowercase()))
            .action(
                Button::new("new-campaign", "New campaign")
                    .glyph(Glyph::Plus)
                    .on_click(cx.listener(|_this, _event: &ClickEvent, _window, cx| {
                        cx.emit(BlockEvent::action("New campaign"));
                    })),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(self.render_metrics())
                    .child(tabs)
                    .child(div().flex().flex_col().gap_4().children(cards)),
            )
    }
}
