//! Campaign Dashboard View-Model

use chrono::NaiveDate;

use crate::domain::date::ymd;
use crate::domain::money::Money;
use crate::domain::progress::{format_rate, percent_of_target};
use crate::domain::status::CampaignStatus;

/// Delivery counters for one campaign
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignMetrics {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: Money,
}

impl CampaignMetrics {
    /// Click-through rate, clicks over impressions
    pub fn ctr(&self) -> String {
        format_rate(self.clicks as f64, self.impressions as f64)
    }

    /// Conversions over clicks
    pub fn conversion_rate(&self) -> String {
        format_rate(self.conversions as f64, self.clicks as f64)
    }

    fn merge(self, other: CampaignMetrics) -> CampaignMetrics {
        CampaignMetrics {
            impressions: self.impressions + other.impressions,
            clicks: self.clicks + other.clicks,
            conversions: self.conversions + other.conversions,
            revenue: self.revenue + other.revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub channel: String,
    pub status: CampaignStatus,
    pub budget: Money,
    pub spent: Money,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub metrics: CampaignMetrics,
}

impl Campaign {
    /// Spend as a percentage of budget, clamped to 100
    pub fn spend_progress(&self) -> f32 {
        percent_of_target(self.spent.to_f64(), self.budget.to_f64())
    }

    pub fn over_budget(&self) -> bool {
        self.spent > self.budget
    }

    pub fn remaining_budget(&self) -> Money {
        if self.over_budget() {
            Money::ZERO
        } else {
            self.budget - self.spent
        }
    }

    /// Return on ad spend, e.g. `4.2x`
    pub fn roas(&self) -> String {
        let spent = self.spent.to_f64();
        if spent <= 0.0 {
            return "—".to_string();
        }
        format!("{:.1}x", self.metrics.revenue.to_f64() / spent)
    }

    /// Label of the pause/resume control, if the status allows one
    pub fn toggle_label(&self) -> Option<&'static str> {
        match self.status {
            CampaignStatus::Active => Some("Pause"),
            CampaignStatus::Paused => Some("Resume"),
            CampaignStatus::Completed | CampaignStatus::Scheduled => None,
        }
    }
}

/// Totals of the previous reporting period, for metric deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodTotals {
    pub spent: Money,
    pub metrics: CampaignMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDashboardProps {
    pub period: String,
    pub campaigns: Vec<Campaign>,
    pub previous: PeriodTotals,
}

impl CampaignDashboardProps {
    pub fn total_spent(&self) -> Money {
        self.campaigns.iter().map(|campaign| campaign.spent).sum()
    }

    pub fn total_budget(&self) -> Money {
        self.campaigns.iter().map(|campaign| campaign.budget).sum()
    }

    pub fn totals(&self) -> CampaignMetrics {
        self.campaigns
            .iter()
            .map(|campaign| campaign.metrics)
            .fold(CampaignMetrics::default(), CampaignMetrics::merge)
    }

    /// Campaigns with the given status, or all of them
    pub fn filtered(&self, status: Option<CampaignStatus>) -> Vec<&Campaign> {
        self.campaigns
            .iter()
            .filter(|campaign| status.is_none_or(|status| campaign.status == status))
            .collect()
    }

    pub fn count(&self, status: CampaignStatus) -> usize {
        self.filtered(Some(status)).len()
    }

    pub fn sample() -> Self {
        Self {
            period: "Last 30 days".into(),
            campaigns: vec![
                Campaign {
                    id: "cmp-summer".into(),
                    name: "Summer Sale Launch".into(),
                    channel: "Email".into(),
                    status: CampaignStatus::Active,
                    budget: Money::from_cents(500_000),
                    spent: Money::from_cents(325_000),
                    starts_on: ymd(2024, 6, 1),
                    ends_on: ymd(2024, 6, 30),
                    metrics: CampaignMetrics {
                        impressions: 184_000,
                        clicks: 6_440,
                        conversions: 412,
                        revenue: Money::from_cents(1_854_000),
                    },
                },
                Campaign {
                    id: "cmp-retarget".into(),
                    name: "Cart Recovery Retargeting".into(),
                    channel: "Social".into(),
                    status: CampaignStatus::Active,
                    budget: Money::from_cents(200_000),
                    spent: Money::from_cents(231_000),
                    starts_on: ymd(2024, 5, 15),
                    ends_on: ymd(2024, 6, 15),
                    metrics: CampaignMetrics {
                        impressions: 92_500,
                        clicks: 2_960,
                        conversions: 188,
                        revenue: Money::from_cents(846_000),
                    },
                },
                Campaign {
                    id: "cmp-brand".into(),
                    name: "Brand Awareness Video".into(),
                    channel: "Display".into(),
                    status: CampaignStatus::Paused,
                    budget: Money::from_cents(800_000),
                    spent: Money::from_cents(264_000),
                    starts_on: ymd(2024, 5, 1),
                    ends_on: ymd(2024, 7, 31),
                    metrics: CampaignMetrics {
                        impressions: 410_000,
                        clicks: 4_100,
                        conversions: 96,
                        revenue: Money::from_cents(412_000),
                    },
                },
                Campaign {
                    id: "cmp-spring".into(),
                    name: "Spring Collection".into(),
                    channel: "Search".into(),
                    status: CampaignStatus::Completed,
                    budget: Money::from_cents(300_000),
                    spent: Money::from_cents(298_500),
                    starts_on: ymd(2024, 3, 1),
                    ends_on: ymd(2024, 4, 30),
                    metrics: CampaignMetrics {
                        impressions: 126_000,
                        clicks: 5_670,
                        conversions: 351,
                        revenue: Money::from_cents(1_402_000),
                    },
                },
                Campaign {
                    id: "cmp-holiday".into(),
                    name: "Back to School Preview".into(),
                    channel: "Email".into(),
                    status: CampaignStatus::Scheduled,
                    budget: Money::from_cents(150_000),
                    spent: Money::ZERO,
                    starts_on: ymd(2024, 8, 1),
                    ends_on: ymd(2024, 8, 31),
                    metrics: CampaignMetrics::default(),
                },
            ],
            previous: PeriodTotals {
                spent: Money::from_cents(980_000),
                metrics: CampaignMetrics {
                    impressions: 702_000,
                    clicks: 17_300,
                    conversions: 901,
                    revenue: Money::from_cents(4_020_000),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(id: &str) -> Campaign {
        CampaignDashboardProps::sample()
            .campaigns
            .into_iter()
            .find(|campaign| campaign.id == id)
            .unwrap()
    }

    #[test]
    fn rates_are_ratios_with_one_decimal() {
        let metrics = campaign("cmp-summer").metrics;
        assert_eq!(metrics.ctr(), "3.5%");
        assert_eq!(metrics.conversion_rate(), "6.4%");
    }

    #[test]
    fn rates_without_traffic_are_zero() {
        let metrics = campaign("cmp-holiday").metrics;
        assert_eq!(metrics.ctr(), "0.0%");
        assert_eq!(metrics.conversion_rate(), "0.0%");
    }

    #[test]
    fn spend_progress_clamps_when_over_budget() {
        let over = campaign("cmp-retarget");
        assert!(over.over_budget());
        assert_eq!(over.spend_progress(), 100.0);
        assert_eq!(over.remaining_budget(), Money::ZERO);

        let under = campaign("cmp-summer");
        assert!(!under.over_budget());
        assert!((under.spend_progress() - 65.0).abs() < 0.01);
        assert_eq!(under.remaining_budget().to_string(), "$1750.00");
    }

    #[test]
    fn unstarted_campaign_has_no_progress() {
        let scheduled = campaign("cmp-holiday");
        assert_eq!(scheduled.spend_progress(), 0.0);
        assert_eq!(scheduled.roas(), "—");
    }

    #[test]
    fn toggle_only_for_running_or_paused() {
        assert_eq!(campaign("cmp-summer").toggle_label(), Some("Pause"));
        assert_eq!(campaign("cmp-brand").toggle_label(), Some("Resume"));
        assert_eq!(campaign("cmp-spring").toggle_label(), None);
    }

    #[test]
    fn totals_sum_every_campaign() {
        let props = CampaignDashboardProps::sample();
        let totals = props.totals();
        assert_eq!(totals.impressions, 812_500);
        assert_eq!(totals.conversions, 1_047);
        assert_eq!(props.total_spent().to_string(), "$11185.00");
    }

    #[test]
    fn status_filter() {
        let props = CampaignDashboardProps::sample();
        assert_eq!(props.filtered(None).len(), 5);
        assert_eq!(props.count(CampaignStatus::Active), 2);
        assert_eq!(props.count(CampaignStatus::Scheduled), 1);
    }
}
