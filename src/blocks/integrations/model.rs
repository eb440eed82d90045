//! Integrations View-Model

use chrono::NaiveDate;

use crate::assets::Glyph;
use crate::domain::date::ymd;
use crate::domain::progress::clamp_percent;
use crate::domain::status::IntegrationHealth;

#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub glyph: Glyph,
    pub connected: bool,
    pub health: IntegrationHealth,
    /// Uptime over the last 30 days, in percent
    pub uptime: f32,
    pub last_sync: Option<NaiveDate>,
    pub docs_url: String,
}

impl Integration {
    pub fn uptime_progress(&self) -> f32 {
        clamp_percent(self.uptime)
    }

    pub fn uptime_label(&self) -> String {
        format!("{:.2}%", self.uptime_progress())
    }

    /// Connected but not fully healthy
    pub fn needs_attention(&self) -> bool {
        self.connected
            && matches!(
                self.health,
                IntegrationHealth::Degraded | IntegrationHealth::Down
            )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegrationFilter {
    #[default]
    All,
    Connected,
    Available,
}

impl IntegrationFilter {
    pub fn all() -> &'static [IntegrationFilter] {
        &[
            IntegrationFilter::All,
            IntegrationFilter::Connected,
            IntegrationFilter::Available,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            IntegrationFilter::All => "All",
            IntegrationFilter::Connected => "Connected",
            IntegrationFilter::Available => "Available",
        }
    }

    pub fn matches(self, integration: &Integration) -> bool {
        match self {
            IntegrationFilter::All => true,
            IntegrationFilter::Connected => integration.connected,
            IntegrationFilter::Available => !integration.connected,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationsProps {
    pub integrations: Vec<Integration>,
}

impl IntegrationsProps {
    pub fn filtered(&self, filter: IntegrationFilter) -> Vec<&Integration> {
        self.integrations
            .iter()
            .filter(|integration| filter.matches(integration))
            .collect()
    }

    pub fn count(&self, filter: IntegrationFilter) -> usize {
        self.filtered(filter).len()
    }

    pub fn attention_count(&self) -> usize {
        self.integrations
            .iter()
            .filter(|integration| integration.needs_attention())
            .count()
    }

    pub fn sample() -> Self {
        Self {
            integrations: vec![
                Integration {
                    id: "stripe".into(),
                    name: "Stripe".into(),
                    category: "Payments".into(),
                    description: "Accept cards and wallets with automatic payouts.".into(),
                    glyph: Glyph::CreditCard,
                    connected: true,
                    health: IntegrationHealth::Healthy,
                    uptime: 99.98,
                    last_sync: Some(ymd(2024, 6, 4)),
                    docs_url: "https://stripe.com/docs".into(),
                },
                Integration {
                    id: "shipstation".into(),
                    name: "ShipStation".into(),
                    category: "Fulfilment".into(),
                    description: "Print labels and sync tracking numbers to orders.".into(),
                    glyph: Glyph::Truck,
                    connected: true,
                    health: IntegrationHealth::Degraded,
                    uptime: 97.4,
                    last_sync: Some(ymd(2024, 6, 3)),
                    docs_url: "https://help.shipstation.com".into(),
                },
                Integration {
                    id: "mailchimp".into(),
                    name: "Mailchimp".into(),
                    category: "Marketing".into(),
                    description: "Sync customers to audiences and trigger campaigns.".into(),
                    glyph: Glyph::Mail,
                    connected: true,
                    health: IntegrationHealth::Down,
                    uptime: 91.2,
                    last_sync: Some(ymd(2024, 5, 29)),
                    docs_url: "https://mailchimp.com/developer".into(),
                },
                Integration {
                    id: "zendesk".into(),
                    name: "Zendesk".into(),
                    category: "Support".into(),
                    description: "Create tickets from order issues and customer email.".into(),
                    glyph: Glyph::MessageSquare,
                    connected: false,
                    health: IntegrationHealth::Disconnected,
                    uptime: 0.0,
                    last_sync: None,
                    docs_url: "https://developer.zendesk.com".into(),
                },
                Integration {
                    id: "analytics".into(),
                    name: "Google Analytics".into(),
                    category: "Analytics".into(),
                    description: "Track storefront traffic and conversion funnels.".into(),
                    glyph: Glyph::BarChart,
                    connected: false,
                    health: IntegrationHealth::Disconnected,
                    uptime: 0.0,
                    last_sync: None,
                    docs_url: "https://developers.google.com/analytics".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_split_connected_and_available() {
        let props = IntegrationsProps::sample();
        assert_eq!(props.count(IntegrationFilter::All), 5);
        assert_eq!(props.count(IntegrationFilter::Connected), 3);
        assert_eq!(props.count(IntegrationFilter::Available), 2);
        assert!(
            props
                .filtered(IntegrationFilter::Available)
                .iter()
                .all(|integration| integration.health == IntegrationHealth::Disconnected)
        );
    }

    #[test]
    fn attention_covers_degraded_and_down_connections() {
        let props = IntegrationsProps::sample();
        assert_eq!(props.attention_count(), 2);
        assert!(!props.integrations[0].needs_attention());
    }

    #[test]
    fn uptime_is_clamped_and_formatted() {
        let mut integration = IntegrationsProps::sample().integrations.remove(0);
        assert_eq!(integration.uptime_label(), "99.98%");
        integration.uptime = 104.0;
        assert_eq!(integration.uptime_progress(), 100.0);
    }
}
