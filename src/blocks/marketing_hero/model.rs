//! Marketing Hero View-Model

use crate::assets::Glyph;

/// Pill above the headline linking to news
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub badge: String,
    pub text: String,
    pub href: String,
}

/// Call-to-action button
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub glyph: Glyph,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketingHeroProps {
    pub announcement: Option<Announcement>,
    pub headline: String,
    /// Trailing part of the headline drawn in the accent color
    pub highlight: Option<String>,
    pub subheadline: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: Option<CallToAction>,
    pub features: Vec<Feature>,
    pub stats: Vec<HeroStat>,
}

impl MarketingHeroProps {
    pub fn shows_announcement(&self) -> bool {
        self.announcement.is_some()
    }

    /// Buttons in display order, primary first
    pub fn ctas(&self) -> Vec<&CallToAction> {
        std::iter::once(&self.primary_cta)
            .chain(self.secondary_cta.as_ref())
            .collect()
    }

    /// Feature grid rows of at most `per_row` entries
    pub fn feature_rows(&self, per_row: usize) -> Vec<&[Feature]> {
        self.features.chunks(per_row.max(1)).collect()
    }

    pub fn sample() -> Self {
        Self {
            announcement: Some(Announcement {
                badge: "New".into(),
                text: "Subscriptions are now available for every plan".into(),
                href: "/blog/subscriptions".into(),
            }),
            headline: "Sell anywhere, ".into(),
            highlight: Some("grow everywhere".into()),
            subheadline: "Launch a storefront in minutes with checkout, inventory and marketing tools that scale with you.".into(),
            primary_cta: CallToAction {
                label: "Start free trial".into(),
                href: "/signup".into(),
            },
            secondary_cta: Some(CallToAction {
                label: "Book a demo".into(),
                href: "/demo".into(),
            }),
            features: vec![
                Feature {
                    glyph: Glyph::ShoppingCart,
                    title: "Fast checkout".into(),
                    description: "One-page checkout with saved details and wallet payments.".into(),
                },
                Feature {
                    glyph: Glyph::Package,
                    title: "Inventory sync".into(),
                    description: "Stock levels stay accurate across every channel.".into(),
                },
                Feature {
                    glyph: Glyph::BarChart,
                    title: "Built-in analytics".into(),
                    description: "Track revenue, conversion and campaign return in one place.".into(),
                },
                Feature {
                    glyph: Glyph::Shield,
                    title: "Secure by default".into(),
                    description: "PCI-compliant payments and fraud screening included.".into(),
                },
                Feature {
                    glyph: Glyph::Plug,
                    title: "100+ integrations".into(),
                    description: "Connect shipping, email and support tools in a click.".into(),
                },
                Feature {
                    glyph: Glyph::Sparkles,
                    title: "Smart recommendations".into(),
                    description: "Suggest the right products from each shopper's history.".into(),
                },
            ],
            stats: vec![
                HeroStat {
                    value: "40k+".into(),
                    label: "Active stores".into(),
                },
                HeroStat {
                    value: "$2.1B".into(),
                    label: "Processed yearly".into(),
                },
                HeroStat {
                    value: "99.99%".into(),
                    label: "Checkout uptime".into(),
                },
                HeroStat {
                    value: "4.8/5".into(),
                    label: "Merchant rating".into(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctas_list_primary_first_and_skip_missing_secondary() {
        let mut props = MarketingHeroProps::sample();
        let labels: Vec<_> = props.ctas().iter().map(|cta| cta.label.as_str()).collect();
        assert_eq!(labels, ["Start free trial", "Book a demo"]);

        props.secondary_cta = None;
        assert_eq!(props.ctas().len(), 1);
    }

    #[test]
    fn announcement_is_optional() {
        let mut props = MarketingHeroProps::sample();
        assert!(props.shows_announcement());
        props.announcement = None;
        assert!(!props.shows_announcement());
    }

    #[test]
    fn features_split_into_rows() {
        let props = MarketingHeroProps::sample();
        let rows = props.feature_rows(4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 2);
        assert_eq!(props.feature_rows(0).len(), 6);
    }
}
