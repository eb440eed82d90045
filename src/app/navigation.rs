//! Navigation - Catalog Blocks and Their Grouping
//!
//! Defines every block the catalog can mount and the sidebar category it
//! belongs to.

use serde::{Deserialize, Serialize};

use crate::assets::Glyph;

/// Sidebar grouping of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCategory {
    Commerce,
    Operations,
    Account,
    Marketing,
}

impl BlockCategory {
    pub fn label(self) -> &'static str {
        match self {
            BlockCategory::Commerce => "Commerce",
            BlockCategory::Operations => "Operations",
            BlockCategory::Account => "Account",
            BlockCategory::Marketing => "Marketing",
        }
    }

    pub fn all() -> &'static [BlockCategory] {
        &[
            BlockCategory::Commerce,
            BlockCategory::Operations,
            BlockCategory::Account,
            BlockCategory::Marketing,
        ]
    }

    /// Blocks in this category, in sidebar order
    pub fn blocks(self) -> impl Iterator<Item = BlockId> {
        BlockId::all()
            .iter()
            .copied()
            .filter(move |block| block.category() == self)
    }
}

/// Blocks available in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BlockId {
    #[default]
    ProductReviews,
    ShoppingCart,
    Checkout,
    OrderHistory,
    CampaignDashboard,
    SupportTickets,
    Integrations,
    AccountProfile,
    GiftPlanner,
    MarketingHero,
    Portfolio,
}

impl BlockId {
    pub fn title(self) -> &'static str {
        match self {
            BlockId::ProductReviews => "Product Reviews",
            BlockId::ShoppingCart => "Shopping Cart",
            BlockId::Checkout => "Checkout",
            BlockId::OrderHistory => "Order History",
            BlockId::CampaignDashboard => "Campaign Dashboard",
            BlockId::SupportTickets => "Support Tickets",
            BlockId::Integrations => "Integrations",
            BlockId::AccountProfile => "Account Profile",
            BlockId::GiftPlanner => "Gift Planner",
            BlockId::MarketingHero => "Marketing Hero",
            BlockId::Portfolio => "Portfolio",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BlockId::ProductReviews => "Rating summary, distribution and customer reviews",
            BlockId::ShoppingCart => "Line items with quantity steppers and an order summary",
            BlockId::Checkout => "Contact, shipping, delivery method and payment",
            BlockId::OrderHistory => "Past orders with status filters and details",
            BlockId::CampaignDashboard => "Campaign metrics, budgets and conversion",
            BlockId::SupportTickets => "Tickets by priority and status",
            BlockId::Integrations => "Connected services and their health",
            BlockId::AccountProfile => "Profile, stats, account manager and preferences",
            BlockId::GiftPlanner => "Recipients, gift ideas and budgets",
            BlockId::MarketingHero => "Headline, calls to action and feature grid",
            BlockId::Portfolio => "Projects, reviewer scores and skills",
        }
    }

    pub fn category(self) -> BlockCategory {
        match self {
            BlockId::ProductReviews
            | BlockId::ShoppingCart
            | BlockId::Checkout
            | BlockId::OrderHistory => BlockCategory::Commerce,
            BlockId::CampaignDashboard | BlockId::SupportTickets | BlockId::Integrations => {
                BlockCategory::Operations
            }
            BlockId::AccountProfile | BlockId::GiftPlanner => BlockCategory::Account,
            BlockId::MarketingHero | BlockId::Portfolio => BlockCategory::Marketing,
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            BlockId::ProductReviews => Glyph::Star,
            BlockId::ShoppingCart => Glyph::ShoppingCart,
            BlockId::Checkout => Glyph::CreditCard,
            BlockId::OrderHistory => Glyph::Package,
            BlockId::CampaignDashboard => Glyph::BarChart,
            BlockId::SupportTickets => Glyph::Ticket,
            BlockId::Integrations => Glyph::Plug,
            BlockId::AccountProfile => Glyph::User,
            BlockId::GiftPlanner => Glyph::Gift,
            BlockId::MarketingHero => Glyph::Sparkles,
            BlockId::Portfolio => Glyph::Briefcase,
        }
    }

    /// Stable identifier used in logs and element ids
    pub fn slug(self) -> &'static str {
        match self {
            BlockId::ProductReviews => "product-reviews",
            BlockId::ShoppingCart => "shopping-cart",
            BlockId::Checkout => "checkout",
            BlockId::OrderHistory => "order-history",
            BlockId::CampaignDashboard => "campaign-dashboard",
            BlockId::SupportTickets => "support-tickets",
            BlockId::Integrations => "integrations",
            BlockId::AccountProfile => "account-profile",
            BlockId::GiftPlanner => "gift-planner",
            BlockId::MarketingHero => "marketing-hero",
            BlockId::Portfolio => "portfolio",
        }
    }

    /// Get all blocks for the sidebar
    pub fn all() -> &'static [BlockId] {
        &[
            BlockId::ProductReviews,
            BlockId::ShoppingCart,
            BlockId::Checkout,
            BlockId::OrderHistory,
            BlockId::CampaignDashboard,
            BlockId::SupportTickets,
            BlockId::Integrations,
            BlockId::AccountProfile,
            BlockId::GiftPlanner,
            BlockId::MarketingHero,
            BlockId::Portfolio,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_block_is_in_exactly_one_category() {
        let grouped: Vec<BlockId> = BlockCategory::all()
            .iter()
            .flat_map(|category| category.blocks())
            .collect();
        assert_eq!(grouped.len(), BlockId::all().len());
        let unique: HashSet<_> = grouped.into_iter().collect();
        assert_eq!(unique.len(), BlockId::all().len());
    }

    #[test]
    fn slugs_match_serde_names() {
        #[derive(Serialize)]
        struct Wrapper {
            block: BlockId,
        }
        for block in BlockId::all() {
            let encoded = toml::to_string(&Wrapper { block: *block }).unwrap_or_default();
            assert_eq!(encoded.trim(), format!("block = \"{}\"", block.slug()));
        }
    }
}
