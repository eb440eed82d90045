//! Blocks - Self-Contained Page Sections
//!
//! Each block pairs a view-model (`model.rs`) holding typed sample data and
//! its derivations with a GPUI view (`page.rs`). Views emit
//! [`BlockEvent`](crate::eventing::BlockEvent)s for every interaction.

pub mod account_profile;
pub mod campaign_dashboard;
pub mod checkout;
pub mod gift_planner;
pub mod integrations;
pub mod marketing_hero;
pub mod order_history;
pub mod portfolio;
pub mod product_reviews;
pub mod shopping_cart;
pub mod support_tickets;
