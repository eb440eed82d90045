//! Block Catalog Library
//!
//! A native GPUI showcase of self-contained storefront and portfolio page
//! blocks: reviews, cart, checkout, orders, campaigns, support, integrations,
//! account, gifts, marketing and portfolio.

pub mod app;
pub mod assets;
pub mod blocks;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod logging;
pub mod state;
pub mod theme;
