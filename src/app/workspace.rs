//! Workspace - Main Shell with Layout and Block Mounting
//!
//! The workspace holds the header, sidebar, content area and activity panel.
//! Block views are created on first visit and kept for the session so their
//! tab, accordion and dialog state survives navigation.

use std::collections::HashMap;

use gpui::{
    AnyView, AppContext, Context, Entity, EventEmitter, IntoElement, ParentElement, Render, Styled,
    Window, div,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::BlockId;
use crate::blocks::account_profile::{model::AccountProfileProps, page::AccountProfilePage};
use crate::blocks::campaign_dashboard::{
    model::CampaignDashboardProps, page::CampaignDashboardPage,
};
use crate::blocks::checkout::{model::CheckoutProps, page::CheckoutPage};
use crate::blocks::gift_planner::{model::GiftPlannerProps, page::GiftPlannerPage};
use crate::blocks::integrations::{model::IntegrationsProps, page::IntegrationsPage};
use crate::blocks::marketing_hero::{model::MarketingHeroProps, page::MarketingHeroPage};
use crate::blocks::order_history::{model::OrderHistoryProps, page::OrderHistoryPage};
use crate::blocks::portfolio::{model::PortfolioProps, page::PortfolioPage};
use crate::blocks::product_reviews::{model::ProductReviewsProps, page::ProductReviewsPage};
use crate::blocks::shopping_cart::{model::ShoppingCartProps, page::ShoppingCartPage};
use crate::blocks::support_tickets::{model::SupportTicketsProps, page::SupportTicketsPage};
use crate::components::layout::activity_panel::ActivityPanel;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::BlockEvent;
use crate::theme::colors::CatalogColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    activity_panel: Entity<ActivityPanel>,
    blocks: HashMap<BlockId, AnyView>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let activity_panel = cx.new(|cx| ActivityPanel::new(entities.clone(), cx));

        // Re-render when the active block changes
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            activity_panel,
            blocks: HashMap::new(),
        }
    }

    /// Create a block view and route its events into the activity log
    fn mount<V>(
        &self,
        block: BlockId,
        build: impl FnOnce(&mut Context<V>) -> V,
        cx: &mut Context<Self>,
    ) -> AnyView
    where
        V: Render + EventEmitter<BlockEvent>,
    {
        let view = cx.new(build);
        let activity = self.entities.activity.clone();

        cx.subscribe(&view, move |_this, _view, event: &BlockEvent, cx| {
            activity.update(cx, |activity, cx| {
                activity.record(block, event.clone());
                cx.notify();
            });
        })
        .detach();

        debug!(block = block.slug(), "Mounted block");
        view.into()
    }

    fn create_block(&self, block: BlockId, cx: &mut Context<Self>) -> AnyView {
        match block {
            BlockId::ProductReviews => self.mount(
                block,
                |cx| ProductReviewsPage::new(ProductReviewsProps::sample(), cx),
                cx,
            ),
            BlockId::ShoppingCart => self.mount(
                block,
                |cx| ShoppingCartPage::new(ShoppingCartProps::sample(), cx),
                cx,
            ),
            BlockId::Checkout => {
                self.mount(block, |cx| CheckoutPage::new(CheckoutProps::sample(), cx), cx)
            }
            BlockId::OrderHistory => self.mount(
                block,
                |cx| OrderHistoryPage::new(OrderHistoryProps::sample(), cx),
                cx,
            ),
            BlockId::CampaignDashboard => self.mount(
                block,
                |cx| CampaignDashboardPage::new(CampaignDashboardProps::sample(), cx),
                cx,
            ),
            BlockId::SupportTickets => self.mount(
                block,
                |cx| SupportTicketsPage::new(SupportTicketsProps::sample(), cx),
                cx,
            ),
            BlockId::Integrations => self.mount(
                block,
                |cx| IntegrationsPage::new(IntegrationsProps::sample(), cx),
                cx,
            ),
            BlockId::AccountProfile => self.mount(
                block,
                |cx| AccountProfilePage::new(AccountProfileProps::sample(), cx),
                cx,
            ),
            BlockId::GiftPlanner => self.mount(
                block,
                |cx| GiftPlannerPage::new(GiftPlannerProps::sample(), cx),
                cx,
            ),
            BlockId::MarketingHero => self.mount(
                block,
                |cx| MarketingHeroPage::new(MarketingHeroProps::sample(), cx),
                cx,
            ),
            BlockId::Portfolio => {
                self.mount(block, |cx| PortfolioPage::new(PortfolioProps::sample(), cx), cx)
            }
        }
    }

    /// Get or create the view for the given block
    fn block_view(&mut self, block: BlockId, cx: &mut Context<Self>) -> AnyView {
        if let Some(view) = self.blocks.get(&block) {
            return view.clone();
        }
        let view = self.create_block(block, cx);
        self.blocks.insert(block, view.clone());
        view
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_block = self.entities.catalog.read(cx).active_block;
        let content = self.block_view(active_block, cx);

        Shell::new()
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(CatalogColors::content_bg())
                            .child(content),
                    ),
            )
            .child(self.activity_panel.clone())
    }
}
