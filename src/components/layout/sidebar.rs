//! Sidebar Component
//!
//! Block list grouped by category, collapsible to an icon rail.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{BlockCategory, BlockId};
use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};
use crate::state::settings::update_settings_and_save;
use crate::theme::colors::CatalogColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();

        // Collapsed flag lives in settings
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn select_block(&mut self, block: BlockId, cx: &mut Context<Self>) {
        let changed = self.entities.catalog.update(cx, |catalog, cx| {
            let changed = catalog.set_active_block(block);
            if changed {
                cx.notify();
            }
            changed
        });
        if changed {
            tracing::debug!(block = block.slug(), "Block selected");
            update_settings_and_save(cx, "select_block", move |settings| {
                settings.last_block = block;
            });
        }
    }

    fn toggle_collapsed(&mut self, cx: &mut Context<Self>) {
        update_settings_and_save(cx, "toggle_sidebar", |settings| {
            settings.sidebar_collapsed = !settings.sidebar_collapsed;
        });
    }

    fn render_nav_item(
        &self,
        block: BlockId,
        active_block: BlockId,
        collapsed: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let is_active = block == active_block;

        let (bg_color, text_color, border_color) = if is_active {
            (
                CatalogColors::ghost_hover(),
                CatalogColors::text_primary(),
                CatalogColors::primary(),
            )
        } else {
            (
                CatalogColors::transparent(),
                CatalogColors::text_secondary(),
                CatalogColors::transparent(),
            )
        };

        div()
            .id(SharedString::from(format!("nav-{}", block.slug())))
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_3()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .when(is_active, |el| el.font_weight(gpui::FontWeight::MEDIUM))
            .cursor_pointer()
            .hover(|s| s.bg(CatalogColors::table_row_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.select_block(block, cx);
            }))
            .child(glyph_icon(block.glyph(), 16.0, text_color))
            .when(!collapsed, |el| el.child(block.title()))
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_block = self.entities.catalog.read(cx).active_block;
        let collapsed = self.entities.settings.read(cx).sidebar_collapsed;

        let width = if collapsed {
            px(SIDEBAR_COLLAPSED_WIDTH)
        } else {
            px(SIDEBAR_WIDTH)
        };

        let mut groups = Vec::with_capacity(BlockCategory::all().len());
        for category in BlockCategory::all() {
            let items: Vec<_> = category
                .blocks()
                .map(|block| self.render_nav_item(block, active_block, collapsed, cx))
                .collect();
            groups.push(
                div()
                    .flex()
                    .flex_col()
                    .gap_0p5()
                    .when(!collapsed, |el| {
                        el.child(
                            div()
                                .px_4()
                                .pt_4()
                                .pb_1()
                                .text_xs()
                                .font_weight(gpui::FontWeight::SEMIBOLD)
                                .text_color(CatalogColors::text_muted())
                                .child(category.label().to_uppercase()),
                        )
                    })
                    .when(collapsed, |el| el.pt_3())
                    .children(items),
            );
        }

        let toggle_glyph = if collapsed {
            Glyph::ChevronRight
        } else {
            Glyph::ArrowLeft
        };

        div()
            .w(width)
            .h_full()
            .flex_shrink_0()
            .bg(CatalogColors::sidebar_bg())
            .border_r_1()
            .border_color(CatalogColors::border())
            .flex()
            .flex_col()
            .child(
                div()
                    .id("sidebar-groups")
                    .flex_1()
                    .overflow_y_scroll()
                    .children(groups),
            )
            .child(
                div()
                    .id("sidebar-toggle")
                    .h(px(40.0))
                    .px_4()
                    .flex()
                    .items_center()
                    .gap_2()
                    .border_t_1()
                    .border_color(CatalogColors::border())
                    .text_xs()
                    .text_color(CatalogColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.bg(CatalogColors::table_row_hover()))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.toggle_collapsed(cx);
                    }))
                    .child(glyph_icon(toggle_glyph, 14.0, CatalogColors::text_muted()))
                    .when(!collapsed, |el| el.child("Collapse")),
            )
    }
}
