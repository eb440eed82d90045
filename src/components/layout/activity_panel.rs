//! Activity Panel Component
//!
//! Shows the block events recorded in `ActivityState` at the bottom of the
//! screen, newest first.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::constants::{ACTIVITY_PANEL_COLLAPSED_HEIGHT, ACTIVITY_PANEL_HEIGHT, ACTIVITY_PANEL_VISIBLE};
use crate::state::activity_state::ActivityEntry;
use crate::state::settings::update_settings_and_save;
use crate::theme::colors::CatalogColors;

/// Activity panel component
pub struct ActivityPanel {
    entities: AppEntities,
}

impl ActivityPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe activity changes
        cx.observe(&entities.activity, |_this, _, cx| cx.notify())
            .detach();

        // Expanded flag lives in settings
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        update_settings_and_save(cx, "toggle_activity_panel", |settings| {
            settings.activity_panel_expanded = !settings.activity_panel_expanded;
        });
    }

    fn clear(&mut self, cx: &mut Context<Self>) {
        self.entities.activity.update(cx, |activity, cx| {
            activity.clear();
            cx.notify();
        });
    }

    fn render_entry(entry: &ActivityEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(CatalogColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(entry.time_label()),
            )
            .child(
                div()
                    .text_color(CatalogColors::warning())
                    .text_size(px(11.0))
                    .min_w(px(140.0))
                    .child(entry.block.title()),
            )
            .child(
                div()
                    .text_color(CatalogColors::info())
                    .text_size(px(11.0))
                    .min_w(px(60.0))
                    .child(entry.event.kind().to_uppercase()),
            )
            .child(
                div()
                    .text_color(CatalogColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.event.to_string()),
            )
    }
}

impl Render for ActivityPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let expanded = self.entities.settings.read(cx).activity_panel_expanded;
        let activity = self.entities.activity.read(cx);
        let count = activity.len();

        let height = if expanded {
            px(ACTIVITY_PANEL_HEIGHT)
        } else {
            px(ACTIVITY_PANEL_COLLAPSED_HEIGHT)
        };

        let entries: Vec<_> = if expanded {
            activity
                .recent(ACTIVITY_PANEL_VISIBLE)
                .map(Self::render_entry)
                .collect()
        } else {
            Vec::new()
        };
        let is_empty = count == 0;

        div()
            .h(height)
            .w_full()
            .flex_shrink_0()
            .bg(CatalogColors::activity_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(ACTIVITY_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(glyph_icon(Glyph::Activity, 14.0, CatalogColors::text_light()))
                            .child(
                                div()
                                    .text_color(CatalogColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Activity"),
                            )
                            .child(
                                div()
                                    .text_color(CatalogColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            // Clear button
                            .child(
                                div()
                                    .id("clear-activity")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(CatalogColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.clear(cx);
                                    }))
                                    .child("Clear"),
                            )
                            // Toggle button
                            .child(
                                div()
                                    .id("toggle-activity")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                        this.toggle_expanded(cx);
                                    }))
                                    .child(glyph_icon(
                                        if expanded { Glyph::ChevronDown } else { Glyph::ArrowUp },
                                        14.0,
                                        CatalogColors::text_muted(),
                                    )),
                            ),
                    ),
            )
            // Entries (only when expanded)
            .when(expanded, |el| {
                el.child(
                    div()
                        .id("activity-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .when(is_empty, |el| {
                            el.child(
                                div()
                                    .text_color(CatalogColors::text_muted())
                                    .text_size(px(12.0))
                                    .child("Interact with a block to see its events here."),
                            )
                        })
                        .children(entries),
                )
            })
    }
}
