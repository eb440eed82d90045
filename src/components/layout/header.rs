//! Header Component
//!
//! The application header with the catalog title and the active block's
//! title, description and previous/next controls.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::BlockId;
use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::constants::HEADER_HEIGHT;
use crate::state::settings::update_settings_and_save;
use crate::theme::colors::CatalogColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe block changes
        cx.observe(&entities.catalog, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn step(&mut self, forward: bool, cx: &mut Context<Self>) {
        let block = self.entities.catalog.update(cx, |catalog, cx| {
            let block = catalog.cycle(forward);
            cx.notify();
            block
        });
        update_settings_and_save(cx, "cycle_block", move |settings| {
            settings.last_block = block;
        });
    }

    fn render_step_button(
        &self,
        id: &'static str,
        glyph: Glyph,
        forward: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .id(id)
            .size(px(28.0))
            .rounded_md()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.step(forward, cx);
            }))
            .child(glyph_icon(glyph, 16.0, CatalogColors::text_light()))
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let block = self.entities.catalog.read(cx).active_block;
        let position = BlockId::all()
            .iter()
            .position(|b| *b == block)
            .map_or(0, |ix| ix + 1);

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .bg(CatalogColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(gpui::rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(glyph_icon(Glyph::LayoutGrid, 16.0, CatalogColors::header_bg())),
                    )
                    .child(
                        div()
                            .text_color(CatalogColors::text_light())
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child("Block Catalog"),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff66))
                            .text_size(px(16.0))
                            .child("/"),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(glyph_icon(block.glyph(), 14.0, CatalogColors::text_light()))
                            .child(
                                div()
                                    .text_color(CatalogColors::text_light())
                                    .text_size(px(14.0))
                                    .child(block.title()),
                            ),
                    )
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff99))
                            .text_size(px(12.0))
                            .child(block.description()),
                    ),
            )
            // Right side: position and stepping
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_color(gpui::rgba(0xffffff99))
                            .text_size(px(12.0))
                            .child(format!("{position} / {}", BlockId::all().len())),
                    )
                    .child(self.render_step_button("block-prev", Glyph::ArrowLeft, false, cx))
                    .child(self.render_step_button("block-next", Glyph::ArrowRight, true, cx)),
            )
    }
}
