//! Dialog Component
//!
//! A modal dialog drawn over its nearest relatively positioned ancestor.
//! Whether it is shown is decided by the owner; the close button only
//! reports the request.

use gpui::{
    AnyElement, App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;

/// Dialog component
#[derive(IntoElement)]
pub struct Dialog {
    title: SharedString,
    description: Option<SharedString>,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    width: f32,
    on_close: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Dialog {
    /// Create a new dialog
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            description: None,
            children: Vec::new(),
            footer: None,
            width: 480.0,
            on_close: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Right-aligned action row
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Dialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // Backdrop
        div()
            .id("dialog-backdrop")
            .absolute()
            .inset_0()
            .occlude()
            .bg(CatalogColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(self.width))
                    .bg(CatalogColors::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .flex()
                    .flex_col()
                    // Header
                    .child(
                        div()
                            .px_6()
                            .pt_6()
                            .flex()
                            .items_start()
                            .justify_between()
                            .gap_4()
                            .child(
                                div()
                                    .flex()
                                    .flex_col()
                                    .gap_1()
                                    .child(
                                        div()
                                            .text_lg()
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .text_color(CatalogColors::text_primary())
                                            .child(self.title),
                                    )
                                    .when_some(self.description, |el, description| {
                                        el.child(
                                            div()
                                                .text_sm()
                                                .text_color(CatalogColors::text_muted())
                                                .child(description),
                                        )
                                    }),
                            )
                            .when_some(self.on_close, |el, handler| {
                                el.child(
                                    div()
                                        .id("dialog-close")
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .cursor_pointer()
                                        .hover(|s| s.bg(CatalogColors::ghost_hover()))
                                        .on_click(move |event, window, cx| handler(event, window, cx))
                                        .child(glyph_icon(Glyph::X, 16.0, CatalogColors::text_muted())),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    )
                    .when_some(self.footer, |el, footer| {
                        el.child(
                            div()
                                .px_6()
                                .pb_6()
                                .flex()
                                .justify_end()
                                .gap_2()
                                .child(footer),
                        )
                    }),
            )
    }
}
