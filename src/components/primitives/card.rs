//! Card Component
//!
//! Bordered surface with an optional header (title, description, trailing
//! action), body children and an optional footer.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// A card container
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    description: Option<SharedString>,
    action: Option<AnyElement>,
    children: Vec<AnyElement>,
    footer: Option<AnyElement>,
    gap: f32,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            action: None,
            children: Vec::new(),
            footer: None,
            gap: 12.0,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Element placed at the right of the header
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.action = Some(action.into_any_element());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    /// Vertical gap between body children in pixels
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_header = self.title.is_some() || self.description.is_some() || self.action.is_some();

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(CatalogColors::card_bg())
            .border_1()
            .border_color(CatalogColors::border())
            .rounded_lg()
            .shadow_sm()
            .overflow_hidden()
            .when(has_header, |el| {
                el.child(
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
                                .when_some(self.title, |el, title| {
                                    el.child(
                                        div()
                                            .text_lg()
                                            .font_weight(gpui::FontWeight::SEMIBOLD)
                                            .text_color(CatalogColors::text_primary())
                                            .child(title),
                                    )
                                })
                                .when_some(self.description, |el, description| {
                                    el.child(
                                        div()
                                            .text_sm()
                                            .text_color(CatalogColors::text_muted())
                                            .child(description),
                                    )
                                }),
                        )
                        .when_some(self.action, |el, action| el.child(action)),
                )
            })
            .child(
                div()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap(px(self.gap))
                    .children(self.children),
            )
            .when_some(self.footer, |el, footer| {
                el.child(
                    div()
                        .px_6()
                        .py_4()
                        .border_t_1()
                        .border_color(CatalogColors::border())
                        .bg(CatalogColors::table_header_bg())
                        .child(footer),
                )
            })
    }
}
