//! Section Component
//!
//! The frame every block renders into: a scrollable, centered column with
//! a heading. Overlays such as dialogs are positioned against it.

use gpui::{
    AnyElement, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::constants::BLOCK_MAX_WIDTH;
use crate::theme::colors::CatalogColors;

#[derive(IntoElement)]
pub struct Section {
    id: ElementId,
    title: Option<SharedString>,
    description: Option<SharedString>,
    action: Option<AnyElement>,
    children: Vec<AnyElement>,
    overlay: Option<AnyElement>,
}

impl Section {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            action: None,
            children: Vec::new(),
            overlay: None,
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

    /// Element at the right of the heading
    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.action = Some(action.into_any_element());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Drawn over the whole section, used for dialogs
    pub fn overlay(mut self, overlay: Option<impl IntoElement>) -> Self {
        self.overlay = overlay.map(IntoElement::into_any_element);
        self
    }
}

impl RenderOnce for Section {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_heading = self.title.is_some() || self.action.is_some();

        div()
            .relative()
            .size_full()
            .child(
                div()
                    .id(self.id)
                    .size_full()
                    .overflow_y_scroll()
                    .bg(CatalogColors::content_bg())
                    .child(
                        div()
                            .w_full()
                            .max_w(px(BLOCK_MAX_WIDTH))
                            .mx_auto()
                            .px_8()
                            .py_8()
                            .flex()
                            .flex_col()
                            .gap_6()
                            .when(has_heading, |el| {
                                el.child(
                                    div()
                                        .flex()
                                        .items_end()
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
                                                            .text_2xl()
                                                            .font_weight(gpui::FontWeight::BOLD)
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
                            .children(self.children),
                    ),
            )
            .when_some(self.overlay, |el, overlay| el.child(overlay))
    }
}
