//! Tabs Component

use std::rc::Rc;

use gpui::{
    App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::helpers::indexed_id;
use crate::theme::colors::CatalogColors;

/// Segmented tab list; the parent renders the panel for `selected`
#[derive(IntoElement)]
pub struct Tabs {
    id: SharedString,
    labels: Vec<SharedString>,
    selected: usize,
    on_select: Option<Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>>,
}

impl Tabs {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            labels: Vec::new(),
            selected: 0,
            on_select: None,
        }
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_select(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Tabs {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected;
        let on_select = self.on_select;
        let id = self.id;

        div()
            .flex()
            .items_center()
            .gap_1()
            .p_1()
            .rounded_md()
            .bg(CatalogColors::secondary())
            .children(self.labels.into_iter().enumerate().map(|(ix, label)| {
                let active = ix == selected;
                div()
                    .id(indexed_id(&id, ix))
                    .px_3()
                    .py_1()
                    .rounded_sm()
                    .text_sm()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .cursor_pointer()
                    .map(|el| {
                        if active {
                            el.bg(CatalogColors::content_bg())
                                .text_color(CatalogColors::text_primary())
                                .shadow_sm()
                        } else {
                            el.text_color(CatalogColors::text_muted())
                                .hover(|s| s.text_color(CatalogColors::text_primary()))
                        }
                    })
                    .when_some(on_select.clone(), |el, handler| {
                        el.on_click(move |_event, window, cx| handler(&ix, window, cx))
                    })
                    .child(label)
            }))
    }
}
