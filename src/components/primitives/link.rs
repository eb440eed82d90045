//! Link Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;

/// Inline text link
///
/// Navigation is not performed here; the click handler receives the target
/// so the owning block can report it.
#[derive(IntoElement)]
pub struct Link {
    id: ElementId,
    label: SharedString,
    href: SharedString,
    external: bool,
    on_click: Option<Box<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl Link {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        href: impl Into<SharedString>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
            external: false,
            on_click: None,
        }
    }

    /// Mark as leaving the application
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Link {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let href = self.href;

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .text_sm()
            .text_color(CatalogColors::link())
            .cursor_pointer()
            .hover(|s| s.underline())
            .child(self.label)
            .when(self.external, |el| {
                el.child(glyph_icon(Glyph::ExternalLink, 12.0, CatalogColors::link()))
            })
            .when_some(self.on_click, |el, handler| {
                el.on_click(move |_event, window, cx| handler(&href, window, cx))
            })
    }
}
