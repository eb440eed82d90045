//! Accordion Component

use std::rc::Rc;

use gpui::{
    AnyElement, App, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::helpers::indexed_id;
use crate::theme::colors::CatalogColors;

/// One collapsible section
pub struct AccordionItem {
    title: SharedString,
    subtitle: Option<AnyElement>,
    content: AnyElement,
    open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<SharedString>, content: impl IntoElement) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            content: content.into_any_element(),
            open: false,
        }
    }

    /// Element shown beside the title, visible whether open or not
    pub fn subtitle(mut self, subtitle: impl IntoElement) -> Self {
        self.subtitle = Some(subtitle.into_any_element());
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// Stack of collapsible sections; toggling reports the item index
#[derive(IntoElement)]
pub struct Accordion {
    id: SharedString,
    items: Vec<AccordionItem>,
    on_toggle: Option<Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>>,
}

impl Accordion {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            items: Vec::new(),
            on_toggle: None,
        }
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Accordion {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on_toggle = self.on_toggle;
        let id = self.id;

        div()
            .flex()
            .flex_col()
            .w_full()
            .children(self.items.into_iter().enumerate().map(|(ix, item)| {
                let chevron = if item.open {
                    Glyph::ChevronDown
                } else {
                    Glyph::ChevronRight
                };

                div()
                    .flex()
                    .flex_col()
                    .border_b_1()
                    .border_color(CatalogColors::border())
                    .child(
                        div()
                            .id(indexed_id(&id, ix))
                            .flex()
                            .items_center()
                            .justify_between()
                            .gap_3()
                            .py_3()
                            .cursor_pointer()
                            .when_some(on_toggle.clone(), |el, handler| {
                                el.on_click(move |_event, window, cx| handler(&ix, window, cx))
                            })
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap_3()
                                    .child(
                                        div()
                                            .text_sm()
                                            .font_weight(gpui::FontWeight::MEDIUM)
                                            .text_color(CatalogColors::text_primary())
                                            .child(item.title),
                                    )
                                    .when_some(item.subtitle, |el, subtitle| el.child(subtitle)),
                            )
                            .child(glyph_icon(chevron, 16.0, CatalogColors::text_muted())),
                    )
                    .when(item.open, |el| el.child(div().pb_4().child(item.content)))
            }))
    }
}
