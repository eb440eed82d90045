//! RadioGroup Component

use std::rc::Rc;

use gpui::{
    AnyElement, App, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::helpers::indexed_id;
use crate::theme::colors::CatalogColors;

/// One choice in a radio group
pub struct RadioOption {
    pub label: SharedString,
    pub description: Option<SharedString>,
    /// Element shown at the right of the option (a price, a badge)
    pub trailing: Option<AnyElement>,
}

impl RadioOption {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            description: None,
            trailing: None,
        }
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn trailing(mut self, trailing: impl IntoElement) -> Self {
        self.trailing = Some(trailing.into_any_element());
        self
    }
}

/// A vertical list of bordered radio options
#[derive(IntoElement)]
pub struct RadioGroup {
    id: SharedString,
    options: Vec<RadioOption>,
    selected: usize,
    on_change: Option<Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>>,
}

impl RadioGroup {
    pub fn new(id: impl Into<SharedString>, options: Vec<RadioOption>) -> Self {
        Self {
            id: id.into(),
            options,
            selected: 0,
            on_change: None,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Handler receiving the index of the clicked option
    pub fn on_change(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected;
        let on_change = self.on_change;
        let group_id = self.id;

        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                let is_selected = ix == selected;
                let border = if is_selected {
                    CatalogColors::primary()
                } else {
                    CatalogColors::border()
                };

                div()
                    .id(indexed_id(&group_id, ix))
                    .flex()
                    .items_center()
                    .gap_3()
                    .p_4()
                    .rounded_md()
                    .border_1()
                    .border_color(border)
                    .cursor_pointer()
                    .hover(|s| s.bg(CatalogColors::table_row_hover()))
                    .when_some(on_change.clone(), |el, handler| {
                        el.on_click(move |_event, window, cx| handler(&ix, window, cx))
                    })
                    .child(
                        div()
                            .size(px(16.0))
                            .flex_shrink_0()
                            .rounded_full()
                            .border_1()
                            .border_color(border)
                            .flex()
                            .items_center()
                            .justify_center()
                            .when(is_selected, |el| {
                                el.child(
                                    div()
                                        .size(px(8.0))
                                        .rounded_full()
                                        .bg(CatalogColors::primary()),
                                )
                            }),
                    )
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .text_color(CatalogColors::text_primary())
                                    .child(option.label),
                            )
                            .when_some(option.description, |el, description| {
                                el.child(
                                    div()
                                        .text_xs()
                                        .text_color(CatalogColors::text_muted())
                                        .child(description),
                                )
                            }),
                    )
                    .when_some(option.trailing, |el, trailing| el.child(trailing))
            }))
    }
}
