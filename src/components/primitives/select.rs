//! Select Component

use std::rc::Rc;

use gpui::{
    App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::helpers::indexed_id;
use crate::theme::colors::CatalogColors;

/// A select option
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: SharedString,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select/dropdown component
///
/// The open state is owned by the parent; the trigger asks it to toggle.
#[derive(IntoElement)]
pub struct Select {
    id: SharedString,
    selected: Option<String>,
    options: Vec<SelectOption>,
    placeholder: SharedString,
    label: Option<SharedString>,
    open: bool,
    disabled: bool,
    on_toggle: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    on_select: Option<Rc<dyn Fn(&String, &mut Window, &mut App) + 'static>>,
}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            selected: None,
            options: Vec::new(),
            placeholder: "Select...".into(),
            label: None,
            open: false,
            disabled: false,
            on_toggle: None,
            on_select: None,
        }
    }

    /// Set the selected value
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    /// Set the options
    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Show the option list below the trigger
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Handler receiving the requested open state
    pub fn on_toggle(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Handler receiving the value of the picked option
    pub fn on_select(mut self, handler: impl Fn(&String, &mut Window, &mut App) + 'static) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Select {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let display_text = self
            .selected
            .as_ref()
            .and_then(|val| {
                self.options
                    .iter()
                    .find(|opt| &opt.value == val)
                    .map(|opt| opt.label.clone())
            })
            .unwrap_or(self.placeholder);

        let text_color = if self.selected.is_some() {
            CatalogColors::text_primary()
        } else {
            CatalogColors::input_placeholder()
        };

        let open = self.open && !self.disabled;
        let selected = self.selected;
        let on_select = self.on_select;
        let list_id = self.id.clone();

        let mut trigger = div()
            .id(self.id)
            .h_9()
            .px_3()
            .bg(CatalogColors::input_bg())
            .border_1()
            .border_color(if open {
                CatalogColors::border_focus()
            } else {
                CatalogColors::input_border()
            })
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(150.0))
            .flex()
            .items_center()
            .justify_between()
            .cursor_pointer()
            .child(display_text)
            .child(glyph_icon(
                Glyph::ChevronDown,
                14.0,
                CatalogColors::text_muted(),
            ));

        if self.disabled {
            trigger = trigger.opacity(0.5);
        } else if let Some(handler) = self.on_toggle {
            trigger = trigger.on_click(move |_event, window, cx| handler(&!open, window, cx));
        }

        div()
            .flex()
            .flex_col()
            .gap_1p5()
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            })
            .child(trigger)
            .when(open, |el| {
                el.child(
                    div()
                        .flex()
                        .flex_col()
                        .p_1()
                        .bg(CatalogColors::card_bg())
                        .border_1()
                        .border_color(CatalogColors::border())
                        .rounded_md()
                        .shadow_md()
                        .children(self.options.into_iter().enumerate().map(|(ix, option)| {
                            let is_selected = selected.as_ref() == Some(&option.value);
                            let value = option.value.clone();
                            div()
                                .id(indexed_id(&list_id, ix))
                                .px_2()
                                .py_1p5()
                                .rounded_sm()
                                .flex()
                                .items_center()
                                .justify_between()
                                .text_sm()
                                .text_color(CatalogColors::text_primary())
                                .cursor_pointer()
                                .hover(|s| s.bg(CatalogColors::ghost_hover()))
                                .child(option.label)
                                .when(is_selected, |el| {
                                    el.child(glyph_icon(
                                        Glyph::Check,
                                        14.0,
                                        CatalogColors::primary(),
                                    ))
                                })
                                .when_some(on_select.clone(), |el, handler| {
                                    el.on_click(move |_event, window, cx| {
                                        handler(&value, window, cx)
                                    })
                                })
                        })),
                )
            })
    }
}
