//! Checkbox and Switch Components

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;

type ToggleHandler = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<ToggleHandler>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler; it receives the requested new state
    pub fn on_change(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;

        let (box_bg, border_color) = if checked {
            (CatalogColors::primary(), CatalogColors::primary())
        } else {
            (CatalogColors::input_bg(), CatalogColors::input_border())
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(checked, |el| {
                        el.child(glyph_icon(Glyph::Check, 12.0, CatalogColors::primary_foreground()))
                    }),
            )
            .when_some(self.label, |el, label| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(CatalogColors::text_primary())
                        .child(label),
                )
            });

        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else if let Some(handler) = self.on_change {
            checkbox = checkbox.on_click(move |_event, window, cx| {
                handler(&!checked, window, cx);
            });
        }

        checkbox
    }
}

/// A sliding on/off switch
#[derive(IntoElement)]
pub struct Switch {
    id: ElementId,
    on: bool,
    disabled: bool,
    on_change: Option<ToggleHandler>,
}

impl Switch {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            on: false,
            disabled: false,
            on_change: None,
        }
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Switch {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let on = self.on;
        let track = if on {
            CatalogColors::primary()
        } else {
            CatalogColors::input_border()
        };

        let mut switch = div()
            .id(self.id)
            .w(px(36.0))
            .h(px(20.0))
            .flex_shrink_0()
            .rounded_full()
            .bg(track)
            .p(px(2.0))
            .flex()
            .when(on, |el| el.justify_end())
            .cursor_pointer()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_full()
                    .bg(CatalogColors::content_bg())
                    .shadow_sm(),
            );

        if self.disabled {
            switch = switch.opacity(0.5);
        } else if let Some(handler) = self.on_change {
            switch = switch.on_click(move |_event, window, cx| {
                handler(&!on, window, cx);
            });
        }

        switch
    }
}
