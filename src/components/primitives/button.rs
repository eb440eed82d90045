//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::assets::Glyph;
use crate::components::primitives::icon::glyph_icon;
use crate::theme::colors::CatalogColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Solid primary action
    #[default]
    Default,
    /// Muted surface
    Secondary,
    /// Bordered, transparent fill
    Outline,
    /// Transparent until hovered
    Ghost,
    /// Destructive action (red)
    Destructive,
    /// Looks like a text link
    Link,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
    /// Square, glyph only
    Icon,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: Option<SharedString>,
    glyph: Option<Glyph>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
            glyph: None,
            variant: ButtonVariant::Default,
            size: ButtonSize::Default,
            disabled: false,
            full_width: false,
            on_click: None,
        }
    }

    /// Create a square glyph-only button
    pub fn icon(id: impl Into<ElementId>, glyph: Glyph) -> Self {
        Self {
            id: id.into(),
            label: None,
            glyph: Some(glyph),
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Icon,
            disabled: false,
            full_width: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Show a leading glyph
    pub fn glyph(mut self, glyph: Glyph) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Stretch to the parent's width
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn destructive(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Destructive)
    }

    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg, border_color) = match self.variant {
            ButtonVariant::Default => (
                CatalogColors::primary(),
                CatalogColors::primary_foreground(),
                gpui::rgb(0x3f3f46),
                CatalogColors::primary(),
            ),
            ButtonVariant::Secondary => (
                CatalogColors::secondary(),
                CatalogColors::secondary_foreground(),
                gpui::rgb(0xe4e4e7),
                CatalogColors::secondary(),
            ),
            ButtonVariant::Outline => (
                CatalogColors::content_bg(),
                CatalogColors::text_primary(),
                CatalogColors::ghost_hover(),
                CatalogColors::border(),
            ),
            ButtonVariant::Ghost => (
                CatalogColors::transparent(),
                CatalogColors::text_primary(),
                CatalogColors::ghost_hover(),
                CatalogColors::transparent(),
            ),
            ButtonVariant::Destructive => (
                CatalogColors::destructive_bg(),
                CatalogColors::destructive_text(),
                gpui::rgb(0xb91c1c),
                CatalogColors::destructive_bg(),
            ),
            ButtonVariant::Link => (
                CatalogColors::transparent(),
                CatalogColors::link(),
                CatalogColors::transparent(),
                CatalogColors::transparent(),
            ),
        };

        let (padding_x, height, font_size) = match self.size {
            ButtonSize::Sm => (px(10.0), px(32.0), px(13.0)),
            ButtonSize::Default => (px(16.0), px(36.0), px(14.0)),
            ButtonSize::Lg => (px(24.0), px(44.0), px(16.0)),
            ButtonSize::Icon => (px(0.0), px(36.0), px(14.0)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let is_link = self.variant == ButtonVariant::Link;

        let mut element = div()
            .id(self.id)
            .flex()
            .flex_shrink_0()
            .items_center()
            .justify_center()
            .gap_2()
            .h(height)
            .px(padding_x)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .border_1()
            .border_color(border_color)
            .cursor_pointer()
            .opacity(opacity)
            .when(self.size == ButtonSize::Icon, |el| el.w(height))
            .when(self.full_width, |el| el.w_full())
            .when_some(self.glyph, |el, glyph| {
                el.child(glyph_icon(glyph, 16.0, text_color))
            })
            .when_some(self.label, |el, label| el.child(label));

        if !self.disabled {
            element = if is_link {
                element.hover(|s| s.underline())
            } else {
                element.hover(move |s| s.bg(hover_bg))
            };

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
