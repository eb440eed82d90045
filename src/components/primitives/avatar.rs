//! Avatar Component
//!
//! Shows the image when one is given and falls back to initials otherwise.

use gpui::{
    App, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled, StyledImage,
    Window, div, img, prelude::*, px,
};

use crate::theme::colors::CatalogColors;

/// Circular avatar
#[derive(IntoElement)]
pub struct Avatar {
    name: SharedString,
    image: Option<SharedString>,
    size: f32,
}

impl Avatar {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            image: None,
            size: 40.0,
        }
    }

    /// Image URL or asset path
    pub fn image(mut self, image: Option<impl Into<SharedString>>) -> Self {
        self.image = image.map(Into::into);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Up to two uppercase initials from a display name
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace().filter_map(|w| w.chars().next());
    let first = words.next();
    let last = words.last();
    [first, last]
        .into_iter()
        .flatten()
        .flat_map(char::to_uppercase)
        .collect()
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let size = px(self.size);
        let font_size = px(self.size * 0.38);
        let fallback = initials(&self.name);

        div()
            .size(size)
            .flex_shrink_0()
            .rounded_full()
            .overflow_hidden()
            .bg(CatalogColors::secondary())
            .flex()
            .items_center()
            .justify_center()
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(CatalogColors::text_secondary())
            .map(|el| match self.image {
                Some(src) => el.child(img(src).size(size).object_fit(ObjectFit::Cover)),
                None => el.child(fallback),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_first_and_last_word() {
        assert_eq!(initials("Olivia Martin"), "OM");
        assert_eq!(initials("jackson de la cruz"), "JC");
    }

    #[test]
    fn initials_handle_short_names() {
        assert_eq!(initials("Sofia"), "S");
        assert_eq!(initials("   "), "");
    }
}
