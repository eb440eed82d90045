//! SummaryPanel Component

use gpui::{AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, prelude::*};

use crate::components::primitives::card::Card;
use crate::components::primitives::separator::Separator;
use crate::domain::summary::{SummaryLine, SummaryVariant};
use crate::theme::colors::CatalogColors;

/// Card listing summary lines with the total set apart
#[derive(IntoElement)]
pub struct SummaryPanel {
    title: SharedString,
    lines: Vec<SummaryLine>,
    footer: Option<AnyElement>,
}

impl SummaryPanel {
    pub fn new(lines: Vec<SummaryLine>) -> Self {
        Self {
            title: "Order Summary".into(),
            lines,
            footer: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    /// Element below the lines, typically the checkout button
    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }
}

fn render_line(line: SummaryLine) -> impl IntoElement {
    let (text_color, weight) = match line.variant {
        SummaryVariant::Default => (CatalogColors::text_secondary(), gpui::FontWeight::NORMAL),
        SummaryVariant::Discount => (CatalogColors::success(), gpui::FontWeight::NORMAL),
        SummaryVariant::Total => (CatalogColors::text_primary(), gpui::FontWeight::SEMIBOLD),
    };
    let is_total = line.variant == SummaryVariant::Total;

    div()
        .flex()
        .items_center()
        .justify_between()
        .map(|el| if is_total { el.text_base() } else { el.text_sm() })
        .font_weight(weight)
        .text_color(text_color)
        .child(line.label)
        .child(line.value)
}

impl RenderOnce for SummaryPanel {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (totals, rest): (Vec<_>, Vec<_>) = self
            .lines
            .into_iter()
            .partition(|line| line.variant == SummaryVariant::Total);

        Card::new()
            .title(self.title)
            .gap(12.0)
            .children(rest.into_iter().map(render_line))
            .when(!totals.is_empty(), |card| card.child(Separator::horizontal()))
            .children(totals.into_iter().map(render_line))
            .when_some(self.footer, |card, footer| card.child(footer))
    }
}
