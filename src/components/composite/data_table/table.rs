//! DataTable Component
//!
//! A bordered table over typed rows. Rows are rendered in full; the tables
//! in blocks hold a handful of records.

use std::rc::Rc;

use gpui::{
    App, Div, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::helpers::indexed_id;
use crate::theme::colors::CatalogColors;

type RowHandler = Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>;

/// DataTable component
#[derive(IntoElement)]
pub struct DataTable<R: 'static> {
    id: SharedString,
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_height: f32,
    empty_message: SharedString,
    on_row_click: Option<RowHandler>,
}

impl<R: 'static> DataTable<R> {
    /// Create a new data table
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            row_height: 52.0,
            empty_message: "No data".into(),
            on_row_click: None,
        }
    }

    pub fn columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn rows(mut self, rows: Vec<R>) -> Self {
        self.rows = rows;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Set the empty message
    pub fn empty_message(mut self, message: impl Into<SharedString>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Handler receiving the clicked row index
    pub fn on_row_click(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_row_click = Some(Rc::new(handler));
        self
    }
}

fn cell(width: ColumnWidth, align_end: bool) -> Div {
    let cell = div().px_4().flex().items_center().overflow_hidden();
    let cell = match width {
        ColumnWidth::Fixed(w) => cell.w(px(w)).flex_shrink_0(),
        ColumnWidth::Flex(grow) => cell.flex_grow().flex_basis(px(0.0)).min_w(px(60.0 * grow)),
    };
    if align_end { cell.justify_end() } else { cell }
}

impl<R: 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let header = div()
            .h(px(40.0))
            .w_full()
            .flex()
            .items_center()
            .bg(CatalogColors::table_header_bg())
            .border_b_1()
            .border_color(CatalogColors::border())
            .children(self.columns.iter().map(|col| {
                cell(col.width, col.align_end)
                    .text_xs()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(CatalogColors::text_muted())
                    .child(col.label.clone())
            }));

        let table = div()
            .w_full()
            .flex()
            .flex_col()
            .bg(CatalogColors::content_bg())
            .border_1()
            .border_color(CatalogColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(header);

        if self.rows.is_empty() {
            return table.child(
                div()
                    .h(px(96.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_sm()
                    .text_color(CatalogColors::text_muted())
                    .child(self.empty_message),
            );
        }

        let columns = &self.columns;
        let row_height = self.row_height;
        let last = self.rows.len() - 1;
        let id = self.id;
        let on_row_click = self.on_row_click;

        table.children(self.rows.iter().enumerate().map(|(ix, row)| {
            div()
                .id(indexed_id(&id, ix))
                .h(px(row_height))
                .w_full()
                .flex()
                .items_center()
                .when(ix != last, |el| el.border_b_1().border_color(CatalogColors::border()))
                .hover(|s| s.bg(CatalogColors::table_row_hover()))
                .when_some(on_row_click.clone(), |el, handler| {
                    el.cursor_pointer()
                        .on_click(move |_event, window, cx| handler(&ix, window, cx))
                })
                .children(columns.iter().map(|col| {
                    cell(col.width, col.align_end)
                        .text_sm()
                        .text_color(CatalogColors::text_primary())
                        .child(col.render_cell(row))
                }))
        }))
    }
}
