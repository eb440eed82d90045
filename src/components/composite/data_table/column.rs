//! Column Definition
//!
//! Defines table columns with their widths and cell renderers.

use gpui::{AnyElement, SharedString};

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column header label
    pub label: SharedString,
    /// Column width
    pub width: ColumnWidth,
    /// Right-align header and cells, for amounts
    pub align_end: bool,
    /// Cell renderer function
    pub render: Box<dyn Fn(&R) -> AnyElement>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Share of the remaining space
    Flex(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1.0)
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column
    pub fn new(label: impl Into<SharedString>, render: impl Fn(&R) -> AnyElement + 'static) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::default(),
            align_end: false,
            render: Box::new(render),
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width
    pub fn flex_width(mut self, grow: f32) -> Self {
        self.width = ColumnWidth::Flex(grow);
        self
    }

    pub fn align_end(mut self) -> Self {
        self.align_end = true;
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}

#[cfg(test)]
mod tests {
    use gpui::IntoElement;

    use super::*;

    #[test]
    fn columns_default_to_one_flex_share() {
        let column: Column<u32> = Column::new("Qty", |_| gpui::Empty.into_any_element());
        assert_eq!(column.width, ColumnWidth::Flex(1.0));
        assert!(!column.align_end);
        let column = column.fixed_width(120.0).align_end();
        assert_eq!(column.width, ColumnWidth::Fixed(120.0));
        assert!(column.align_end);
    }
}
