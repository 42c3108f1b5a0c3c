//! Table columns: header, footer, alignment, visibility, width and cells.
//!
//! A column's width is either explicit (fixed by the caller) or automatic.
//! Automatic widths grow as cells are added and never shrink:
//!
//! ```rust
//! use boxtable::Column;
//!
//! let mut name = Column::builder().header("name").build();
//! assert_eq!(name.width(), 4);
//!
//! name.add_cell("Alice").add_cell("Bob");
//! assert_eq!(name.width(), 5);
//! ```

use std::borrow::Cow;
use std::fmt::Display;

use crate::types::{Align, ELLIPSIS};
use crate::util::display_width;

/// Text stored for a missing cell value.
pub const NULL_CELL: &str = "null";

/// A single table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    header: String,
    footer: String,
    header_align: Align,
    data_align: Align,
    footer_align: Align,
    visible: bool,
    explicit_width: bool,
    width: usize,
    cells: Vec<String>,
}

impl Default for Column {
    fn default() -> Self {
        ColumnBuilder::default().build()
    }
}

impl Column {
    /// Create a column builder for fluent construction.
    pub fn builder() -> ColumnBuilder {
        ColumnBuilder::default()
    }

    /// Header text, upper-cased.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn header_align(&self) -> Align {
        self.header_align
    }

    pub fn data_align(&self) -> Align {
        self.data_align
    }

    pub fn footer_align(&self) -> Align {
        self.footer_align
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the width was set by the caller instead of grown from content.
    pub fn has_explicit_width(&self) -> bool {
        self.explicit_width
    }

    /// Content width in display columns, excluding padding.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Appends a cell, growing the width if it is automatic.
    ///
    /// Anything with a `Display` impl is accepted; numbers, characters and
    /// booleans are stored in their displayed form.
    ///
    /// ```rust
    /// use boxtable::Column;
    ///
    /// let mut col = Column::default();
    /// col.add_cell("Cell1").add_cell(1).add_cell('c').add_cell(3.4).add_cell(true);
    /// assert_eq!(col.cells(), ["Cell1", "1", "c", "3.4", "true"]);
    /// ```
    pub fn add_cell<T: Display>(&mut self, value: T) -> &mut Self {
        self.push_cell(value.to_string());
        self
    }

    /// Appends a cell that may be missing; `None` is stored as `"null"`.
    pub fn add_optional_cell<T: Display>(&mut self, value: Option<T>) -> &mut Self {
        match value {
            Some(value) => self.add_cell(value),
            None => self.add_cell(NULL_CELL),
        }
    }

    fn push_cell(&mut self, cell: String) {
        self.grow_to(display_width(&cell));
        self.cells.push(cell);
    }

    fn grow_to(&mut self, width: usize) {
        if !self.explicit_width {
            self.width = self.width.max(width);
        }
    }

    /// Widens the column regardless of width mode. Used when a title is wider
    /// than the columns beneath it.
    pub(crate) fn widen(&mut self, extra: usize) {
        self.width += extra;
    }

    /// Returns this column cut down to at most `limit` data cells.
    ///
    /// Columns that already fit are returned as-is. Otherwise the result holds
    /// the first `limit` cells followed by one [`ELLIPSIS`] cell, and an
    /// automatic width is recomputed from the header, footer and the retained
    /// cells only.
    ///
    /// ```rust
    /// use boxtable::Column;
    ///
    /// let mut col = Column::builder().header("id").build();
    /// col.add_cell("1").add_cell("2").add_cell("3");
    ///
    /// let limited = col.limited(2);
    /// assert_eq!(limited.cells(), ["1", "2", "…"]);
    /// assert_eq!(col.limited(5).cell_count(), 3);
    /// ```
    pub fn limited(&self, limit: usize) -> Cow<'_, Column> {
        if self.cells.len() <= limit {
            return Cow::Borrowed(self);
        }

        let mut column = Column {
            cells: Vec::with_capacity(limit + 1),
            width: if self.explicit_width {
                self.width
            } else {
                base_width(&self.header, &self.footer)
            },
            ..self.without_cells()
        };
        for cell in &self.cells[..limit] {
            column.push_cell(cell.clone());
        }
        column.push_cell(ELLIPSIS.to_string());
        Cow::Owned(column)
    }

    fn without_cells(&self) -> Column {
        Column {
            header: self.header.clone(),
            footer: self.footer.clone(),
            header_align: self.header_align,
            data_align: self.data_align,
            footer_align: self.footer_align,
            visible: self.visible,
            explicit_width: self.explicit_width,
            width: self.width,
            cells: Vec::new(),
        }
    }
}

fn base_width(header: &str, footer: &str) -> usize {
    display_width(header).max(display_width(footer))
}

/// Builder for constructing [`Column`] instances.
///
/// Defaults: empty header and footer, header and footer centered, data
/// left-aligned, visible, automatic width.
#[derive(Clone, Debug)]
pub struct ColumnBuilder {
    header: String,
    footer: String,
    header_align: Align,
    data_align: Align,
    footer_align: Align,
    visible: bool,
    width: Option<usize>,
}

impl Default for ColumnBuilder {
    fn default() -> Self {
        ColumnBuilder {
            header: String::new(),
            footer: String::new(),
            header_align: Align::Center,
            data_align: Align::Left,
            footer_align: Align::Center,
            visible: true,
            width: None,
        }
    }
}

impl ColumnBuilder {
    /// Set the header text. It is stored upper-cased.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    pub fn data_align(mut self, align: Align) -> Self {
        self.data_align = align;
        self
    }

    pub fn footer_align(mut self, align: Align) -> Self {
        self.footer_align = align;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Fix the content width. Cells wider than this are clipped on render.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Build the `Column` instance.
    pub fn build(self) -> Column {
        let header = self.header.to_uppercase();
        let (explicit_width, width) = match self.width {
            Some(width) => (true, width),
            None => (false, base_width(&header, &self.footer)),
        };
        Column {
            header,
            footer: self.footer,
            header_align: self.header_align,
            data_align: self.data_align,
            footer_align: self.footer_align,
            visible: self.visible,
            explicit_width,
            width,
            cells: Vec::new(),
        }
    }
}
