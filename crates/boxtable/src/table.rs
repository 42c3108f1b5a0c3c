//! The [`Table`] type and its builder.
//!
//! A table owns its title lines, columns and presentation settings. Data can
//! be added column-wise through [`Column::add_cell`], row-wise through
//! [`Table::add_rows`], or one cell at a time by header name through
//! [`Table::add_data`].
//!
//! # Example
//!
//! ```rust
//! use boxtable::Table;
//!
//! let mut table = Table::builder().build();
//! table.add_header(["name", "age"]);
//! table.add_rows([["John", "25"], ["Tom", "14"]])?;
//!
//! assert_eq!(
//!     table.render()?,
//!     "+------+-----+\n\
//!      | NAME | AGE |\n\
//!      +------+-----+\n\
//!      | John | 25  |\n\
//!      | Tom  | 14  |\n\
//!      +------+-----+\n"
//! );
//! # Ok::<(), boxtable::TableError>(())
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use crate::border::BorderPalette;
use crate::column::Column;
use crate::error::{Result, TableError};
use crate::layout::RenderPlan;
use crate::render::render_plan;
use crate::types::Overflow;

/// Line separator used unless the builder is given another.
pub const DEFAULT_LINE_SEPARATOR: &str = "\n";

/// A text table: titles, columns and the settings used to draw them.
#[derive(Clone, Debug)]
pub struct Table {
    titles: Vec<String>,
    columns: Vec<Column>,
    border: BorderPalette,
    limit: Option<usize>,
    row_numbers: bool,
    overflow: Overflow,
    line_separator: String,
}

impl Default for Table {
    fn default() -> Self {
        TableBuilder::default().build()
    }
}

impl Table {
    /// Create a table builder for fluent construction.
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Title lines, upper-cased, in display order.
    pub fn title_lines(&self) -> &[String] {
        &self.titles
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn border(&self) -> &BorderPalette {
        &self.border
    }

    /// Maximum number of data rows shown, `None` for all of them.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn has_row_numbers(&self) -> bool {
        self.row_numbers
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    /// Appends a title line. It is stored upper-cased.
    pub fn add_title_line(&mut self, title: impl AsRef<str>) -> &mut Self {
        self.titles.push(title.as_ref().to_uppercase());
        self
    }

    /// Appends columns after the existing ones.
    pub fn add_columns<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = Column>,
    {
        self.columns.extend(columns);
        self
    }

    /// Appends one auto-width column per header name, with default
    /// alignment.
    pub fn add_header<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_columns(
            names
                .into_iter()
                .map(|name| Column::builder().header(name).build()),
        )
    }

    /// Appends row-major data, one value per column in column order.
    ///
    /// All rows are checked before any is stored, so a rejected call leaves
    /// the table unchanged.
    ///
    /// # Errors
    ///
    /// [`TableError::RowLength`] if a row does not have exactly one value
    /// per column.
    pub fn add_rows<R, I, T>(&mut self, rows: R) -> Result<&mut Self>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let expected = self.columns.len();
        let mut staged = Vec::new();
        for (row, values) in rows.into_iter().enumerate() {
            let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
            if values.len() != expected {
                return Err(TableError::RowLength {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
            staged.push(values);
        }

        for values in staged {
            for (column, value) in self.columns.iter_mut().zip(values) {
                column.add_cell(value);
            }
        }
        Ok(self)
    }

    /// Appends one cell to the column whose header matches `column`,
    /// ignoring case.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownColumn`] if no header matches.
    pub fn add_data<T: Display>(&mut self, column: &str, value: T) -> Result<&mut Self> {
        self.column_mut(column)?.add_cell(value);
        Ok(self)
    }

    /// Like [`add_data`](Self::add_data) for a value that may be missing;
    /// `None` is stored as `"null"`.
    pub fn add_optional_data<T: Display>(
        &mut self,
        column: &str,
        value: Option<T>,
    ) -> Result<&mut Self> {
        self.column_mut(column)?.add_optional_cell(value);
        Ok(self)
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        let wanted = name.to_uppercase();
        self.columns
            .iter_mut()
            .find(|c| c.header() == wanted)
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Renders the table to a string.
    ///
    /// Rendering reads the table without changing it; calling this twice
    /// gives the same text.
    ///
    /// # Errors
    ///
    /// [`TableError::NoColumns`], [`TableError::RowCountMismatch`] or
    /// [`TableError::NoVisibleColumns`] when the table cannot be laid out.
    pub fn render(&self) -> Result<String> {
        let plan = RenderPlan::derive(self)?;
        render_plan(&plan, &self.border, self.overflow, &self.line_separator)
    }

    /// Renders the table and writes it to `sink`, then flushes.
    ///
    /// Nothing is written if rendering fails.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        let text = self.render()?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Renders the table to standard output.
    pub fn print(&self) -> Result<()> {
        self.write_to(io::stdout().lock())
    }
}

/// Builder for constructing [`Table`] instances.
///
/// Defaults: no titles, no columns, [`BorderPalette::BASIC`], no row limit,
/// no row numbers, [`Overflow::ClipRight`], `"\n"` line separator.
#[derive(Clone, Debug)]
pub struct TableBuilder {
    titles: Vec<String>,
    columns: Vec<Column>,
    border: BorderPalette,
    limit: Option<usize>,
    row_numbers: bool,
    overflow: Overflow,
    line_separator: String,
}

impl Default for TableBuilder {
    fn default() -> Self {
        TableBuilder {
            titles: Vec::new(),
            columns: Vec::new(),
            border: BorderPalette::default(),
            limit: None,
            row_numbers: false,
            overflow: Overflow::default(),
            line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
        }
    }
}

impl TableBuilder {
    /// Append a title line. Titles are stored upper-cased.
    pub fn title(mut self, title: impl AsRef<str>) -> Self {
        self.titles.push(title.as_ref().to_uppercase());
        self
    }

    /// Prefix every data row with its 1-based number.
    pub fn row_numbers(mut self, enabled: bool) -> Self {
        self.row_numbers = enabled;
        self
    }

    pub fn border(mut self, border: BorderPalette) -> Self {
        self.border = border;
        self
    }

    /// Show at most `limit` data rows, followed by an ellipsis row when
    /// rows were left out.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Show every data row. This is the default.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Append a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append several columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Text written after every line, including the last.
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Build the `Table` instance.
    pub fn build(self) -> Table {
        Table {
            titles: self.titles,
            columns: self.columns,
            border: self.border,
            limit: self.limit,
            row_numbers: self.row_numbers,
            overflow: self.overflow,
            line_separator: self.line_separator,
        }
    }
}
