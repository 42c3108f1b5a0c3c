//! Layout: turning a [`Table`] into a [`RenderPlan`].
//!
//! The plan is a snapshot. Row limiting, the empty-row filler, the
//! row-number column and title widening all happen on borrowed or cloned
//! columns, so the table itself is never touched and rendering the same
//! table twice produces the same text.

use std::borrow::Cow;

use tracing::debug;

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::table::Table;
use crate::types::{Align, PADDING};
use crate::util::display_width;

/// Display columns taken by one column separator plus the padding around it.
pub const GUTTER: usize = 1 + 2 * PADDING;

/// Width of the content area between the outer border glyphs, for columns of
/// the given widths.
///
/// ```rust
/// use boxtable::content_width;
///
/// assert_eq!(content_width(&[4, 3]), 4 + 3 + 3);
/// assert_eq!(content_width(&[]), 0);
/// ```
pub fn content_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * GUTTER
}

/// Widens `widths` so the content area is at least `title_width` columns.
///
/// The shortfall is split evenly; the last column absorbs the remainder.
/// Returns the extra width that was distributed, zero when the columns were
/// already wide enough. Applying it twice is a no-op the second time.
///
/// ```rust
/// use boxtable::distribute_title_width;
///
/// let mut widths = vec![1, 4, 7];
/// assert_eq!(distribute_title_width(&mut widths, 24), 6);
/// assert_eq!(widths, [3, 6, 9]);
/// assert_eq!(distribute_title_width(&mut widths, 24), 0);
/// ```
pub fn distribute_title_width(widths: &mut [usize], title_width: usize) -> usize {
    let current = content_width(widths);
    if title_width <= current || widths.is_empty() {
        return 0;
    }

    let extra = title_width - current;
    let n = widths.len();
    let share = extra / n;
    let last = extra - share * (n - 1);
    for width in &mut widths[..n - 1] {
        *width += share;
    }
    widths[n - 1] += last;
    debug!(extra, share, last, columns = n, "distributed title width");
    extra
}

/// Everything the renderer needs, derived from a table.
#[derive(Debug)]
pub struct RenderPlan<'a> {
    titles: &'a [String],
    columns: Vec<Cow<'a, Column>>,
    row_count: usize,
    title_width: usize,
}

impl<'a> RenderPlan<'a> {
    /// Validates `table` and lays it out.
    ///
    /// # Errors
    ///
    /// - [`TableError::NoColumns`] if the table has no columns.
    /// - [`TableError::RowCountMismatch`] if columns hold different numbers
    ///   of cells.
    /// - [`TableError::NoVisibleColumns`] if every column is hidden.
    pub fn derive(table: &'a Table) -> Result<Self> {
        let source = table.columns();
        let first = source.first().ok_or(TableError::NoColumns)?;
        let expected = first.cell_count();
        for (index, column) in source.iter().enumerate().skip(1) {
            if column.cell_count() != expected {
                return Err(TableError::RowCountMismatch {
                    column: index,
                    expected,
                    actual: column.cell_count(),
                });
            }
        }

        let mut columns: Vec<Cow<'a, Column>> = match table.limit() {
            Some(limit) => source.iter().map(|c| c.limited(limit)).collect(),
            None => source.iter().map(Cow::Borrowed).collect(),
        };

        let mut row_count = columns[0].cell_count();
        if row_count == 0 {
            for column in &mut columns {
                column.to_mut().add_cell("");
            }
            row_count = 1;
        }

        if table.has_row_numbers() {
            columns.insert(0, Cow::Owned(row_number_column(row_count)));
        }

        columns.retain(|c| c.is_visible());
        if columns.is_empty() {
            return Err(TableError::NoVisibleColumns);
        }

        let titles = table.title_lines();
        let mut title_width = 0;
        if !titles.is_empty() {
            let widest = titles.iter().map(|t| display_width(t)).max().unwrap_or(0);
            let mut widths: Vec<usize> = columns.iter().map(|c| c.width()).collect();
            distribute_title_width(&mut widths, widest);
            for (column, width) in columns.iter_mut().zip(&widths) {
                if *width > column.width() {
                    let extra = *width - column.width();
                    column.to_mut().widen(extra);
                }
            }
            title_width = content_width(&widths);
        }

        debug!(
            rows = row_count,
            visible_columns = columns.len(),
            limit = ?table.limit(),
            row_numbers = table.has_row_numbers(),
            "derived render plan"
        );

        Ok(RenderPlan {
            titles,
            columns,
            row_count,
            title_width,
        })
    }

    /// Title lines, already upper-cased.
    pub fn titles(&self) -> &[String] {
        self.titles
    }

    /// Visible columns in display order, with final widths.
    pub fn columns(&self) -> &[Cow<'a, Column>] {
        &self.columns
    }

    /// Number of data lines, at least one.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Final width of every visible column.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width()).collect()
    }

    /// Width of the area a title line is centered in; zero without titles.
    pub fn title_width(&self) -> usize {
        self.title_width
    }

    /// Whether a footer row is drawn: at least one visible footer has text.
    pub fn has_footer(&self) -> bool {
        self.columns.iter().any(|c| !c.footer().is_empty())
    }
}

fn row_number_column(rows: usize) -> Column {
    let mut column = Column::builder().data_align(Align::Center).build();
    for n in 1..=rows {
        column.add_cell(n);
    }
    column
}
