//! Line emission: borders, content rows and the assembled grid.
//!
//! [`GridWriter`] knows how to draw one line at a time. [`render_plan`]
//! drives it over a [`RenderPlan`] in the fixed order top border, titles,
//! header, data rows, optional footer, bottom border.

use tracing::trace;

use crate::border::{BorderPalette, LineGlyphs, RowGlyphs};
use crate::error::{Result, TableError};
use crate::justify::justify_into;
use crate::layout::RenderPlan;
use crate::types::{Align, Overflow, PADDING};
use crate::util::push_repeated;

/// Accumulates grid lines into a string buffer.
#[derive(Debug)]
pub struct GridWriter<'s> {
    out: String,
    line_separator: &'s str,
    overflow: Overflow,
}

impl<'s> GridWriter<'s> {
    /// Creates a writer that ends every line with `line_separator` and
    /// clips overflowing cells according to `overflow`.
    pub fn new(line_separator: &'s str, overflow: Overflow) -> Self {
        GridWriter {
            out: String::new(),
            line_separator,
            overflow,
        }
    }

    /// Draws a horizontal rule across columns of the given widths.
    ///
    /// Each column contributes `width + 2 * PADDING` fill glyphs; the
    /// separator goes between columns, never after the last one.
    ///
    /// ```rust
    /// use boxtable::{BorderPalette, GridWriter, Overflow};
    ///
    /// let mut writer = GridWriter::new("\n", Overflow::ClipRight);
    /// writer.horizontal_line(BorderPalette::BASIC.bottom_border(), &[4, 3]);
    /// assert_eq!(writer.finish(), "+------+-----+\n");
    /// ```
    pub fn horizontal_line(&mut self, glyphs: LineGlyphs, widths: &[usize]) {
        if let Some(left) = glyphs.left {
            self.out.push(left);
        }
        for (i, width) in widths.iter().enumerate() {
            push_repeated(&mut self.out, glyphs.fill, width + 2 * PADDING);
            if i + 1 < widths.len() {
                if let Some(separator) = glyphs.separator {
                    self.out.push(separator);
                }
            }
        }
        if let Some(right) = glyphs.right {
            self.out.push(right);
        }
        self.end_line();
    }

    /// Draws one content line, fitting each value to its column.
    ///
    /// # Errors
    ///
    /// [`TableError::FieldCountMismatch`] if `values` or `aligns` do not hold
    /// exactly one entry per width. Nothing is written in that case.
    pub fn row(
        &mut self,
        glyphs: RowGlyphs,
        values: &[&str],
        aligns: &[Align],
        widths: &[usize],
    ) -> Result<()> {
        for actual in [values.len(), aligns.len()] {
            if actual != widths.len() {
                return Err(TableError::FieldCountMismatch {
                    expected: widths.len(),
                    actual,
                });
            }
        }

        if let Some(left) = glyphs.left {
            self.out.push(left);
        }
        for (i, ((value, align), width)) in values.iter().zip(aligns).zip(widths).enumerate() {
            justify_into(&mut self.out, value, *align, *width, PADDING, self.overflow);
            if i + 1 < widths.len() {
                if let Some(separator) = glyphs.separator {
                    self.out.push(separator);
                }
            }
        }
        if let Some(right) = glyphs.right {
            self.out.push(right);
        }
        self.end_line();
        Ok(())
    }

    /// Draws a title centered across the full content width.
    pub fn title_line(&mut self, glyphs: RowGlyphs, title: &str, width: usize) {
        if let Some(left) = glyphs.left {
            self.out.push(left);
        }
        justify_into(&mut self.out, title, Align::Center, width, PADDING, self.overflow);
        if let Some(right) = glyphs.right {
            self.out.push(right);
        }
        self.end_line();
    }

    fn end_line(&mut self) {
        self.out.push_str(self.line_separator);
    }

    /// Returns everything written so far.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Renders a complete grid from a derived plan.
pub fn render_plan(
    plan: &RenderPlan<'_>,
    border: &BorderPalette,
    overflow: Overflow,
    line_separator: &str,
) -> Result<String> {
    let columns = plan.columns();
    let widths = plan.widths();
    let titles = plan.titles();
    let mut writer = GridWriter::new(line_separator, overflow);

    trace!("top border");
    writer.horizontal_line(border.top_border(!titles.is_empty()), &widths);

    for (i, title) in titles.iter().enumerate() {
        trace!(line = i, "title");
        writer.title_line(border.content_row(), title, plan.title_width());
        let rule = if i + 1 < titles.len() {
            border.title_separator()
        } else {
            border.title_bottom()
        };
        writer.horizontal_line(rule, &widths);
    }

    trace!("header");
    let headers: Vec<&str> = columns.iter().map(|c| c.header()).collect();
    let header_aligns: Vec<Align> = columns.iter().map(|c| c.header_align()).collect();
    writer.row(border.content_row(), &headers, &header_aligns, &widths)?;
    writer.horizontal_line(border.header_bottom(), &widths);

    let data_aligns: Vec<Align> = columns.iter().map(|c| c.data_align()).collect();
    let rows = plan.row_count();
    for row in 0..rows {
        trace!(row, "data row");
        let values: Vec<&str> = columns
            .iter()
            .map(|c| c.cell(row).unwrap_or_default())
            .collect();
        writer.row(border.content_row(), &values, &data_aligns, &widths)?;
        if border.row_boundaries() && row + 1 < rows {
            writer.horizontal_line(border.row_separator(), &widths);
        }
    }

    if plan.has_footer() {
        trace!("footer");
        writer.horizontal_line(border.row_separator(), &widths);
        let footers: Vec<&str> = columns.iter().map(|c| c.footer()).collect();
        let footer_aligns: Vec<Align> = columns.iter().map(|c| c.footer_align()).collect();
        writer.row(border.content_row(), &footers, &footer_aligns, &widths)?;
    }

    trace!("bottom border");
    writer.horizontal_line(border.bottom_border(), &widths);
    Ok(writer.finish())
}
