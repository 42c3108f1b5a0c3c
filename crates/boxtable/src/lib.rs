//! Boxtable - Fixed-width text tables with box-drawing borders.
//!
//! Boxtable renders columns of text as a grid for terminal output. It
//! supports:
//!
//! - Titles spanning the whole table, with columns widened to fit them
//! - Per-column header, data and footer alignment
//! - Automatic or fixed column widths, measured in display columns so
//!   CJK text lines up
//! - Clipping with an ellipsis from either end
//! - Hidden columns, row numbers, and a row limit with an ellipsis row
//! - ASCII and double-line presets, or any custom 29-glyph palette
//! - Declarative tables from YAML or JSON
//!
//! # Quick Start
//!
//! ```rust
//! use boxtable::{Align, BorderPalette, Column, Table};
//!
//! let mut table = Table::builder()
//!     .title("Scores")
//!     .border(BorderPalette::FANCY)
//!     .column(Column::builder().header("name").build())
//!     .column(
//!         Column::builder()
//!             .header("points")
//!             .data_align(Align::Right)
//!             .footer("24")
//!             .build(),
//!     )
//!     .build();
//!
//! table.add_rows([["Ann", "17"], ["Bo", "7"]])?;
//!
//! let text = table.render()?;
//! assert!(text.starts_with("╔"));
//! assert!(text.contains("SCORES"));
//! # Ok::<(), boxtable::TableError>(())
//! ```
//!
//! # Grid Structure
//!
//! ```text
//! top border
//! title line        (per title, separated by title rules)
//! title bottom      (column divisions start here)
//! header row
//! header bottom
//! data rows         (row rules between them when enabled)
//! row rule + footer (only when a visible footer has text)
//! bottom border
//! ```
//!
//! Every line ends with the table's line separator, the last one included.
//!
//! # Rendering
//!
//! [`Table::render`] derives a [`RenderPlan`] from the table: columns are
//! validated, row-limited, numbered and widened for titles on a snapshot,
//! leaving the table as it was. The plan is then drawn line by line with a
//! [`GridWriter`].

mod border;
mod column;
mod config;
mod error;
mod justify;
mod layout;
mod render;
mod table;
mod types;
mod util;

// Re-export public API
pub use border::{slot, BorderPalette, LineGlyphs, RowGlyphs, MIN_GLYPHS};
pub use column::{Column, ColumnBuilder, NULL_CELL};
pub use config::{BorderConfig, BorderPreset, CellValue, ColumnConfig, TableConfig};
pub use error::{ErrorKind, Result, TableError};
pub use justify::{clip, justify, left_padding};
pub use layout::{content_width, distribute_title_width, RenderPlan, GUTTER};
pub use render::{render_plan, GridWriter};
pub use table::{Table, TableBuilder, DEFAULT_LINE_SEPARATOR};
pub use types::{Align, Overflow, ELLIPSIS, PADDING};
pub use util::{display_width, prefix_within, suffix_within};
