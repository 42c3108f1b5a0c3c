//! Declarative table definitions loaded from YAML or JSON.
//!
//! A [`TableConfig`] describes the same things the builders do: titles,
//! border, limit, overflow, line separator and columns, and may also carry
//! the cell data. Every key is optional and defaults to the builder default.
//!
//! ```rust
//! use boxtable::TableConfig;
//!
//! let config = TableConfig::from_yaml(r#"
//! border: fancy
//! columns:
//!   - header: name
//!     cells: [Ann, Bo]
//!   - header: score
//!     data_align: right
//!     cells: [10, 7]
//! "#)?;
//!
//! let table = config.build()?;
//! assert_eq!(table.columns()[1].cells(), ["10", "7"]);
//! # Ok::<(), boxtable::TableError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::border::BorderPalette;
use crate::column::{Column, NULL_CELL};
use crate::error::Result;
use crate::table::{Table, DEFAULT_LINE_SEPARATOR};
use crate::types::{Align, Overflow};

/// A whole table: settings, columns and optionally data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Title lines, top to bottom.
    pub titles: Vec<String>,
    /// Prefix data rows with their 1-based number.
    pub row_numbers: bool,
    pub border: BorderConfig,
    /// Maximum data rows shown; absent means all.
    pub limit: Option<usize>,
    pub overflow: Overflow,
    /// Defaults to `"\n"`.
    pub line_separator: Option<String>,
    pub columns: Vec<ColumnConfig>,
}

impl TableConfig {
    /// Parses a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a JSON document.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Builds the described table.
    ///
    /// # Errors
    ///
    /// [`TableError::PaletteTooShort`](crate::TableError::PaletteTooShort)
    /// if a custom border has too few glyphs.
    pub fn build(&self) -> Result<Table> {
        let mut builder = Table::builder()
            .row_numbers(self.row_numbers)
            .border(self.border.palette()?)
            .overflow(self.overflow)
            .line_separator(
                self.line_separator
                    .as_deref()
                    .unwrap_or(DEFAULT_LINE_SEPARATOR),
            )
            .columns(self.columns.iter().map(ColumnConfig::build));
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        for title in &self.titles {
            builder = builder.title(title);
        }
        Ok(builder.build())
    }
}

/// One column: presentation settings and optionally its cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    pub header: String,
    pub footer: String,
    pub header_align: Align,
    pub data_align: Align,
    pub footer_align: Align,
    pub visible: bool,
    /// Fixed content width; absent means the column sizes to its content.
    pub width: Option<usize>,
    pub cells: Vec<CellValue>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        ColumnConfig {
            header: String::new(),
            footer: String::new(),
            header_align: Align::Center,
            data_align: Align::Left,
            footer_align: Align::Center,
            visible: true,
            width: None,
            cells: Vec::new(),
        }
    }
}

impl ColumnConfig {
    /// Builds the described column, cells included.
    pub fn build(&self) -> Column {
        let mut builder = Column::builder()
            .header(self.header.as_str())
            .footer(self.footer.as_str())
            .header_align(self.header_align)
            .data_align(self.data_align)
            .footer_align(self.footer_align)
            .visible(self.visible);
        if let Some(width) = self.width {
            builder = builder.width(width);
        }
        let mut column = builder.build();
        for cell in &self.cells {
            column.add_cell(cell);
        }
        column
    }
}

/// A scalar cell value as it appears in a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Rendered as `null`.
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Null => f.write_str(NULL_CELL),
        }
    }
}

/// Named border presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderPreset {
    #[default]
    Basic,
    BasicRuled,
    Fancy,
    FancyRuled,
}

impl BorderPreset {
    fn name(self) -> &'static str {
        match self {
            BorderPreset::Basic => "basic",
            BorderPreset::BasicRuled => "basic_ruled",
            BorderPreset::Fancy => "fancy",
            BorderPreset::FancyRuled => "fancy_ruled",
        }
    }

    fn palette(self) -> BorderPalette {
        match self {
            BorderPreset::Basic => BorderPalette::BASIC,
            BorderPreset::BasicRuled => BorderPalette::BASIC_RULED,
            BorderPreset::Fancy => BorderPalette::FANCY,
            BorderPreset::FancyRuled => BorderPalette::FANCY_RULED,
        }
    }
}

/// Border selection: a preset name or an explicit glyph string.
///
/// In a document this is either `fancy` (or `basic`, `basic_ruled`,
/// `fancy_ruled`) or a map `{ glyphs: "...", row_boundaries: true }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BorderRaw", into = "BorderRaw")]
pub enum BorderConfig {
    Preset(BorderPreset),
    Custom { glyphs: String, row_boundaries: bool },
}

impl Default for BorderConfig {
    fn default() -> Self {
        BorderConfig::Preset(BorderPreset::default())
    }
}

impl BorderConfig {
    /// Resolves to a palette, validating custom glyph strings.
    pub fn palette(&self) -> Result<BorderPalette> {
        match self {
            BorderConfig::Preset(preset) => Ok(preset.palette()),
            BorderConfig::Custom {
                glyphs,
                row_boundaries,
            } => BorderPalette::new(glyphs.chars(), *row_boundaries),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BorderRaw {
    Named(String),
    Custom {
        glyphs: String,
        #[serde(default)]
        row_boundaries: bool,
    },
}

impl From<BorderConfig> for BorderRaw {
    fn from(border: BorderConfig) -> Self {
        match border {
            BorderConfig::Preset(preset) => BorderRaw::Named(preset.name().to_string()),
            BorderConfig::Custom {
                glyphs,
                row_boundaries,
            } => BorderRaw::Custom {
                glyphs,
                row_boundaries,
            },
        }
    }
}

impl TryFrom<BorderRaw> for BorderConfig {
    type Error = String;

    fn try_from(raw: BorderRaw) -> std::result::Result<Self, Self::Error> {
        match raw {
            BorderRaw::Named(name) => {
                let preset = match name.to_ascii_lowercase().replace('-', "_").as_str() {
                    "basic" => BorderPreset::Basic,
                    "basic_ruled" => BorderPreset::BasicRuled,
                    "fancy" => BorderPreset::Fancy,
                    "fancy_ruled" => BorderPreset::FancyRuled,
                    _ => {
                        return Err(format!(
                            "Invalid border: '{}'. Expected 'basic', 'basic_ruled', 'fancy' or 'fancy_ruled'.",
                            name
                        ))
                    }
                };
                Ok(BorderConfig::Preset(preset))
            }
            BorderRaw::Custom {
                glyphs,
                row_boundaries,
            } => Ok(BorderConfig::Custom {
                glyphs,
                row_boundaries,
            }),
        }
    }
}
