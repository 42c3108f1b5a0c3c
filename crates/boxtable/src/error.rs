//! Error types for table construction and rendering.

use thiserror::Error;

/// Errors that can occur when building, configuring, or rendering a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Border palette does not cover every structural slot.
    #[error("border palette needs more than 28 glyphs, got {len}")]
    PaletteTooShort { len: usize },

    /// Invalid configuration value or document.
    #[error("invalid table configuration: {0}")]
    Config(String),

    /// Rendering was requested for a table without columns.
    #[error("table has no columns")]
    NoColumns,

    /// Every column is hidden, so there is nothing to lay out.
    #[error("table has no visible columns")]
    NoVisibleColumns,

    /// A column holds a different number of cells than the first column.
    #[error("column {column} has {actual} cells, expected {expected}")]
    RowCountMismatch {
        column: usize,
        expected: usize,
        actual: usize,
    },

    /// A row of input data does not have one value per column.
    #[error("row {row} has {actual} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A row of fields handed to the renderer does not match the visible columns.
    #[error("row has {actual} fields, expected {expected}")]
    FieldCountMismatch { expected: usize, actual: usize },

    /// No column header matches the requested name.
    #[error("column '{0}' does not exist")]
    UnknownColumn(String),

    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad category of a [`TableError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad palette, alignment name, or configuration document.
    Configuration,
    /// Columns, rows, or fields that do not line up.
    StructuralMismatch,
    /// Lookup by header name failed.
    UnknownColumn,
    /// Writing to the output sink failed.
    Io,
}

impl TableError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::PaletteTooShort { .. } | TableError::Config(_) => ErrorKind::Configuration,
            TableError::NoColumns
            | TableError::NoVisibleColumns
            | TableError::RowCountMismatch { .. }
            | TableError::RowLength { .. }
            | TableError::FieldCountMismatch { .. } => ErrorKind::StructuralMismatch,
            TableError::UnknownColumn(_) => ErrorKind::UnknownColumn,
            TableError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
