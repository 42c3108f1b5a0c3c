//! Core value types shared by columns, the layout engine and the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Glyph inserted where content was clipped, and appended as the last cell
/// of a row-limited column.
pub const ELLIPSIS: char = '…';

/// Spaces on each side of every cell, between content and border glyphs.
pub const PADDING: usize = 1;

/// Horizontal alignment of text within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text; odd leftover space goes on the right.
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl FromStr for Align {
    type Err = TableError;

    /// Parses `left`, `center` or `right`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(TableError::Config(format!(
                "invalid alignment: '{}'. Expected 'left', 'center' or 'right'.",
                s
            ))),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        };
        f.write_str(name)
    }
}

/// How content wider than its column is shortened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Keep the start, clip the end: "Hello World" → "Hello W…"
    #[default]
    ClipRight,
    /// Keep the end, clip the start: "Hello World" → "…o World"
    ClipLeft,
}

impl FromStr for Overflow {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "clip_right" => Ok(Overflow::ClipRight),
            "clip_left" => Ok(Overflow::ClipLeft),
            _ => Err(TableError::Config(format!(
                "invalid overflow behaviour: '{}'. Expected 'clip_right' or 'clip_left'.",
                s
            ))),
        }
    }
}
