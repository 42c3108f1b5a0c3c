//! Border glyph palettes.
//!
//! A [`BorderPalette`] is a flat, ordered list of glyphs where each position
//! has a fixed structural meaning. The positions are named in [`slot`]. 22 of
//! the 29 positions are drawn; the others are reserved.
//!
//! ```text
//!  0  1  2  3   table top: left, fill, column separator, right
//!  4  5  6      content rows: left, column separator, right
//!  7  8  .  10  between title lines: left, fill, -, right
//! 14 15 16 17   between data rows and above the footer
//! 18 19 20 21   under the header: left, fill, column separator, right
//! 25 26 27 28   table bottom: left, fill, column separator, right
//! ```
//!
//! Four presets are provided as constants. They never change after
//! construction, so sharing them between tables is safe.

use std::borrow::Cow;

use crate::error::{Result, TableError};

/// Structural positions within a palette.
pub mod slot {
    pub const TOP_LEFT: usize = 0;
    pub const TOP_FILL: usize = 1;
    pub const TOP_SEPARATOR: usize = 2;
    pub const TOP_RIGHT: usize = 3;

    pub const ROW_LEFT: usize = 4;
    pub const ROW_SEPARATOR: usize = 5;
    pub const ROW_RIGHT: usize = 6;

    pub const TITLE_RULE_LEFT: usize = 7;
    pub const TITLE_RULE_FILL: usize = 8;
    pub const TITLE_RULE_RIGHT: usize = 10;

    pub const ROW_RULE_LEFT: usize = 14;
    pub const ROW_RULE_FILL: usize = 15;
    pub const ROW_RULE_SEPARATOR: usize = 16;
    pub const ROW_RULE_RIGHT: usize = 17;

    pub const HEADER_RULE_LEFT: usize = 18;
    pub const HEADER_RULE_FILL: usize = 19;
    pub const HEADER_RULE_SEPARATOR: usize = 20;
    pub const HEADER_RULE_RIGHT: usize = 21;

    pub const BOTTOM_LEFT: usize = 25;
    pub const BOTTOM_FILL: usize = 26;
    pub const BOTTOM_SEPARATOR: usize = 27;
    pub const BOTTOM_RIGHT: usize = 28;
}

/// Smallest number of glyphs a palette must carry.
pub const MIN_GLYPHS: usize = 29;

const FANCY_GLYPHS: [char; MIN_GLYPHS] = [
    '╔', '═', '╤', '╗', // top
    '║', '│', '║', // content
    '╠', '═', '╪', '╣', // title rule
    '║', '│', '║', // reserved
    '╟', '─', '┼', '╢', // row rule
    '╠', '═', '╪', '╣', // header rule
    '║', '│', '║', // reserved
    '╚', '═', '╧', '╝', // bottom
];

const BASIC_GLYPHS: [char; MIN_GLYPHS] = [
    '+', '-', '+', '+', // top
    '|', '|', '|', // content
    '+', '-', '+', '+', // title rule
    '|', '|', '|', // reserved
    '+', '-', '+', '+', // row rule
    '+', '-', '+', '+', // header rule
    '|', '|', '|', // reserved
    '+', '-', '+', '+', // bottom
];

/// Glyphs for one horizontal rule.
///
/// `None` means the glyph is omitted entirely rather than drawn as a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineGlyphs {
    pub left: Option<char>,
    pub fill: char,
    pub separator: Option<char>,
    pub right: Option<char>,
}

/// Glyphs framing a line of cell content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowGlyphs {
    pub left: Option<char>,
    pub separator: Option<char>,
    pub right: Option<char>,
}

/// An ordered set of border glyphs plus the row-boundary flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderPalette {
    glyphs: Cow<'static, [char]>,
    row_boundaries: bool,
}

impl BorderPalette {
    /// Double-line box drawing, no rules between data rows.
    pub const FANCY: BorderPalette = BorderPalette {
        glyphs: Cow::Borrowed(&FANCY_GLYPHS),
        row_boundaries: false,
    };

    /// Double-line box drawing with a rule between every pair of data rows.
    pub const FANCY_RULED: BorderPalette = BorderPalette {
        glyphs: Cow::Borrowed(&FANCY_GLYPHS),
        row_boundaries: true,
    };

    /// ASCII `+-|` borders, no rules between data rows. The default.
    pub const BASIC: BorderPalette = BorderPalette {
        glyphs: Cow::Borrowed(&BASIC_GLYPHS),
        row_boundaries: false,
    };

    /// ASCII `+-|` borders with a rule between every pair of data rows.
    pub const BASIC_RULED: BorderPalette = BorderPalette {
        glyphs: Cow::Borrowed(&BASIC_GLYPHS),
        row_boundaries: true,
    };

    /// Creates a palette from an ordered glyph sequence.
    ///
    /// Fails with [`TableError::PaletteTooShort`] unless more than 28 glyphs
    /// are supplied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use boxtable::BorderPalette;
    ///
    /// let palette = BorderPalette::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ123".chars(), false).unwrap();
    /// assert_eq!(palette.glyph(boxtable::slot::BOTTOM_RIGHT), Some('3'));
    /// assert_eq!(palette.glyph(29), None);
    ///
    /// assert!(BorderPalette::new("+-|".chars(), false).is_err());
    /// ```
    pub fn new<I: IntoIterator<Item = char>>(glyphs: I, row_boundaries: bool) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.len() < MIN_GLYPHS {
            return Err(TableError::PaletteTooShort { len: glyphs.len() });
        }
        Ok(BorderPalette {
            glyphs: Cow::Owned(glyphs),
            row_boundaries,
        })
    }

    /// Returns a copy of this palette with row boundaries switched on or off.
    pub fn with_row_boundaries(mut self, enabled: bool) -> Self {
        self.row_boundaries = enabled;
        self
    }

    /// Whether a rule is drawn between consecutive data rows.
    pub fn row_boundaries(&self) -> bool {
        self.row_boundaries
    }

    /// All glyphs, in slot order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// The glyph at a structural position, or `None` past the end of the
    /// palette. Every constant in [`slot`] is in range for any constructed
    /// palette.
    pub fn glyph(&self, slot: usize) -> Option<char> {
        self.glyphs.get(slot).copied()
    }

    // Only called with `slot` constants; construction guarantees MIN_GLYPHS.
    fn at(&self, slot: usize) -> char {
        self.glyphs[slot]
    }

    fn line(&self, left: usize, fill: usize, separator: usize, right: usize) -> LineGlyphs {
        LineGlyphs {
            left: Some(self.at(left)),
            fill: self.at(fill),
            separator: Some(self.at(separator)),
            right: Some(self.at(right)),
        }
    }

    /// Top edge of the table.
    ///
    /// When a title follows, the top edge has no column divisions yet, so
    /// the fill glyph stands in for the separator.
    pub fn top_border(&self, titled: bool) -> LineGlyphs {
        let separator = if titled {
            slot::TOP_FILL
        } else {
            slot::TOP_SEPARATOR
        };
        self.line(slot::TOP_LEFT, slot::TOP_FILL, separator, slot::TOP_RIGHT)
    }

    /// Rule between two title lines; spans the full width.
    pub fn title_separator(&self) -> LineGlyphs {
        self.line(
            slot::TITLE_RULE_LEFT,
            slot::TITLE_RULE_FILL,
            slot::TITLE_RULE_FILL,
            slot::TITLE_RULE_RIGHT,
        )
    }

    /// Rule under the last title line, where column divisions begin.
    pub fn title_bottom(&self) -> LineGlyphs {
        self.line(
            slot::HEADER_RULE_LEFT,
            slot::HEADER_RULE_FILL,
            slot::TOP_SEPARATOR,
            slot::HEADER_RULE_RIGHT,
        )
    }

    /// Rule under the header row.
    pub fn header_bottom(&self) -> LineGlyphs {
        self.line(
            slot::HEADER_RULE_LEFT,
            slot::HEADER_RULE_FILL,
            slot::HEADER_RULE_SEPARATOR,
            slot::HEADER_RULE_RIGHT,
        )
    }

    /// Rule between data rows, also drawn above the footer.
    pub fn row_separator(&self) -> LineGlyphs {
        self.line(
            slot::ROW_RULE_LEFT,
            slot::ROW_RULE_FILL,
            slot::ROW_RULE_SEPARATOR,
            slot::ROW_RULE_RIGHT,
        )
    }

    /// Bottom edge of the table.
    pub fn bottom_border(&self) -> LineGlyphs {
        self.line(
            slot::BOTTOM_LEFT,
            slot::BOTTOM_FILL,
            slot::BOTTOM_SEPARATOR,
            slot::BOTTOM_RIGHT,
        )
    }

    /// Frame for title, header, data and footer lines.
    pub fn content_row(&self) -> RowGlyphs {
        RowGlyphs {
            left: Some(self.at(slot::ROW_LEFT)),
            separator: Some(self.at(slot::ROW_SEPARATOR)),
            right: Some(self.at(slot::ROW_RIGHT)),
        }
    }
}

impl Default for BorderPalette {
    fn default() -> Self {
        BorderPalette::BASIC
    }
}
