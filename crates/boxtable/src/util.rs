//! Display-width measurement and clipping helpers.
//!
//! Every sizing and padding decision in the crate goes through
//! [`display_width`], so wide characters (CJK, most emoji) count as two
//! terminal columns and zero-width characters count as none.

use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal columns `s` occupies.
///
/// # Example
///
/// ```rust
/// use boxtable::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width(""), 0);
/// assert_eq!(display_width("张远航"), 6); // 3 chars, 2 columns each
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Longest prefix of `s` whose display width is at most `max_width`.
///
/// Prefixes are measured as whole strings with [`display_width`], so
/// variation selectors, joiners and control characters count exactly as they
/// do when the cell is sized.
///
/// # Example
///
/// ```rust
/// use boxtable::prefix_within;
///
/// assert_eq!(prefix_within("Hello World", 5), "Hello");
/// assert_eq!(prefix_within("张远航", 3), "张"); // second char would need column 4
/// ```
pub fn prefix_within(s: &str, max_width: usize) -> &str {
    let mut fits = 0;
    for (i, c) in s.char_indices() {
        let end = i + c.len_utf8();
        if display_width(&s[..end]) > max_width {
            break;
        }
        fits = end;
    }
    &s[..fits]
}

/// Longest suffix of `s` whose display width is at most `max_width`.
///
/// Measured the same way as [`prefix_within`].
///
/// # Example
///
/// ```rust
/// use boxtable::suffix_within;
///
/// assert_eq!(suffix_within("This is a comment", 9), "a comment");
/// assert_eq!(suffix_within("欧阳吹雪", 5), "吹雪");
/// ```
pub fn suffix_within(s: &str, max_width: usize) -> &str {
    let mut fits = s.len();
    for (i, _) in s.char_indices().rev() {
        if display_width(&s[i..]) > max_width {
            break;
        }
        fits = i;
    }
    &s[fits..]
}

/// Appends `count` copies of `c` to `out`.
pub(crate) fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat_n(c, count));
}

/// Appends `count` spaces to `out`.
pub(crate) fn push_spaces(out: &mut String, count: usize) {
    push_repeated(out, ' ', count);
}
