//! Fitting cell text into a fixed number of display columns.
//!
//! Text that fits is padded according to its [`Align`]. Text that does not
//! fit is clipped according to the [`Overflow`] mode with [`ELLIPSIS`] marking
//! the cut. Either way the result occupies exactly the target width plus
//! padding on both sides.

use crate::types::{Align, Overflow, ELLIPSIS};
use crate::util::{display_width, prefix_within, push_spaces, suffix_within};

/// Spaces placed before content of `content_width` within `width` columns.
///
/// Centering puts the odd leftover column on the right.
///
/// ```rust
/// use boxtable::{left_padding, Align};
///
/// assert_eq!(left_padding(Align::Left, 2, 7), 0);
/// assert_eq!(left_padding(Align::Center, 2, 7), 2);
/// assert_eq!(left_padding(Align::Right, 2, 7), 5);
/// ```
pub fn left_padding(align: Align, content_width: usize, width: usize) -> usize {
    let slack = width.saturating_sub(content_width);
    match align {
        Align::Left => 0,
        Align::Center => slack / 2,
        Align::Right => slack,
    }
}

/// Shortens `content` to exactly `width` display columns, marking the cut
/// with an ellipsis.
///
/// Content that already fits is returned padded on the right. If a wide
/// character straddles the cut it is dropped and the gap filled with spaces.
/// A width too narrow for the ellipsis yields spaces only.
///
/// ```rust
/// use boxtable::{clip, Overflow};
///
/// assert_eq!(clip("This is a comment", 10, Overflow::ClipRight), "This is a…");
/// assert_eq!(clip("This is a comment", 10, Overflow::ClipLeft), "…a comment");
/// ```
pub fn clip(content: &str, width: usize, overflow: Overflow) -> String {
    let mut out = String::with_capacity(content.len().min(width * 4) + 4);
    clip_into(&mut out, content, width, overflow);
    out
}

fn clip_into(out: &mut String, content: &str, width: usize, overflow: Overflow) {
    let content_width = display_width(content);
    if content_width <= width {
        out.push_str(content);
        push_spaces(out, width - content_width);
        return;
    }

    // The kept text and the marker are measured together, since a joiner or
    // selector next to the cut can change the width of the whole field.
    let mut keep = width.saturating_sub(display_width(ELLIPSIS.encode_utf8(&mut [0; 4])));
    loop {
        let mut field = String::with_capacity(content.len());
        match overflow {
            Overflow::ClipRight => {
                field.push_str(prefix_within(content, keep));
                field.push(ELLIPSIS);
            }
            Overflow::ClipLeft => {
                field.push(ELLIPSIS);
                field.push_str(suffix_within(content, keep));
            }
        }
        let used = display_width(&field);
        if used <= width {
            out.push_str(&field);
            push_spaces(out, width - used);
            return;
        }
        if keep == 0 {
            push_spaces(out, width);
            return;
        }
        keep -= 1;
    }
}

/// Renders one cell: `padding` spaces, the content fitted to `width`
/// columns, then `padding` spaces.
///
/// ```rust
/// use boxtable::{justify, Align, Overflow};
///
/// assert_eq!(justify("25", Align::Left, 3, 1, Overflow::ClipRight), " 25  ");
/// assert_eq!(justify("NAME", Align::Center, 7, 1, Overflow::ClipRight), "  NAME   ");
/// assert_eq!(justify("Bob", Align::Right, 5, 0, Overflow::ClipRight), "  Bob");
/// ```
pub fn justify(
    content: &str,
    align: Align,
    width: usize,
    padding: usize,
    overflow: Overflow,
) -> String {
    let mut out = String::with_capacity(width + 2 * padding + content.len());
    justify_into(&mut out, content, align, width, padding, overflow);
    out
}

pub(crate) fn justify_into(
    out: &mut String,
    content: &str,
    align: Align,
    width: usize,
    padding: usize,
    overflow: Overflow,
) {
    push_spaces(out, padding);
    let content_width = display_width(content);
    if content_width <= width {
        let left = left_padding(align, content_width, width);
        push_spaces(out, left);
        out.push_str(content);
        push_spaces(out, width - content_width - left);
    } else {
        clip_into(out, content, width, overflow);
    }
    push_spaces(out, padding);
}
