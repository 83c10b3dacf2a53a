//! Text Measurement
//!
//! Display widths of labels in terminal cells, and grapheme-safe truncation
//! so a label never spills out of the content area it was laid out into.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a single character (0, 1 or 2 cells).
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// Truncate text to fit within `max_width` cells, appending `suffix` when
/// anything was cut.
///
/// Returns the text unchanged if it already fits.
pub fn truncate_text(text: &str, max_width: u16, suffix: &str) -> String {
    if max_width == 0 {
        return String::new();
    }
    if string_width(text) <= max_width {
        return text.to_string();
    }

    let suffix_width = string_width(suffix);
    if suffix_width >= max_width {
        return take_width(suffix, max_width);
    }

    let mut result = take_width(text, max_width - suffix_width);
    result.push_str(suffix);
    result
}

/// Longest grapheme prefix of `text` no wider than `max_width`.
fn take_width(text: &str, max_width: u16) -> String {
    let mut result = String::with_capacity(text.len());
    let mut used = 0u16;

    for grapheme in text.graphemes(true) {
        let width = string_width(grapheme);
        if used + width > max_width {
            break;
        }
        result.push_str(grapheme);
        used += width;
    }

    result
}
