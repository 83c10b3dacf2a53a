//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is the drawing surface components render into: a 2D grid
//! of Cells. Every drawing call takes an optional `ClipRect` so a component
//! never paints outside the content area it was laid out into.

use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer bounds.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.index(x, y)])
    }

    /// Reset every cell inside `rect` to a blank cell with background `bg`.
    pub fn clear_rect(&mut self, rect: &ClipRect, bg: Rgba) {
        let Some(rect) = rect.intersect(&self.bounds()) else {
            return;
        };
        for row in rect.y..rect.y + rect.height {
            let start = self.index(rect.x, row);
            for cell in &mut self.cells[start..start + rect.width as usize] {
                *cell = Cell { bg, ..Cell::default() };
            }
        }
    }

    /// Text of one row, continuation cells skipped. Trailing blanks kept.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|cell| cell.char != 0)
            .filter_map(|cell| char::from_u32(cell.char))
            .collect()
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell, honoring bounds and the optional clip.
    ///
    /// Returns true if the cell was written.
    pub fn set_cell(&mut self, x: u16, y: u16, char: u32, fg: Rgba, bg: Rgba, attrs: Attr, clip: Option<&ClipRect>) -> bool {
        if !self.in_bounds(x, y) || clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.char = char;
        cell.fg = fg;
        cell.bg = Rgba::blend(bg, cell.bg);
        cell.attrs = attrs;
        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(&mut self, rect: &ClipRect, bg: Rgba, clip: Option<&ClipRect>) {
        let target = match clip {
            Some(clip) => rect.intersect(clip),
            None => Some(*rect),
        };
        let Some(target) = target.and_then(|t| t.intersect(&self.bounds())) else {
            return;
        };

        for row in target.y..target.y + target.height {
            let start = self.index(target.x, row);
            for cell in &mut self.cells[start..start + target.width as usize] {
                cell.bg = Rgba::blend(bg, cell.bg);
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw text starting at (x, y).
    ///
    /// Returns the number of columns consumed. Wide characters mark the
    /// following cell as a continuation.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr, clip: Option<&ClipRect>) -> u16 {
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            let width = char_width(ch);
            if width == 0 {
                continue;
            }

            if self.set_cell(col, y, ch as u32, fg, Rgba::TRANSPARENT, attrs, clip) && width == 2 {
                self.set_cell(col + 1, y, 0, fg, Rgba::TRANSPARENT, attrs, clip);
            }
            col = col.saturating_add(width);
        }

        col.saturating_sub(x)
    }

    /// Draw a border just inside `rect`.
    pub fn draw_border(&mut self, rect: &ClipRect, style: BorderStyle, color: Rgba, clip: Option<&ClipRect>) {
        if rect.width < 2 || rect.height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let (x, y) = (rect.x, rect.y);
        let x2 = x + rect.width - 1;
        let y2 = y + rect.height - 1;
        let mut put = |cx: u16, cy: u16, ch: char| {
            self.set_cell(cx, cy, ch as u32, color, Rgba::TRANSPARENT, Attr::NONE, clip);
        };

        put(x, y, tl);
        put(x2, y, tr);
        put(x2, y2, br);
        put(x, y2, bl);
        for col in (x + 1)..x2 {
            put(col, y, horiz);
            put(col, y2, horiz);
        }
        for row in (y + 1)..y2 {
            put(x, row, vert);
            put(x2, row, vert);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_cell_respects_clip() {
        let mut buffer = FrameBuffer::new(10, 3);
        let clip = ClipRect::new(2, 0, 3, 3);

        assert!(buffer.set_cell(3, 1, 'x' as u32, Rgba::WHITE, Rgba::BLACK, Attr::NONE, Some(&clip)));
        assert!(!buffer.set_cell(6, 1, 'y' as u32, Rgba::WHITE, Rgba::BLACK, Attr::NONE, Some(&clip)));
        assert!(!buffer.set_cell(20, 1, 'z' as u32, Rgba::WHITE, Rgba::BLACK, Attr::NONE, None));

        assert_eq!(buffer.get(3, 1).map(|c| c.char), Some('x' as u32));
        assert_eq!(buffer.get(6, 1).map(|c| c.char), Some(' ' as u32));
    }

    #[test]
    fn test_draw_text_clipped() {
        let mut buffer = FrameBuffer::new(10, 1);
        let clip = ClipRect::new(0, 0, 4, 1);

        buffer.draw_text(0, 0, "abcdefgh", Rgba::WHITE, Attr::NONE, Some(&clip));
        assert_eq!(buffer.row_text(0), "abcd      ");
    }

    #[test]
    fn test_draw_wide_text_marks_continuation() {
        let mut buffer = FrameBuffer::new(6, 1);
        let used = buffer.draw_text(0, 0, "日本", Rgba::WHITE, Attr::NONE, None);

        assert_eq!(used, 4);
        assert_eq!(buffer.get(1, 0).map(|c| c.char), Some(0));
        assert_eq!(buffer.row_text(0), "日本  ");
    }

    #[test]
    fn test_draw_border() {
        let mut buffer = FrameBuffer::new(4, 3);
        buffer.draw_border(&buffer.bounds(), BorderStyle::Ascii, Rgba::WHITE, None);

        assert_eq!(buffer.row_text(0), "+--+");
        assert_eq!(buffer.row_text(1), "|  |");
        assert_eq!(buffer.row_text(2), "+--+");
    }

    #[test]
    fn test_clear_rect() {
        let mut buffer = FrameBuffer::new(4, 2);
        buffer.draw_text(0, 0, "abcd", Rgba::WHITE, Attr::NONE, None);
        buffer.draw_text(0, 1, "efgh", Rgba::WHITE, Attr::NONE, None);

        buffer.clear_rect(&ClipRect::new(1, 0, 2, 1), Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.row_text(0), "a  d");
        assert_eq!(buffer.row_text(1), "efgh");
    }
}
