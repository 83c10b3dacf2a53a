//! Core types for spark-compose.
//!
//! Cells, colors and rectangles are what components draw with; `Dimension`
//! and `BorderStyle` are what they are laid out with.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels.
///
/// Special value: r=-1 means "terminal default" (let the terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color.
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Alpha blend `src` over `dst`.
    ///
    /// Terminal default counts as opaque on either side.
    pub fn blend(src: Self, dst: Self) -> Self {
        if src.is_opaque() || src.is_terminal_default() {
            return src;
        }
        if src.is_transparent() {
            return dst;
        }

        let (dr, dg, db, da) = if dst.is_terminal_default() {
            (0i32, 0i32, 0i32, 255i32)
        } else {
            (dst.r as i32, dst.g as i32, dst.b as i32, dst.a as i32)
        };

        let sa = src.a as i32;
        let inv_sa = 255 - sa;
        let out_a = sa + (da * inv_sa) / 255;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        let channel = |s: i16, d: i32| ((s as i32 * sa + d * da * inv_sa / 255) / out_a).clamp(0, 255) as i16;

        Self {
            r: channel(src.r, dr),
            g: channel(src.g, dg),
            b: channel(src.b, db),
            a: out_a.clamp(0, 255) as i16,
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A requested size along one axis.
///
/// ```
/// use spark_compose::types::Dimension;
///
/// let width = Dimension::Cells(20);       // 20 columns
/// let height = Dimension::Percent(50.0);  // half of the offered region
/// let fill = Dimension::Auto;             // stretch to the offered region
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Fill the region offered by the parent.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of the offered region (0-100).
    Percent(f32),
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        if value == 0 {
            Self::Auto
        } else {
            Self::Cells(value)
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes of a cell.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 5;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell, the unit every component draws in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space, 0 for a wide-char continuation).
    pub char: u32,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// ClipRect
// =============================================================================

/// An axis-aligned rectangle of cells.
///
/// Used both as a surface region (where a component is anchored) and as a
/// clip for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClipRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// One past the last column.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x as u32 + self.width as u32
    }

    /// One past the last row.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y as u32 + self.height as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside this rect.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && (x as u32) < self.right() && y >= self.y && (y as u32) < self.bottom()
    }

    /// Check if `other` lies entirely within this rect.
    pub fn contains_rect(&self, other: &ClipRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute intersection of two rects.
    pub fn intersect(&self, other: &ClipRect) -> Option<ClipRect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x2 > x1 as u32 && y2 > y1 as u32 {
            Some(ClipRect::new(x1, y1, (x2 - x1 as u32) as u16, (y2 - y1 as u32) as u16))
        } else {
            None
        }
    }

    /// Shrink by the given edge thicknesses, never below zero size.
    pub fn inset(&self, top: u16, right: u16, bottom: u16, left: u16) -> ClipRect {
        let width = self.width.saturating_sub(left).saturating_sub(right);
        let height = self.height.saturating_sub(top).saturating_sub(bottom);
        ClipRect {
            x: self.x.saturating_add(left.min(self.width)),
            y: self.y.saturating_add(top.min(self.height)),
            width,
            height,
        }
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Border style for a component's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BorderStyle {
    #[default]
    None = 0,
    /// ─ │ ┌ ┐ └ ┘
    Single = 1,
    /// ═ ║ ╔ ╗ ╚ ╝
    Double = 2,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded = 3,
    /// - | + + + +
    Ascii = 4,
}

impl BorderStyle {
    /// Border characters: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::None => (' ', ' ', ' ', ' ', ' ', ' '),
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Double => ('═', '║', '╔', '╗', '╝', '╚'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Ascii => ('-', '|', '+', '+', '+', '+'),
        }
    }

    /// Thickness in cells on every side.
    #[inline]
    pub const fn thickness(&self) -> u16 {
        match self {
            Self::None => 0,
            _ => 1,
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
    fn test_clip_rect_contains_rect() {
        let outer = ClipRect::new(0, 0, 10, 5);
        assert!(outer.contains_rect(&ClipRect::new(2, 1, 8, 4)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&ClipRect::new(2, 1, 9, 4)));
        assert!(!outer.contains_rect(&ClipRect::new(0, 0, 10, 6)));
    }

    #[test]
    fn test_clip_rect_intersect() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(ClipRect::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&ClipRect::new(10, 0, 3, 3)), None);
    }

    #[test]
    fn test_clip_rect_inset_saturates() {
        let rect = ClipRect::new(2, 2, 6, 4);
        assert_eq!(rect.inset(1, 1, 1, 1), ClipRect::new(3, 3, 4, 2));

        let collapsed = rect.inset(3, 4, 3, 4);
        assert!(collapsed.is_empty());
    }

    #[test]
    fn test_blend_transparent_and_opaque() {
        assert_eq!(Rgba::blend(Rgba::RED, Rgba::BLUE), Rgba::RED);
        assert_eq!(Rgba::blend(Rgba::TRANSPARENT, Rgba::BLUE), Rgba::BLUE);

        let half = Rgba::blend(Rgba::new(255, 0, 0, 128), Rgba::BLACK);
        assert!(half.r > 100 && half.r < 160);
        assert_eq!(half.a, 255);
    }

    #[test]
    fn test_border_thickness() {
        assert_eq!(BorderStyle::None.thickness(), 0);
        assert_eq!(BorderStyle::Rounded.thickness(), 1);
    }
}
