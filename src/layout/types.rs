//! Layout Types
//!
//! Input (`BoxStyle`) and output (`ComputedLayout`) of a component's layout
//! pass.

use crate::types::{BorderStyle, ClipRect, Dimension};

/// Per-side spacing in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    /// The same spacing on every side.
    pub const fn all(value: u16) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal spacing.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Box properties a component is laid out with.
///
/// All fields default to "fill the offered region, no decoration".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub padding: Edges,
    pub border: BorderStyle,
}

impl BoxStyle {
    pub fn with_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }
}

/// Result of one layout pass, in absolute buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComputedLayout {
    /// Outer rectangle, border included.
    pub frame: ClipRect,
    /// Area inside border and padding; what children and content draw into.
    pub content: ClipRect,
}
