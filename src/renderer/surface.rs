//! Surface - a region of a shared FrameBuffer.
//!
//! Components are anchored to a Surface. A container hands its children a
//! Surface over the same buffer, narrowed to its own content area.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::io;
use std::rc::Rc;

use super::buffer::FrameBuffer;
use crate::types::{ClipRect, Rgba};

/// A FrameBuffer shared by every component of one tree.
pub type SharedBuffer = Rc<RefCell<FrameBuffer>>;

/// A drawable region of a shared buffer.
#[derive(Clone)]
pub struct Surface {
    buffer: SharedBuffer,
    region: ClipRect,
}

impl Surface {
    /// Create a surface over a fresh buffer of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::from_buffer(Rc::new(RefCell::new(FrameBuffer::new(width, height))))
    }

    /// Create a surface sized to the current terminal.
    ///
    /// Uses crossterm to query the terminal dimensions.
    pub fn for_terminal() -> io::Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::new(width, height))
    }

    /// Create a surface covering the whole of an existing buffer.
    pub fn from_buffer(buffer: SharedBuffer) -> Self {
        let region = buffer.borrow().bounds();
        Self { buffer, region }
    }

    /// The same buffer, narrowed (or moved) to `region`.
    ///
    /// The region is not validated here; anchoring to it is.
    pub fn with_region(&self, region: ClipRect) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            region,
        }
    }

    #[inline]
    pub fn region(&self) -> ClipRect {
        self.region
    }

    /// Check whether the region lies inside the buffer.
    pub fn fits(&self) -> bool {
        self.buffer.borrow().bounds().contains_rect(&self.region)
    }

    /// Check whether two surfaces draw into the same buffer.
    pub fn same_buffer(&self, other: &Surface) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    pub fn buffer(&self) -> Ref<'_, FrameBuffer> {
        self.buffer.borrow()
    }

    /// Run a drawing closure against the buffer, clipped to `clip` (which is
    /// itself intersected with this surface's region).
    pub fn draw<R>(&self, clip: ClipRect, f: impl FnOnce(&mut FrameBuffer, &ClipRect) -> R) -> Option<R> {
        let clip = clip.intersect(&self.region)?;
        let mut buffer = self.buffer.borrow_mut();
        Some(f(&mut buffer, &clip))
    }

    /// Blank the whole region with background `bg`.
    pub fn clear(&self, bg: Rgba) {
        self.buffer.borrow_mut().clear_rect(&self.region, bg);
    }

    /// Text of one buffer row restricted to this region's columns.
    pub fn text_at(&self, row: u16) -> String {
        let line = self.buffer.borrow().row_text(row);
        line.chars()
            .skip(self.region.x as usize)
            .take(self.region.width as usize)
            .collect()
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buffer = self.buffer.borrow();
        f.debug_struct("Surface")
            .field("buffer", &(buffer.width(), buffer.height()))
            .field("region", &self.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attr;

    #[test]
    fn test_with_region_shares_buffer() {
        let surface = Surface::new(20, 5);
        let inner = surface.with_region(ClipRect::new(2, 1, 5, 2));

        assert!(surface.same_buffer(&inner));
        assert!(inner.fits());
        assert!(!surface.same_buffer(&Surface::new(20, 5)));
    }

    #[test]
    fn test_fits_rejects_overflowing_region() {
        let surface = Surface::new(10, 4);
        assert!(surface.fits());
        assert!(!surface.with_region(ClipRect::new(5, 0, 6, 4)).fits());
    }

    #[test]
    fn test_draw_is_clipped_to_region() {
        let surface = Surface::new(10, 2).with_region(ClipRect::new(2, 0, 3, 2));
        let wrote = surface.draw(ClipRect::new(0, 0, 10, 2), |buffer, clip| {
            buffer.draw_text(0, 0, "abcdefghij", Rgba::WHITE, Attr::NONE, Some(clip))
        });

        assert!(wrote.is_some());
        assert_eq!(surface.text_at(0), "cde");
        assert_eq!(surface.buffer().row_text(0), "  cde     ");
    }

    #[test]
    fn test_draw_outside_region_is_skipped() {
        let surface = Surface::new(10, 2).with_region(ClipRect::new(0, 0, 3, 1));
        let wrote = surface.draw(ClipRect::new(5, 1, 2, 1), |_, _| ());
        assert!(wrote.is_none());
    }
}
