//! Drawing surface - the cell grid components render into.
//!
//! The renderer knows only about cells and rectangles. It doesn't understand
//! components or layout; a component receives a [`Surface`] when anchored and
//! draws into the [`FrameBuffer`] behind it during its render pass.

pub mod buffer;
pub mod surface;

pub use buffer::FrameBuffer;
pub use surface::{SharedBuffer, Surface};
