//! Layout Module
//!
//! Box layout for components using Taffy.
//!
//! # Architecture
//!
//! Each component is laid out on its own, inside the region its parent
//! offers:
//!
//! 1. Converts the component's `BoxStyle` → Taffy style
//! 2. Lays it out as the only item of a node sized to the offered region
//! 3. Extracts the frame and content rectangles back into a `ComputedLayout`
//!
//! A container then offers its content rectangle to every child, so nesting
//! composes without a global tree.

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::compute_box_layout;
pub use text_measure::*;
pub use types::*;
