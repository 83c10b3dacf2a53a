//! Primitives - leaf components drawn directly into a surface.
//!
//! - [`Legend`] - a column of labelled colour swatches

mod legend;

pub use legend::*;
