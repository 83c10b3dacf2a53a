//! # spark-compose
//!
//! Retained component trees for terminal drawing surfaces.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for redraw
//! scheduling and [taffy](https://github.com/DioxusLabs/taffy) for box layout.
//!
//! ## Architecture
//!
//! A tree is made of components held as `Rc<dyn Component>`. Leaves draw;
//! [`ComponentContainer`]s own an ordered set of children and fan every
//! lifecycle operation out to them:
//!
//! ```text
//! mount → anchor → compute_layout → render
//!                       ▲              │
//!                       └── tick ◀─────┘  (on redraw request)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Dimension, ClipRect, BorderStyle, etc.)
//! - [`error`] - The crate error type
//! - [`engine`] - Component trait, ComponentBase, ComponentContainer, redraw signal
//! - [`layout`] - Taffy layout bridge and text measurement
//! - [`renderer`] - Frame buffer and surfaces
//! - [`pipeline`] - One-shot rendering and mounting
//! - [`primitives`] - Leaf components

pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{same_component, Component, ComponentBase, ComponentContainer, RedrawSignal};

pub use error::{ComponentError, Result};

pub use layout::{compute_box_layout, string_width, truncate_text, BoxStyle, ComputedLayout, Edges};

pub use renderer::{FrameBuffer, SharedBuffer, Surface};

pub use pipeline::{mount, render_to, MountHandle, MountOptions};

pub use primitives::{Legend, LegendEntry};
