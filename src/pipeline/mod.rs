//! Render Pipeline
//!
//! Connects a component tree to a drawing surface.
//!
//! # Pipeline Architecture
//!
//! ```text
//! anchor → compute_layout → render
//!    ▲                         │
//!    └── mount (once)          └── tick: repeat layout + render on redraw request
//! ```
//!
//! ## Key Design Principles
//!
//! - **Anchor once**: a mounted tree is anchored when mounted; children added
//!   later are anchored by their container on insertion
//! - **Requests, not renders**: mutations only bump the root's redraw signal;
//!   the handle decides when a pass runs

pub mod mount;

pub use mount::{mount, render_to, MountHandle, MountOptions};
