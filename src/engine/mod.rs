//! Component Engine - the render tree and its lifecycle.
//!
//! The engine manages the core data structures:
//! - Component: the capability every node has, plus its shared `ComponentBase`
//! - ComponentContainer: a node owning an ordered set of child nodes
//! - RedrawSignal: how a mutated subtree asks for a future render
//!
//! # Architecture
//!
//! Components ARE objects here, held as `Rc<dyn Component>`. Ownership flows
//! one way, from a container to its children; a child only keeps a weak
//! reference to its container, used to report its own teardown and to bubble
//! redraw requests:
//!
//! ```text
//! ComponentContainer ──Rc──▶ Legend
//!        ▲  │                  │
//!        │  └──Rc──▶ ComponentContainer ──Rc──▶ ...
//!        └──────── Weak ───────┘
//! ```

mod component;
mod container;
mod redraw;

#[cfg(test)]
pub(crate) mod testing;

pub use component::*;
pub use container::*;
pub use redraw::*;
