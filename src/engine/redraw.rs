//! Redraw requests.
//!
//! A mutated subtree asks for a future render by bumping a generation
//! counter held at the root of the tree. Whoever schedules render passes
//! (see `pipeline::mount`) compares the generation it last rendered with the
//! current one, or tracks the underlying signal reactively.

use spark_signals::{signal, Signal};

/// Generation counter for "content changed, please re-render".
#[derive(Clone)]
pub struct RedrawSignal {
    generation: Signal<u64>,
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self {
            generation: signal(0),
        }
    }

    /// Record one redraw request.
    pub fn request(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Number of requests recorded so far.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// The underlying signal, for reactive tracking.
    pub fn signal(&self) -> Signal<u64> {
        self.generation.clone()
    }
}

impl Default for RedrawSignal {
    fn default() -> Self {
        Self::new()
    }
}
