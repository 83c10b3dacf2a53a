//! Mount API - render passes and redraw scheduling.
//!
//! A render pass is always the same three steps: anchor the root to a
//! surface, compute layout, render. [`render_to`] does it once. [`mount`]
//! does it and keeps a [`MountHandle`] that re-runs layout and render
//! whenever anything in the tree requested a redraw.
//!
//! # Example
//!
//! ```ignore
//! use spark_compose::pipeline::{mount, MountOptions};
//!
//! let handle = mount(root.clone(), &surface, MountOptions::default())?;
//!
//! // Later, e.g. once per frame of your own loop:
//! handle.tick()?;
//!
//! // Clean up
//! handle.unmount();
//! ```

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::engine::{Component, RedrawSignal};
use crate::error::Result;
use crate::renderer::Surface;
use crate::types::Rgba;

// =============================================================================
// One-shot rendering
// =============================================================================

/// Anchor `root` to `surface`, lay it out and render it.
pub fn render_to(root: &dyn Component, surface: &Surface) -> Result<()> {
    root.anchor(surface)?;
    root.compute_layout(None)?;
    root.render()
}

// =============================================================================
// Mount Options
// =============================================================================

/// How a mounted tree is redrawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountOptions {
    /// Background the surface region is reset to before each pass.
    pub background: Rgba,
    /// Reset the surface region before each pass, so components that left
    /// the tree leave nothing behind.
    pub clear_on_redraw: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            background: Rgba::TERMINAL_DEFAULT,
            clear_on_redraw: true,
        }
    }
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Holds the root, its surface, and the redraw signal the root reports to.
/// Dropping the handle unmounts.
pub struct MountHandle {
    root: Rc<dyn Component>,
    surface: Surface,
    options: MountOptions,
    redraw: RedrawSignal,
    rendered_generation: Cell<u64>,
    mounted: Cell<bool>,
}

/// Mount `root` on `surface` and render the first frame.
///
/// `root` should have no parent: redraw requests from a component with a
/// parent go to the parent, not to this handle.
pub fn mount(root: Rc<dyn Component>, surface: &Surface, options: MountOptions) -> Result<MountHandle> {
    let redraw = RedrawSignal::new();
    root.base().attach_redraw(redraw.clone());

    let handle = MountHandle {
        root,
        surface: surface.clone(),
        options,
        redraw,
        rendered_generation: Cell::new(0),
        mounted: Cell::new(true),
    };

    debug!(region = ?surface.region(), "mounting root component");
    handle.root.anchor(&handle.surface)?;
    handle.redraw()?;
    Ok(handle)
}

impl MountHandle {
    pub fn root(&self) -> &Rc<dyn Component> {
        &self.root
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn redraw_signal(&self) -> &RedrawSignal {
        &self.redraw
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Check whether a redraw was requested since the last pass.
    pub fn needs_redraw(&self) -> bool {
        self.is_mounted() && self.redraw.generation() != self.rendered_generation.get()
    }

    /// Run a pass if one was requested.
    ///
    /// Returns true if a pass ran.
    pub fn tick(&self) -> Result<bool> {
        if !self.needs_redraw() {
            return Ok(false);
        }
        self.redraw()?;
        Ok(true)
    }

    /// Run a layout and render pass now.
    pub fn redraw(&self) -> Result<()> {
        // Taken first: requests made during the pass schedule another one.
        let generation = self.redraw.generation();

        if self.options.clear_on_redraw {
            self.surface.clear(self.options.background);
        }
        self.root.compute_layout(None)?;
        self.root.render()?;

        self.rendered_generation.set(generation);
        debug!(generation, "rendered frame");
        Ok(())
    }

    /// Detach the root and stop listening for redraw requests.
    pub fn unmount(self) {
        self.teardown();
    }

    fn teardown(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        debug!("unmounting root component");
        self.root.base().release_redraw();
        self.root.detach();
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Tests
// =============================================================================
