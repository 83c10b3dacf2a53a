//! Component - the node capability every member of the render tree has.
//!
//! A component can be anchored to a surface, laid out, rendered, detached
//! and removed, and can freeze its last computed layout. The bookkeeping
//! behind those operations lives in [`ComponentBase`], which every component
//! embeds and exposes through [`Component::base`]. Default trait methods
//! delegate to it, so a leaf only has to implement `render`.
//!
//! # Identity
//!
//! Two handles refer to the same component iff their bases are the same
//! object. Containers use this for duplicate detection and removal, so it
//! works across `Rc<dyn Component>` and concrete references alike.

use std::cell::{Cell, RefCell};
use std::ptr;
use std::rc::{Rc, Weak};

use tracing::trace;

use super::container::ComponentContainer;
use super::redraw::RedrawSignal;
use crate::error::{ComponentError, Result};
use crate::layout::{compute_box_layout, BoxStyle, ComputedLayout};
use crate::renderer::Surface;
use crate::types::ClipRect;

// =============================================================================
// Component trait
// =============================================================================

/// A node of the render tree.
///
/// Lifecycle order for a tree: `anchor` → `compute_layout` → `render`,
/// repeated as needed; `detach` takes a node off its surface and out of its
/// parent without destroying it, `remove` tears it down for good.
pub trait Component {
    /// Shared bookkeeping (parent, surface, layout, flags).
    fn base(&self) -> &ComponentBase;

    /// Bind this component to a region of a drawing surface.
    fn anchor(&self, surface: &Surface) -> Result<()> {
        self.base().anchor(surface)
    }

    /// Lay this component out inside `region`, or inside its anchored region
    /// when `None`.
    fn compute_layout(&self, region: Option<ClipRect>) -> Result<()> {
        self.base().compute_layout(region)
    }

    /// Draw into the anchored surface. Must be idempotent.
    fn render(&self) -> Result<()>;

    /// Leave the surface and the parent, keeping the component reusable.
    fn detach(&self) {
        self.base().detach();
    }

    /// Permanent teardown, including removal from the parent.
    fn remove(&self) {
        self.base().remove();
    }

    /// Ask whoever schedules render passes for a future render.
    fn request_redraw(&self) {
        self.base().request_redraw();
    }

    /// Whether the next layout pass reuses the last computed layout.
    fn use_last_calculated_layout(&self) -> bool {
        self.base().use_last_calculated_layout()
    }

    fn set_use_last_calculated_layout(&self, value: bool) {
        self.base().set_use_last_calculated_layout(value);
    }
}

/// Check whether two handles refer to the same component.
pub fn same_component(a: &dyn Component, b: &dyn Component) -> bool {
    ptr::eq(a.base(), b.base())
}

// =============================================================================
// ComponentBase
// =============================================================================

/// Per-component state shared by every kind of component.
///
/// The parent reference is weak: ownership flows from a container to its
/// children only, through the container's child sequence.
pub struct ComponentBase {
    style: Cell<BoxStyle>,
    parent: RefCell<Weak<ComponentContainer>>,
    surface: RefCell<Option<Surface>>,
    layout: Cell<Option<ComputedLayout>>,
    use_last_layout: Cell<bool>,
    /// Only set on the root of a mounted tree.
    redraw: RefCell<Option<RedrawSignal>>,
}

impl ComponentBase {
    pub fn new() -> Self {
        Self::with_style(BoxStyle::default())
    }

    pub fn with_style(style: BoxStyle) -> Self {
        Self {
            style: Cell::new(style),
            parent: RefCell::new(Weak::new()),
            surface: RefCell::new(None),
            layout: Cell::new(None),
            use_last_layout: Cell::new(false),
            redraw: RefCell::new(None),
        }
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> BoxStyle {
        self.style.get()
    }

    /// Replace the box style and request a redraw.
    pub fn set_style(&self, style: BoxStyle) {
        self.style.set(style);
        self.request_redraw();
    }

    // =========================================================================
    // Parent
    // =========================================================================

    /// The container currently holding this component, if it is still alive.
    pub fn parent(&self) -> Option<Rc<ComponentContainer>> {
        self.parent.borrow().upgrade()
    }

    pub(crate) fn set_parent(&self, parent: Weak<ComponentContainer>) {
        *self.parent.borrow_mut() = parent;
    }

    pub(crate) fn clear_parent(&self) {
        *self.parent.borrow_mut() = Weak::new();
    }

    // =========================================================================
    // Surface
    // =========================================================================

    pub fn is_anchored(&self) -> bool {
        self.surface.borrow().is_some()
    }

    /// The surface this component is anchored to.
    pub fn surface(&self) -> Option<Surface> {
        self.surface.borrow().clone()
    }

    /// Bind to `surface`, replacing any previous anchoring.
    ///
    /// A cached layout only survives re-anchoring to the same buffer and
    /// region; anywhere else it describes space this component no longer has.
    pub fn anchor(&self, surface: &Surface) -> Result<()> {
        if !surface.fits() {
            let buffer = surface.buffer();
            return Err(ComponentError::RegionOutOfBounds {
                region: surface.region(),
                width: buffer.width(),
                height: buffer.height(),
            });
        }

        let unchanged = self
            .surface
            .borrow()
            .as_ref()
            .is_some_and(|current| current.same_buffer(surface) && current.region() == surface.region());
        if !unchanged {
            self.layout.set(None);
        }

        trace!(region = ?surface.region(), unchanged, "anchoring component");
        *self.surface.borrow_mut() = Some(surface.clone());
        Ok(())
    }

    /// The surface children of this component anchor to: the anchored buffer
    /// narrowed to the last computed content area, or the anchored region
    /// when no layout exists yet.
    pub fn content_surface(&self) -> Option<Surface> {
        let surface = self.surface.borrow();
        let surface = surface.as_ref()?;
        Some(match self.layout.get() {
            Some(layout) => surface.with_region(layout.content),
            None => surface.clone(),
        })
    }

    // =========================================================================
    // Layout
    // =========================================================================

    pub fn layout(&self) -> Option<ComputedLayout> {
        self.layout.get()
    }

    /// Compute (or, when frozen, reuse) this component's layout.
    pub fn compute_layout(&self, region: Option<ClipRect>) -> Result<()> {
        if self.use_last_layout.get() && self.layout.get().is_some() {
            trace!("reusing last calculated layout");
            return Ok(());
        }

        let region = match region {
            Some(region) => region,
            None => self
                .surface
                .borrow()
                .as_ref()
                .map(Surface::region)
                .ok_or(ComponentError::NotAnchored)?,
        };

        let layout = compute_box_layout(region, &self.style.get())?;
        self.layout.set(Some(layout));
        Ok(())
    }

    pub fn use_last_calculated_layout(&self) -> bool {
        self.use_last_layout.get()
    }

    pub fn set_use_last_calculated_layout(&self, value: bool) {
        self.use_last_layout.set(value);
    }

    /// Surface and layout to draw with, if this component is both anchored
    /// and laid out.
    pub fn render_target(&self) -> Option<(Surface, ComputedLayout)> {
        Some((self.surface()?, self.layout.get()?))
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Leave the surface and notify the parent.
    pub fn detach(&self) {
        trace!("detaching component");
        self.surface.replace(None);
        if let Some(parent) = self.parent() {
            parent.remove_base(self);
        }
        self.clear_parent();
    }

    /// Detach, then drop everything tied to the previous placement.
    pub fn remove(&self) {
        self.detach();
        self.layout.set(None);
        self.redraw.replace(None);
    }

    // =========================================================================
    // Redraw
    // =========================================================================

    /// Bubble a redraw request to the root of the tree.
    ///
    /// A component with neither parent nor attached signal drops the request.
    pub fn request_redraw(&self) {
        if let Some(parent) = self.parent() {
            parent.request_redraw();
            return;
        }

        // Clone out so the signal's subscribers may touch this component.
        let signal = self.redraw.borrow().clone();
        if let Some(signal) = signal {
            signal.request();
        }
    }

    /// Make this component a redraw root reporting to `signal`.
    pub fn attach_redraw(&self, signal: RedrawSignal) {
        *self.redraw.borrow_mut() = Some(signal);
    }

    pub fn release_redraw(&self) -> Option<RedrawSignal> {
        self.redraw.borrow_mut().take()
    }
}

impl Default for ComponentBase {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
