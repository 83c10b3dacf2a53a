//! ComponentContainer - a component that owns an ordered set of children.
//!
//! The container fans every lifecycle operation out to its children in
//! sequence order, which is also their paint order. All children share the
//! container's content area.
//!
//! # Mutation during traversal
//!
//! A child's `detach` or `remove` calls back into the container's
//! `remove_child`, shrinking the sequence while it is being walked. Every
//! fan-out therefore iterates a snapshot of the sequence, never the live
//! `RefCell` borrow: mutations land in the live sequence and the cursor is
//! unaffected.

use std::cell::{Ref, RefCell};
use std::ptr;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::component::{Component, ComponentBase};
use crate::error::{ComponentError, Result};
use crate::layout::BoxStyle;
use crate::renderer::Surface;
use crate::types::ClipRect;

/// Where `insert_child` places a new child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Append,
    Prepend,
}

/// A component holding an ordered, duplicate-free sequence of children.
///
/// Containers are always handled through `Rc` (see [`ComponentContainer::new`]),
/// since children keep a weak reference back to them.
pub struct ComponentContainer {
    base: ComponentBase,
    this: Weak<ComponentContainer>,
    children: RefCell<Vec<Rc<dyn Component>>>,
}

impl ComponentContainer {
    /// Create an empty container.
    pub fn new() -> Rc<Self> {
        Self::with_style(BoxStyle::default())
    }

    /// Create an empty container with its own box style.
    pub fn with_style(style: BoxStyle) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            base: ComponentBase::with_style(style),
            this: this.clone(),
            children: RefCell::new(Vec::new()),
        })
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Append `child`.
    ///
    /// Returns `Ok(false)` without changing anything if `child` is already
    /// held, is this container, or is one of its ancestors. A child held by
    /// another container is taken out of it first. If this container is
    /// anchored the child is anchored right away; an anchoring error undoes
    /// the insertion and is returned.
    pub fn add_child(&self, child: Rc<dyn Component>) -> Result<bool> {
        self.insert_child(child, Placement::Append)
    }

    /// Like [`add_child`](Self::add_child), but places `child` first, so it
    /// paints beneath its siblings.
    pub fn prepend_child(&self, child: Rc<dyn Component>) -> Result<bool> {
        self.insert_child(child, Placement::Prepend)
    }

    fn insert_child(&self, child: Rc<dyn Component>, placement: Placement) -> Result<bool> {
        if !self.can_adopt(child.base()) {
            debug!("rejected child: duplicate, self or ancestor");
            return Ok(false);
        }

        // Unlinked quietly: the previous container only hears about the move
        // once it has succeeded.
        let previous = child.base().parent().and_then(|previous| {
            let index = previous.position(child.base())?;
            previous.take_child(child.base());
            Some((previous, index))
        });

        {
            let mut children = self.children.borrow_mut();
            match placement {
                Placement::Append => children.push(Rc::clone(&child)),
                Placement::Prepend => children.insert(0, Rc::clone(&child)),
            }
        }
        child.base().set_parent(self.this.clone());

        if let Some(content) = self.base.content_surface() {
            if let Err(err) = child.anchor(&content) {
                self.take_child(child.base());
                child.base().clear_parent();
                if let Some((previous, index)) = previous {
                    previous.restore_child(index, child);
                }
                return Err(err);
            }
        }

        if let Some((previous, _)) = previous {
            debug!(count = previous.len(), "child moved to another container");
            previous.base.request_redraw();
        }
        debug!(?placement, count = self.len(), "added child");
        self.base.request_redraw();
        Ok(true)
    }

    /// Put a child back where it was before a failed move.
    fn restore_child(&self, index: usize, child: Rc<dyn Component>) {
        child.base().set_parent(self.this.clone());
        let mut children = self.children.borrow_mut();
        let index = index.min(children.len());
        children.insert(index, child);
    }

    /// Remove `child` if held, keeping the order of the rest.
    ///
    /// Absent children are ignored. The child itself is not torn down.
    pub fn remove_child(&self, child: &dyn Component) {
        self.remove_base(child.base());
    }

    /// Removal keyed by identity, used by a child notifying its parent.
    pub(crate) fn remove_base(&self, base: &ComponentBase) -> bool {
        let Some(removed) = self.take_child(base) else {
            return false;
        };
        removed.base().clear_parent();

        debug!(count = self.len(), "removed child");
        self.base.request_redraw();
        true
    }

    fn take_child(&self, base: &ComponentBase) -> Option<Rc<dyn Component>> {
        let mut children = self.children.borrow_mut();
        let index = children.iter().position(|c| ptr::eq(c.base(), base))?;
        Some(children.remove(index))
    }

    fn can_adopt(&self, base: &ComponentBase) -> bool {
        if ptr::eq(base, &self.base) || self.position(base).is_some() {
            return false;
        }

        let mut ancestor = self.base.parent();
        while let Some(container) = ancestor {
            if ptr::eq(base, &container.base) {
                return false;
            }
            ancestor = container.base.parent();
        }
        true
    }

    fn position(&self, base: &ComponentBase) -> Option<usize> {
        self.children.borrow().iter().position(|c| ptr::eq(c.base(), base))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The live child sequence, in paint order.
    ///
    /// This is a borrow of the sequence itself, not a copy: holding it while
    /// adding, removing or detaching children panics.
    pub fn children(&self) -> Ref<'_, [Rc<dyn Component>]> {
        Ref::map(self.children.borrow(), Vec::as_slice)
    }

    /// Check whether `child` is held by this container.
    pub fn contains(&self, child: &dyn Component) -> bool {
        self.position(child.base()).is_some()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    fn snapshot(&self) -> Vec<Rc<dyn Component>> {
        self.children.borrow().clone()
    }

    // =========================================================================
    // Bulk teardown
    // =========================================================================

    /// Detach every child, leaving the container empty.
    pub fn detach_all(&self) {
        let snapshot = self.snapshot();
        debug!(count = snapshot.len(), "detaching all children");
        for child in snapshot {
            child.detach();
        }
    }
}

impl Component for ComponentContainer {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    /// Anchor self first, then every child to the content area.
    fn anchor(&self, surface: &Surface) -> Result<()> {
        self.base.anchor(surface)?;
        let content = self.base.content_surface().ok_or(ComponentError::NotAnchored)?;
        for child in self.snapshot() {
            child.anchor(&content)?;
        }
        Ok(())
    }

    /// Lay out self, then offer the content area to every child.
    fn compute_layout(&self, region: Option<ClipRect>) -> Result<()> {
        self.base.compute_layout(region)?;
        let content = self.base.layout().map(|l| l.content).ok_or(ComponentError::NotAnchored)?;
        for child in self.snapshot() {
            child.compute_layout(Some(content))?;
        }
        Ok(())
    }

    /// Render children in order. The container draws nothing itself.
    fn render(&self) -> Result<()> {
        for child in self.snapshot() {
            child.render()?;
        }
        Ok(())
    }

    fn remove(&self) {
        self.base.remove();
        let snapshot = self.snapshot();
        debug!(count = snapshot.len(), "removing container and children");
        for child in snapshot {
            child.remove();
        }
    }

    fn set_use_last_calculated_layout(&self, value: bool) {
        for child in self.snapshot() {
            child.set_use_last_calculated_layout(value);
        }
        self.base.set_use_last_calculated_layout(value);
    }
}

// =============================================================================
// Tests
// =============================================================================
