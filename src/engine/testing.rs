//! Test-only component that records every lifecycle call it receives.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::component::{Component, ComponentBase};
use super::container::ComponentContainer;
use crate::error::{ComponentError, Result};
use crate::renderer::Surface;
use crate::types::ClipRect;

/// Shared, ordered record of `(event, probe name)` pairs.
pub(crate) type EventLog = Rc<RefCell<Vec<(&'static str, &'static str)>>>;

thread_local! {
    /// Probe names keyed by base address, so a container's children can be
    /// listed by name.
    static NAMES: RefCell<HashMap<usize, &'static str>> = RefCell::new(HashMap::new());
}

fn base_key(base: &ComponentBase) -> usize {
    base as *const ComponentBase as usize
}

pub(crate) struct Probe {
    base: ComponentBase,
    pub name: &'static str,
    log: EventLog,
    pub anchors: RefCell<Vec<ClipRect>>,
    pub renders: Cell<usize>,
    pub detaches: Cell<usize>,
    pub removes: Cell<usize>,
    pub fail_anchor: Cell<bool>,
    pub fail_render: Cell<bool>,
    /// Runs inside `detach`, before the default detach path.
    pub on_detach: RefCell<Option<Box<dyn Fn(&Probe)>>>,
}

impl Probe {
    pub fn log() -> EventLog {
        Rc::new(RefCell::new(Vec::new()))
    }

    pub fn new(name: &'static str, log: &EventLog) -> Rc<Self> {
        let probe = Rc::new(Self {
            base: ComponentBase::new(),
            name,
            log: Rc::clone(log),
            anchors: RefCell::new(Vec::new()),
            renders: Cell::new(0),
            detaches: Cell::new(0),
            removes: Cell::new(0),
            fail_anchor: Cell::new(false),
            fail_render: Cell::new(false),
            on_detach: RefCell::new(None),
        });
        NAMES.with(|names| names.borrow_mut().insert(base_key(&probe.base), name));
        probe
    }

    /// Names of the probes that received `event`, in call order.
    pub fn events(log: &EventLog, event: &str) -> Vec<&'static str> {
        log.borrow()
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, name)| *name)
            .collect()
    }

    fn record(&self, event: &'static str) {
        self.log.borrow_mut().push((event, self.name));
    }
}

impl Component for Probe {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn anchor(&self, surface: &Surface) -> Result<()> {
        self.record("anchor");
        self.anchors.borrow_mut().push(surface.region());
        if self.fail_anchor.get() {
            return Err(ComponentError::NotAnchored);
        }
        self.base.anchor(surface)
    }

    fn render(&self) -> Result<()> {
        self.record("render");
        self.renders.set(self.renders.get() + 1);
        if self.fail_render.get() {
            return Err(ComponentError::ReadOnlyMetric { metric: "probe" });
        }
        Ok(())
    }

    fn detach(&self) {
        self.record("detach");
        self.detaches.set(self.detaches.get() + 1);
        if let Some(hook) = self.on_detach.borrow().as_ref() {
            hook(self);
        }
        self.base.detach();
    }

    fn remove(&self) {
        self.record("remove");
        self.removes.set(self.removes.get() + 1);
        self.base.remove();
    }
}

/// Names of a container's children, in order; "?" for non-probes.
pub(crate) fn names(container: &ComponentContainer) -> Vec<&'static str> {
    NAMES.with(|names| {
        let names = names.borrow();
        container
            .children()
            .iter()
            .map(|child| names.get(&base_key(child.base())).copied().unwrap_or("?"))
            .collect()
    })
}
