//! Listener registry.
//!
//! Listeners bind a handler value to an element id (or to the window when
//! no target is given) for one event type. The registry never calls
//! anything itself: `matching` hands back the handlers an event should run
//! and the owner executes them.

use log::debug;

use crate::event::{Event, EventType};

/// Handle returned by `listen`, used to detach a single listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey(u64);

#[derive(Debug, Clone)]
struct Listener<H> {
    key: ListenerKey,
    target: Option<String>,
    event_type: EventType,
    handler: H,
    once: bool,
}

impl<H> Listener<H> {
    fn matches(&self, event: &Event) -> bool {
        self.event_type == event.event_type() && self.target.as_deref() == event.target()
    }
}

#[derive(Debug, Clone)]
pub struct Listeners<H> {
    next_key: u64,
    entries: Vec<Listener<H>>,
}

impl<H> Default for Listeners<H> {
    fn default() -> Self {
        Self {
            next_key: 0,
            entries: Vec::new(),
        }
    }
}

impl<H: Clone> Listeners<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for `event_type` on the element with `target` id.
    pub fn listen(
        &mut self,
        target: impl Into<String>,
        event_type: EventType,
        handler: H,
    ) -> ListenerKey {
        self.push(Some(target.into()), event_type, handler, false)
    }

    /// Listen once; the listener detaches after its first match.
    pub fn listen_once(
        &mut self,
        target: impl Into<String>,
        event_type: EventType,
        handler: H,
    ) -> ListenerKey {
        self.push(Some(target.into()), event_type, handler, true)
    }

    /// Listen for a window-level event such as `Unload`.
    pub fn listen_window(&mut self, event_type: EventType, handler: H) -> ListenerKey {
        self.push(None, event_type, handler, false)
    }

    /// Detach one listener. Returns false if it was already gone.
    pub fn unlisten(&mut self, key: ListenerKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.key != key);
        self.entries.len() != before
    }

    /// Detach every listener. Returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        debug!("Removed all {removed} listeners");
        removed
    }

    /// Handlers bound to `event`, in registration order.
    ///
    /// Once-listeners that match are detached.
    pub fn matching(&mut self, event: &Event) -> Vec<H> {
        let handlers = self
            .entries
            .iter()
            .filter(|l| l.matches(event))
            .map(|l| l.handler.clone())
            .collect();
        self.entries.retain(|l| !(l.once && l.matches(event)));
        handlers
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(
        &mut self,
        target: Option<String>,
        event_type: EventType,
        handler: H,
        once: bool,
    ) -> ListenerKey {
        let key = ListenerKey(self.next_key);
        self.next_key += 1;
        self.entries.push(Listener {
            key,
            target,
            event_type,
            handler,
            once,
        });
        key
    }
}
