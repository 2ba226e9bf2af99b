//! Viewport events and scoped listener registration
//!
//! Listeners are stored in a [`ListenerRegistry`] keyed by [`EventType`].
//! Registration hands back a [`ListenerGuard`]; dropping the guard removes
//! the listener, so a component that holds its guards cannot leak
//! listeners after it is detached.
//!
//! ```
//! use folio_core::events::{event_types, EventContext, ListenerRegistry};
//! use std::{cell::Cell, rc::Rc};
//!
//! let registry = ListenerRegistry::shared();
//! let hits = Rc::new(Cell::new(0));
//! let hits_clone = hits.clone();
//! let guard = ListenerRegistry::add(&registry, event_types::RESIZE, move |_| {
//!     hits_clone.set(hits_clone.get() + 1);
//! });
//!
//! ListenerRegistry::dispatch(&registry, &EventContext::new(event_types::RESIZE));
//! drop(guard);
//! ListenerRegistry::dispatch(&registry, &EventContext::new(event_types::RESIZE));
//! assert_eq!(hits.get(), 1);
//! ```

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Event type identifier
pub type EventType = u32;

/// Built-in event types dispatched by the viewport
pub mod event_types {
    use super::EventType;

    /// Global scroll position changed
    pub const SCROLL: EventType = 1;
    /// Viewport dimensions changed
    pub const RESIZE: EventType = 2;

    /// Human-readable name for logging
    pub fn name(event_type: EventType) -> &'static str {
        match event_type {
            SCROLL => "scroll",
            RESIZE => "resize",
            _ => "custom",
        }
    }
}

/// Context passed to listeners
#[derive(Clone, Debug, PartialEq)]
pub struct EventContext {
    /// The type of event that occurred
    pub event_type: EventType,
    /// Global scroll position at dispatch time
    pub scroll_y: f32,
    /// Viewport width at dispatch time
    pub viewport_width: f32,
    /// Viewport height at dispatch time
    pub viewport_height: f32,
}

impl EventContext {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            scroll_y: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    pub fn with_scroll(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

/// Listener callback. Single-threaded UI, so `Rc`.
pub type ListenerCallback = Rc<dyn Fn(&EventContext)>;

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

struct ListenerEntry {
    event_type: EventType,
    callback: ListenerCallback,
}

/// Registered listeners, dispatched in registration order
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: SlotMap<ListenerId, ListenerEntry>,
    by_type: FxHashMap<EventType, SmallVec<[ListenerId; 4]>>,
}

/// Registry shared between the viewport and the guards it hands out
pub type SharedListenerRegistry = Rc<RefCell<ListenerRegistry>>;

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedListenerRegistry {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Register a listener and return the guard that owns the registration
    pub fn add<F>(
        registry: &SharedListenerRegistry,
        event_type: EventType,
        callback: F,
    ) -> ListenerGuard
    where
        F: Fn(&EventContext) + 'static,
    {
        let id = registry.borrow_mut().insert(event_type, Rc::new(callback));
        tracing::trace!(event = event_types::name(event_type), "listener registered");
        ListenerGuard {
            registry: Rc::downgrade(registry),
            id: Some(id),
        }
    }

    /// Dispatch an event to every listener registered for its type
    ///
    /// Callbacks are collected before invocation, so a listener may add or
    /// remove listeners while the event is being delivered.
    pub fn dispatch(registry: &SharedListenerRegistry, ctx: &EventContext) -> usize {
        let callbacks = registry.borrow().callbacks_for(ctx.event_type);
        for callback in &callbacks {
            callback(ctx);
        }
        callbacks.len()
    }

    fn insert(&mut self, event_type: EventType, callback: ListenerCallback) -> ListenerId {
        let id = self.listeners.insert(ListenerEntry {
            event_type,
            callback,
        });
        self.by_type.entry(event_type).or_default().push(id);
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let Some(entry) = self.listeners.remove(id) else {
            return false;
        };
        if let Some(ids) = self.by_type.get_mut(&entry.event_type) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.by_type.remove(&entry.event_type);
            }
        }
        true
    }

    fn callbacks_for(&self, event_type: EventType) -> SmallVec<[ListenerCallback; 4]> {
        self.by_type
            .get(&event_type)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.listeners.get(*id))
                    .map(|entry| Rc::clone(&entry.callback))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of listeners registered for an event type
    pub fn count(&self, event_type: EventType) -> usize {
        self.by_type.get(&event_type).map_or(0, |ids| ids.len())
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Owns one listener registration; deregisters on drop
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: Option<ListenerId>,
}

impl ListenerGuard {
    /// Remove the listener now instead of waiting for drop
    pub fn remove(mut self) {
        self.release();
    }

    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        // The registry may already be gone if the viewport was dropped first.
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(id) {
                tracing::trace!("listener deregistered");
            }
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
