//! Browser-like viewport environment
//!
//! Supplies the signals every component reads: global scroll position,
//! viewport dimensions, and the document height that bounds scrolling.
//! Scroll and resize changes are dispatched to registered listeners.

use std::cell::Cell;
use std::rc::Rc;

use crate::events::{
    event_types, EventContext, EventType, ListenerGuard, ListenerRegistry, SharedListenerRegistry,
};
use crate::geometry::{Rect, Size};

/// The viewport a page is displayed in
pub struct Viewport {
    width: Cell<f32>,
    height: Cell<f32>,
    scroll_y: Cell<f32>,
    document_height: Cell<f32>,
    listeners: SharedListenerRegistry,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Cell::new(width.max(0.0)),
            height: Cell::new(height.max(0.0)),
            scroll_y: Cell::new(0.0),
            document_height: Cell::new(height.max(0.0)),
            listeners: ListenerRegistry::shared(),
        }
    }

    pub fn shared(width: f32, height: f32) -> Rc<Viewport> {
        Rc::new(Self::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.width.get()
    }

    pub fn height(&self) -> f32 {
        self.height.get()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y.get()
    }

    pub fn document_height(&self) -> f32 {
        self.document_height.get()
    }

    /// Largest reachable scroll position
    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.height()).max(0.0)
    }

    /// Set the height of the content being scrolled
    ///
    /// Clamps the current scroll position if the document got shorter.
    pub fn set_document_height(&self, height: f32) {
        self.document_height.set(height.max(0.0));
        let clamped = self.scroll_y().min(self.max_scroll());
        if clamped != self.scroll_y() {
            self.scroll_to(clamped);
        }
    }

    /// The visible region in document coordinates
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y(), self.width(), self.height())
    }

    /// Whether `bounds` (document coordinates) overlaps the visible region
    pub fn is_in_view(&self, bounds: &Rect) -> bool {
        self.visible_rect().intersects(bounds)
    }

    /// Scroll to an absolute position and notify scroll listeners
    ///
    /// Returns the position actually reached after clamping.
    pub fn scroll_to(&self, y: f32) -> f32 {
        let clamped = y.clamp(0.0, self.max_scroll());
        if clamped == self.scroll_y() {
            return clamped;
        }
        self.scroll_y.set(clamped);
        tracing::trace!(scroll_y = clamped, "viewport scrolled");
        self.dispatch(event_types::SCROLL);
        clamped
    }

    /// Scroll by a relative amount
    pub fn scroll_by(&self, dy: f32) -> f32 {
        self.scroll_to(self.scroll_y() + dy)
    }

    /// Change viewport dimensions and notify resize listeners
    pub fn resize(&self, width: f32, height: f32) {
        self.width.set(width.max(0.0));
        self.height.set(height.max(0.0));
        tracing::debug!(width, height, "viewport resized");
        self.dispatch(event_types::RESIZE);

        let clamped = self.scroll_y().min(self.max_scroll());
        if clamped != self.scroll_y() {
            self.scroll_to(clamped);
        }
    }

    /// Register a listener; it stays registered while the guard is alive
    pub fn add_listener<F>(&self, event_type: EventType, callback: F) -> ListenerGuard
    where
        F: Fn(&EventContext) + 'static,
    {
        ListenerRegistry::add(&self.listeners, event_type, callback)
    }

    /// Number of live listeners for an event type
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.listeners.borrow().count(event_type)
    }

    fn dispatch(&self, event_type: EventType) {
        let ctx = EventContext::new(event_type)
            .with_scroll(self.scroll_y())
            .with_viewport(self.width(), self.height());
        ListenerRegistry::dispatch(&self.listeners, &ctx);
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("scroll_y", &self.scroll_y())
            .field("document_height", &self.document_height())
            .finish()
    }
}

/// Shared handle to a viewport, captured by listeners
pub type SharedViewport = Rc<Viewport>;
