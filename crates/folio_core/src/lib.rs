//! Folio Core Runtime
//!
//! Foundational primitives shared by every Folio crate:
//!
//! - **Reactive Signals**: fine-grained reactivity with derived values and effects
//! - **Viewport**: the browser-like environment (scroll position, viewport size)
//! - **Scoped Listeners**: event registration released when its guard is dropped
//! - **Geometry**: points, sizes, rectangles and colors in document space
//!
//! # Example
//!
//! ```
//! use folio_core::events::event_types;
//! use folio_core::reactive::shared_graph;
//! use folio_core::Viewport;
//!
//! let graph = shared_graph();
//! let scroll_y = graph.borrow_mut().create_signal(0.0f32);
//!
//! let viewport = Viewport::shared(1280.0, 720.0);
//! viewport.set_document_height(4000.0);
//!
//! let graph_clone = graph.clone();
//! let _guard = viewport.add_listener(event_types::SCROLL, move |ctx| {
//!     graph_clone.borrow_mut().set(scroll_y, ctx.scroll_y);
//! });
//!
//! viewport.scroll_to(250.0);
//! assert_eq!(graph.borrow().get(scroll_y), Some(250.0));
//! ```

pub mod events;
pub mod geometry;
pub mod reactive;
pub mod viewport;

pub use events::{
    event_types, EventContext, EventType, ListenerGuard, ListenerId, ListenerRegistry,
    SharedListenerRegistry,
};
pub use geometry::{Color, Point, Rect, Size};
pub use reactive::{
    shared_graph, Derived, DerivedId, DirtyFlag, Effect, EffectId, ReactiveGraph,
    SharedReactiveGraph, Signal, SignalId, State,
};
pub use viewport::{SharedViewport, Viewport};
