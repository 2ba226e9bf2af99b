//! Scroll-linked parallax wrapper
//!
//! Translates its content vertically by 0% to 30% as the global scroll
//! position travels from one viewport height above the section's top to
//! one viewport height below it. The section measures its document offset
//! and the viewport height on mount and again on every resize; the resize
//! listener is released on unmount.
//!
//! Until the first measurement both metrics read 0.

use std::rc::{Rc, Weak};

use folio_animation::LinearMap;
use folio_core::{
    event_types, Derived, ListenerGuard, SharedReactiveGraph, SharedViewport, Signal, Viewport,
};

use crate::element::{div, Element, Length, Node};

/// Output range of the translation, in percent of the content height
pub const PARALLAX_RANGE: (f32, f32) = (0.0, 30.0);

type Measure = Rc<dyn Fn()>;

pub struct ParallaxSection {
    graph: SharedReactiveGraph,
    element_top: Signal<f32>,
    client_height: Signal<f32>,
    translate: Derived<f32>,
    measure: Option<Measure>,
    resize_listener: Option<ListenerGuard>,
}

impl ParallaxSection {
    /// Create a section driven by the global `scroll_y` signal
    pub fn new(graph: &SharedReactiveGraph, scroll_y: Signal<f32>) -> Self {
        let mut g = graph.borrow_mut();
        let element_top = g.create_signal(0.0f32);
        let client_height = g.create_signal(0.0f32);

        let translate = g.create_derived(move |g| {
            let top = g.get(element_top).unwrap_or(0.0);
            let height = g.get(client_height).unwrap_or(0.0);
            let scroll = g.get(scroll_y).unwrap_or(0.0);
            LinearMap::new((top - height, top + height), PARALLAX_RANGE).map(scroll)
        });
        drop(g);

        Self {
            graph: Rc::clone(graph),
            element_top,
            client_height,
            translate,
            measure: None,
            resize_listener: None,
        }
    }

    /// Measure now and re-measure on every viewport resize
    ///
    /// `offset_provider` reports the section's current offset from the top
    /// of the document. Mounting twice replaces the earlier registration.
    pub fn mount<F>(&mut self, viewport: &SharedViewport, offset_provider: F)
    where
        F: Fn() -> f32 + 'static,
    {
        let graph = Rc::clone(&self.graph);
        let weak_viewport: Weak<Viewport> = Rc::downgrade(viewport);
        let (top_signal, height_signal) = (self.element_top, self.client_height);

        let measure: Measure = Rc::new(move || {
            let height = weak_viewport.upgrade().map_or(0.0, |v| v.height());
            let top = offset_provider();
            graph.borrow_mut().batch(|g| {
                g.set(top_signal, top);
                g.set(height_signal, height);
            });
            tracing::trace!(top, height, "parallax measured");
        });

        measure();

        let on_resize = Rc::clone(&measure);
        let guard = viewport.add_listener(event_types::RESIZE, move |_| on_resize());
        self.resize_listener = Some(guard);
        self.measure = Some(measure);
        tracing::debug!("parallax section mounted");
    }

    /// Re-read the offset and viewport height
    pub fn remeasure(&self) {
        if let Some(measure) = &self.measure {
            measure();
        }
    }

    /// Release the resize listener
    pub fn unmount(&mut self) {
        self.measure = None;
        if let Some(guard) = self.resize_listener.take() {
            guard.remove();
            tracing::debug!("parallax section unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.resize_listener.is_some()
    }

    pub fn element_top(&self) -> f32 {
        self.graph
            .borrow()
            .get_untracked(self.element_top)
            .unwrap_or(0.0)
    }

    pub fn client_height(&self) -> f32 {
        self.graph
            .borrow()
            .get_untracked(self.client_height)
            .unwrap_or(0.0)
    }

    /// Current translation in percent
    pub fn translate_y_percent(&self) -> f32 {
        self.graph
            .borrow_mut()
            .get_derived(self.translate)
            .unwrap_or(0.0)
    }

    /// Wrap `child`; the outer box keeps its place in the flow while the
    /// inner one is translated
    pub fn render(&self, child: impl Into<Node>) -> Element {
        div()
            .class("parallax")
            .relative()
            .overflow_hidden()
            .child(
                div()
                    .class("parallax-content")
                    .relative()
                    .translate_y(Length::Percent(self.translate_y_percent()))
                    .child(child),
            )
    }
}

impl std::fmt::Debug for ParallaxSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxSection")
            .field("element_top", &self.element_top())
            .field("client_height", &self.client_height())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::shared_graph;
    use std::cell::Cell;

    struct Fixture {
        graph: SharedReactiveGraph,
        viewport: SharedViewport,
        scroll: Signal<f32>,
        _scroll_listener: ListenerGuard,
    }

    /// Viewport whose scroll position feeds a signal, like the page shell
    fn fixture(height: f32) -> Fixture {
        let graph = shared_graph();
        let viewport = Viewport::shared(1280.0, height);
        viewport.set_document_height(5000.0);
        let scroll = graph.borrow_mut().create_signal(0.0f32);

        let g = Rc::clone(&graph);
        let scroll_listener = viewport.add_listener(event_types::SCROLL, move |ctx| {
            g.borrow_mut().set(scroll, ctx.scroll_y);
        });

        Fixture {
            graph,
            viewport,
            scroll,
            _scroll_listener: scroll_listener,
        }
    }

    #[test]
    fn test_unmeasured_metrics_default_to_zero() {
        let fx = fixture(800.0);
        let section = ParallaxSection::new(&fx.graph, fx.scroll);
        assert_eq!(section.element_top(), 0.0);
        assert_eq!(section.client_height(), 0.0);
        assert_eq!(section.translate_y_percent(), 0.0);

        fx.viewport.scroll_to(10.0);
        assert_eq!(section.translate_y_percent(), 30.0);
    }

    #[test]
    fn test_range_endpoints_and_midpoint() {
        let fx = fixture(800.0);
        let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
        section.mount(&fx.viewport, || 1200.0);

        fx.viewport.scroll_to(400.0);
        assert_eq!(section.translate_y_percent(), 0.0);

        fx.viewport.scroll_to(1200.0);
        assert!((section.translate_y_percent() - 15.0).abs() < 1e-4);

        fx.viewport.scroll_to(2000.0);
        assert_eq!(section.translate_y_percent(), 30.0);

        fx.viewport.scroll_to(4000.0);
        assert_eq!(section.translate_y_percent(), 30.0);
        fx.viewport.scroll_to(0.0);
        assert_eq!(section.translate_y_percent(), 0.0);
    }

    #[test]
    fn test_resize_remeasures_without_remount() {
        let fx = fixture(800.0);
        let offset = Rc::new(Cell::new(1200.0f32));
        let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
        let provider = Rc::clone(&offset);
        section.mount(&fx.viewport, move || provider.get());

        offset.set(1500.0);
        fx.viewport.resize(1280.0, 1000.0);
        assert_eq!(section.element_top(), 1500.0);
        assert_eq!(section.client_height(), 1000.0);

        fx.viewport.scroll_to(1500.0);
        assert!((section.translate_y_percent() - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_unmount_releases_listener() {
        let fx = fixture(800.0);
        let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
        section.mount(&fx.viewport, || 1200.0);
        assert_eq!(fx.viewport.listener_count(event_types::RESIZE), 1);

        section.unmount();
        assert!(!section.is_mounted());
        assert_eq!(fx.viewport.listener_count(event_types::RESIZE), 0);

        fx.viewport.resize(1280.0, 400.0);
        assert_eq!(section.client_height(), 800.0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let fx = fixture(800.0);
        {
            let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
            section.mount(&fx.viewport, || 0.0);
            assert_eq!(fx.viewport.listener_count(event_types::RESIZE), 1);
        }
        assert_eq!(fx.viewport.listener_count(event_types::RESIZE), 0);
    }

    #[test]
    fn test_remount_does_not_leak() {
        let fx = fixture(800.0);
        let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
        for _ in 0..5 {
            section.mount(&fx.viewport, || 100.0);
        }
        assert_eq!(fx.viewport.listener_count(event_types::RESIZE), 1);
    }

    #[test]
    fn test_render_applies_transform_to_inner_box() {
        let fx = fixture(800.0);
        let mut section = ParallaxSection::new(&fx.graph, fx.scroll);
        section.mount(&fx.viewport, || 1200.0);
        fx.viewport.scroll_to(1200.0);

        let el = section.render(div().child("about"));
        assert!(el.style.translate_y.is_none());
        assert!(el.style.overflow_hidden);

        let inner = el.child_elements().next().unwrap();
        match inner.style.translate_y {
            Some(Length::Percent(p)) => assert!((p - 15.0).abs() < 1e-3),
            other => panic!("unexpected transform {other:?}"),
        }
        assert_eq!(el.text_content(), "about");
    }
}
