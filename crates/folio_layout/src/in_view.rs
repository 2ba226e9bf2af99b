//! Viewport-entry triggers
//!
//! An [`InViewTrigger`] records the first moment an element's bounds
//! intersect the visible region. It never resets, so leaving and
//! re-entering the viewport does not replay the reveal.

use folio_core::{Rect, Viewport};

#[derive(Clone, Debug)]
pub struct InViewTrigger {
    triggered_at: Option<f32>,
    in_view: bool,
}

impl Default for InViewTrigger {
    fn default() -> Self {
        Self::once()
    }
}

impl InViewTrigger {
    /// Fire on first entry and stay fired
    pub fn once() -> Self {
        Self {
            triggered_at: None,
            in_view: false,
        }
    }

    /// Test `bounds` against the viewport at time `now`
    ///
    /// Returns true only on the observation that fires the trigger.
    pub fn observe(&mut self, bounds: &Rect, viewport: &Viewport, now: f32) -> bool {
        let visible = viewport.is_in_view(bounds);
        let was_in_view = std::mem::replace(&mut self.in_view, visible);

        if self.triggered_at.is_some() || was_in_view || !visible {
            return false;
        }

        self.triggered_at = Some(now);
        tracing::trace!(at = now, y = bounds.y(), "entered viewport");
        true
    }

    /// Fire unconditionally, as if the element were in view
    pub fn fire(&mut self, now: f32) -> bool {
        if self.triggered_at.is_some() {
            return false;
        }
        self.triggered_at = Some(now);
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    pub fn triggered_at(&self) -> Option<f32> {
        self.triggered_at
    }

    /// Seconds since the trigger fired
    pub fn elapsed(&self, now: f32) -> Option<f32> {
        self.triggered_at.map(|t| (now - t).max(0.0))
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Viewport {
        let viewport = Viewport::new(800.0, 600.0);
        viewport.set_document_height(3000.0);
        viewport
    }

    #[test]
    fn test_fires_on_entry() {
        let viewport = setup();
        let bounds = Rect::new(0.0, 1000.0, 800.0, 100.0);
        let mut trigger = InViewTrigger::once();

        assert!(!trigger.observe(&bounds, &viewport, 0.0));
        viewport.scroll_to(600.0);
        assert!(trigger.observe(&bounds, &viewport, 1.5));
        assert_eq!(trigger.triggered_at(), Some(1.5));
        assert_eq!(trigger.elapsed(2.0), Some(0.5));
    }

    #[test]
    fn test_once_never_retriggers() {
        let viewport = setup();
        let bounds = Rect::new(0.0, 1000.0, 800.0, 100.0);
        let mut trigger = InViewTrigger::once();

        viewport.scroll_to(700.0);
        assert!(trigger.observe(&bounds, &viewport, 1.0));
        for (i, y) in [0.0, 700.0, 0.0, 900.0].into_iter().enumerate() {
            viewport.scroll_to(y);
            assert!(!trigger.observe(&bounds, &viewport, 2.0 + i as f32));
        }
        assert_eq!(trigger.triggered_at(), Some(1.0));
    }

    #[test]
    fn test_initially_visible_fires_first_observation() {
        let viewport = setup();
        let mut trigger = InViewTrigger::once();
        assert!(trigger.observe(&Rect::new(0.0, 0.0, 100.0, 50.0), &viewport, 0.0));
    }

    #[test]
    fn test_fire_is_idempotent() {
        let mut trigger = InViewTrigger::once();
        assert!(trigger.fire(0.2));
        assert!(!trigger.fire(0.9));
        assert_eq!(trigger.triggered_at(), Some(0.2));
    }
}
