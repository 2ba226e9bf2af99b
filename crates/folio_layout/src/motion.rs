//! Single-element entrance animations
//!
//! A [`Motion`] moves one element from its hidden to its visible variant,
//! starting either when the page mounts or when the element first scrolls
//! into view. Either way it plays once.

use folio_animation::{MotionProps, Variants};
use folio_core::{Rect, Viewport};

use crate::element::Element;
use crate::in_view::InViewTrigger;

/// What starts the entrance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionStart {
    /// When the page mounts
    Mount,
    /// First time the element intersects the viewport
    InView,
}

#[derive(Clone, Debug)]
pub struct Motion {
    variants: Variants,
    start: MotionStart,
    trigger: InViewTrigger,
}

impl Motion {
    pub fn on_mount(variants: Variants) -> Self {
        Self {
            variants,
            start: MotionStart::Mount,
            trigger: InViewTrigger::once(),
        }
    }

    pub fn in_view(variants: Variants) -> Self {
        Self {
            variants,
            start: MotionStart::InView,
            trigger: InViewTrigger::once(),
        }
    }

    pub fn variants(&self) -> &Variants {
        &self.variants
    }

    pub fn start_mode(&self) -> MotionStart {
        self.start
    }

    /// Start a mount-triggered entrance; no-op for in-view motions
    pub fn mount(&mut self, now: f32) -> bool {
        match self.start {
            MotionStart::Mount => self.trigger.fire(now),
            MotionStart::InView => false,
        }
    }

    /// Check viewport entry; no-op for mount-triggered motions
    pub fn observe(&mut self, bounds: &Rect, viewport: &Viewport, now: f32) -> bool {
        match self.start {
            MotionStart::InView => self.trigger.observe(bounds, viewport, now),
            MotionStart::Mount => false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.trigger.is_triggered()
    }

    pub fn sample(&self, now: f32) -> MotionProps {
        self.variants.sample(self.trigger.elapsed(now), 0.0)
    }

    pub fn is_settled(&self, now: f32) -> bool {
        self.variants.is_settled(self.trigger.elapsed(now), 0.0)
    }

    /// Apply the current motion values to `element`
    pub fn apply(&self, element: Element, now: f32) -> Element {
        element.motion(self.sample(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::div;
    use folio_animation::HIDDEN_OFFSET_Y;

    #[test]
    fn test_mount_entrance() {
        let mut motion = Motion::on_mount(Variants::fade_up(0.8));
        assert_eq!(motion.sample(0.0), MotionProps::new(0.0, HIDDEN_OFFSET_Y));

        assert!(motion.mount(1.0));
        assert!(!motion.mount(2.0));
        let mid = motion.sample(1.4);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(motion.is_settled(1.9));
        assert_eq!(motion.sample(5.0), MotionProps::VISIBLE);
    }

    #[test]
    fn test_in_view_ignores_mount() {
        let viewport = Viewport::new(800.0, 600.0);
        viewport.set_document_height(2000.0);
        let bounds = Rect::new(0.0, 900.0, 100.0, 40.0);
        let mut motion = Motion::in_view(Variants::fade_up(0.5).with_delay(0.2));

        assert!(!motion.mount(0.0));
        assert!(!motion.observe(&bounds, &viewport, 0.0));
        viewport.scroll_to(500.0);
        assert!(motion.observe(&bounds, &viewport, 1.0));

        assert_eq!(motion.sample(1.1).opacity, 0.0);
        assert!(motion.is_settled(1.8));
    }

    #[test]
    fn test_apply_writes_style() {
        let motion = Motion::on_mount(Variants::fade(0.8));
        let el = motion.apply(div(), 0.0);
        assert_eq!(el.style.opacity, Some(0.0));
    }
}
