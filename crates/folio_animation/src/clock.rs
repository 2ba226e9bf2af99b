//! Animation clock
//!
//! Time is advanced explicitly by the frame loop, which keeps every sampled
//! frame reproducible.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic animation time in seconds
#[derive(Debug, Default)]
pub struct Clock {
    now: Cell<f32>,
    frames: Cell<u64>,
}

/// Clock shared between the page and its components
pub type SharedClock = Rc<Clock>;

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedClock {
        Rc::new(Self::new())
    }

    /// Current time in seconds
    pub fn now(&self) -> f32 {
        self.now.get()
    }

    /// Number of frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Advance by one frame of `dt` seconds; negative steps are ignored
    pub fn tick(&self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.now.set(self.now.get() + dt);
            self.frames.set(self.frames.get() + 1);
        } else {
            tracing::trace!(dt, "ignoring non-positive frame delta");
        }
        self.now()
    }

    /// Seconds elapsed since `start`, or None if it has not happened yet
    pub fn since(&self, start: Option<f32>) -> Option<f32> {
        start.map(|start| (self.now() - start).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_accumulates() {
        let clock = Clock::new();
        clock.tick(0.5);
        clock.tick(0.25);
        clock.tick(-1.0);
        assert_eq!(clock.now(), 0.75);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_since() {
        let clock = Clock::new();
        clock.tick(2.0);
        assert_eq!(clock.since(None), None);
        assert_eq!(clock.since(Some(0.5)), Some(1.5));
    }
}
