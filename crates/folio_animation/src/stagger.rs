//! Staggered child orchestration
//!
//! A parent that reveals a sequence of children offsets each child's start
//! by a fixed step. All times are in seconds.

use serde::{Deserialize, Serialize};

/// Per-child stagger step used by the letter reveal
pub const LETTER_STAGGER: f32 = 0.03;

/// Configuration for stagger animations
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerConfig {
    /// Delay between consecutive children
    pub stagger_children: f32,
    /// Delay before the first child starts
    pub delay_children: f32,
}

impl StaggerConfig {
    pub fn new(stagger_children: f32) -> Self {
        Self {
            stagger_children: stagger_children.max(0.0),
            delay_children: 0.0,
        }
    }

    /// Delay before the first child starts
    pub fn delay_children(mut self, delay: f32) -> Self {
        self.delay_children = delay.max(0.0);
        self
    }

    /// Start delay for a specific child index
    ///
    /// Delays never decrease with the index.
    pub fn delay_for_index(&self, index: usize) -> f32 {
        self.delay_children + self.stagger_children * index as f32
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::new(LETTER_STAGGER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_step_from_base() {
        let config = StaggerConfig::new(0.03).delay_children(0.5);
        assert_eq!(config.delay_for_index(0), 0.5);
        assert!((config.delay_for_index(1) - 0.53).abs() < 1e-6);
        assert!((config.delay_for_index(2) - 0.56).abs() < 1e-6);
    }

    #[test]
    fn test_delays_never_decrease() {
        let config = StaggerConfig::default();
        let delays: Vec<f32> = (0..50).map(|i| config.delay_for_index(i)).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }
}
