//! Two-state animation variants
//!
//! Every animated unit is in one of two visual states, [`VisualState::Hidden`]
//! or [`VisualState::Visible`]. A [`Variants`] value holds the properties of
//! both states plus the transition used to move from hidden to visible.
//! Reveals only ever run in that direction.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::SpringConfig;
use crate::transition::Transition;
use crate::values::{Interpolate, MotionProps};

/// Downward offset of a hidden unit, in layout units
pub const HIDDEN_OFFSET_Y: f32 = 20.0;

/// Visual state of an animated unit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    #[default]
    Hidden,
    Visible,
}

/// Hidden/visible property pair with the transition between them
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variants {
    pub hidden: MotionProps,
    pub visible: MotionProps,
    pub transition: Transition,
}

impl Variants {
    pub fn new(hidden: MotionProps, visible: MotionProps, transition: Transition) -> Self {
        Self {
            hidden,
            visible,
            transition,
        }
    }

    /// Single letter: fade in while springing up from 20 units below
    pub fn letter() -> Self {
        Self::new(
            MotionProps::new(0.0, HIDDEN_OFFSET_Y),
            MotionProps::VISIBLE,
            Transition::spring(SpringConfig::letter_reveal()),
        )
    }

    /// Container of staggered children: opacity only
    pub fn container() -> Self {
        Self::fade(0.3)
    }

    /// Fade and slide up over `duration` seconds
    pub fn fade_up(duration: f32) -> Self {
        Self::new(
            MotionProps::new(0.0, HIDDEN_OFFSET_Y),
            MotionProps::VISIBLE,
            Transition::tween(duration, Easing::EaseOut),
        )
    }

    /// Fade in place over `duration` seconds
    pub fn fade(duration: f32) -> Self {
        Self::new(
            MotionProps::new(0.0, 0.0),
            MotionProps::VISIBLE,
            Transition::tween(duration, Easing::EaseOut),
        )
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.transition = self.transition.with_delay(delay);
        self
    }

    /// Resting properties of a state
    pub fn props(&self, state: VisualState) -> MotionProps {
        match state {
            VisualState::Hidden => self.hidden,
            VisualState::Visible => self.visible,
        }
    }

    /// Properties `elapsed` seconds after the switch to visible
    ///
    /// `extra_delay` is added on top of the transition's own delay; parents
    /// use it to stagger their children.
    pub fn sample(&self, elapsed: Option<f32>, extra_delay: f32) -> MotionProps {
        match elapsed {
            None => self.hidden,
            Some(elapsed) => {
                let progress = self.transition.progress(elapsed - extra_delay);
                self.hidden.lerp(&self.visible, progress)
            }
        }
    }

    /// Whether the hidden-to-visible transition has finished
    pub fn is_settled(&self, elapsed: Option<f32>, extra_delay: f32) -> bool {
        elapsed.is_some_and(|elapsed| self.transition.is_complete(elapsed - extra_delay))
    }
}
