//! Transitions: how a value travels from one state to another over time
//!
//! A transition turns "seconds since the state change" into normalized
//! progress. Tweens stay within 0..=1; springs may overshoot before
//! settling on 1.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};

/// Integration step used when sampling springs
pub const SPRING_STEP: f32 = 1.0 / 120.0;

/// Upper bound on simulated spring time
const MAX_SPRING_TIME: f32 = 10.0;

/// The curve a transition follows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TransitionKind {
    /// Physics-driven; finishes when the spring settles
    Spring(SpringConfig),
    /// Fixed duration in seconds with an easing curve
    Tween { duration: f32, easing: Easing },
}

/// A transition with an optional start delay (seconds)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub kind: TransitionKind,
    #[serde(default)]
    pub delay: f32,
}

impl Transition {
    pub fn spring(config: SpringConfig) -> Self {
        Self {
            kind: TransitionKind::Spring(config),
            delay: 0.0,
        }
    }

    pub fn tween(duration: f32, easing: Easing) -> Self {
        Self {
            kind: TransitionKind::Tween {
                duration: duration.max(0.0),
                easing,
            },
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Progress after `elapsed` seconds, delay included
    pub fn progress(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            return 0.0;
        }
        match self.kind {
            TransitionKind::Tween { duration, easing } => {
                if duration <= 0.0 {
                    1.0
                } else {
                    easing.apply(t / duration)
                }
            }
            TransitionKind::Spring(config) => {
                let mut spring = unit_spring(config);
                spring.advance(t.min(MAX_SPRING_TIME), SPRING_STEP);
                spring.value()
            }
        }
    }

    /// Time in seconds (after the delay) until the transition comes to rest
    pub fn settle_time(&self) -> f32 {
        match self.kind {
            TransitionKind::Tween { duration, .. } => duration,
            TransitionKind::Spring(config) => {
                let mut spring = unit_spring(config);
                let mut t = 0.0;
                while !spring.is_settled() && t < MAX_SPRING_TIME {
                    spring.step(SPRING_STEP);
                    t += SPRING_STEP;
                }
                t
            }
        }
    }

    /// Whether the transition has come to rest after `elapsed` seconds
    pub fn is_complete(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.settle_time()
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::tween(0.3, Easing::EaseOut)
    }
}

fn unit_spring(config: SpringConfig) -> Spring {
    let mut spring = Spring::new(config, 0.0);
    spring.set_target(1.0);
    spring
}
