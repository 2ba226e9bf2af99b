//! Folio Animation System
//!
//! Spring physics, tweens, two-state variants, stagger orchestration and
//! scroll-linked range transforms.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: fixed-duration transitions with easing curves
//! - **Variants**: hidden/visible property pairs sampled over time
//! - **Stagger**: per-child start offsets with an initial delay
//! - **Range Transforms**: clamped linear input-to-output mapping

pub mod clock;
pub mod easing;
pub mod spring;
pub mod stagger;
pub mod transform;
pub mod transition;
pub mod values;
pub mod variants;

pub use clock::{Clock, SharedClock};
pub use easing::Easing;
pub use spring::{Spring, SpringConfig, SpringPrecision};
pub use stagger::{StaggerConfig, LETTER_STAGGER};
pub use transform::LinearMap;
pub use transition::{Transition, TransitionKind};
pub use values::{Interpolate, MotionProps};
pub use variants::{Variants, VisualState, HIDDEN_OFFSET_Y};
