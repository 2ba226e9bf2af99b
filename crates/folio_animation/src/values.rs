//! Animatable value types

use serde::{Deserialize, Serialize};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Interpolate between self and other by factor t
    ///
    /// `t` is not clamped: spring progress beyond 1.0 produces overshoot.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

/// The animated visual properties of one unit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionProps {
    /// 0.0 = invisible, 1.0 = opaque
    pub opacity: f32,
    /// Vertical offset in layout units, positive is downward
    pub translate_y: f32,
}

impl MotionProps {
    pub const VISIBLE: MotionProps = MotionProps {
        opacity: 1.0,
        translate_y: 0.0,
    };

    pub const fn new(opacity: f32, translate_y: f32) -> Self {
        Self {
            opacity,
            translate_y,
        }
    }

    /// Opacity clamped into the displayable range
    pub fn display_opacity(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }
}

impl Default for MotionProps {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Interpolate for MotionProps {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: self.opacity.lerp(&other.opacity, t),
            translate_y: self.translate_y.lerp(&other.translate_y, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.opacity.approx_eq(&other.opacity, epsilon)
            && self.translate_y.approx_eq(&other.translate_y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_props_lerp() {
        let hidden = MotionProps::new(0.0, 20.0);
        let mid = hidden.lerp(&MotionProps::VISIBLE, 0.5);
        assert!(mid.approx_eq(&MotionProps::new(0.5, 10.0), 1e-6));
    }

    #[test]
    fn test_overshoot_is_clamped_for_display() {
        let hidden = MotionProps::new(0.0, 20.0);
        let over = hidden.lerp(&MotionProps::VISIBLE, 1.2);
        assert!(over.translate_y < 0.0);
        assert_eq!(over.display_opacity(), 1.0);
    }
}
