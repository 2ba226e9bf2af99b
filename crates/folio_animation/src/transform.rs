//! Range transforms
//!
//! Maps a continuously changing input (usually the global scroll position)
//! linearly onto an output range.

use serde::{Deserialize, Serialize};

/// Inputs closer together than this are treated as a single point
const DEGENERATE_SPAN: f32 = 1e-6;

/// Linear mapping from an input range onto an output range
///
/// ```
/// use folio_animation::LinearMap;
///
/// let map = LinearMap::new((200.0, 1000.0), (0.0, 30.0));
/// assert_eq!(map.map(200.0), 0.0);
/// assert_eq!(map.map(600.0), 15.0);
/// assert_eq!(map.map(5000.0), 30.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearMap {
    pub input: (f32, f32),
    pub output: (f32, f32),
    /// Clamp inputs outside the range to the nearest boundary output
    pub clamp: bool,
}

impl LinearMap {
    /// Create a clamping map
    pub fn new(input: (f32, f32), output: (f32, f32)) -> Self {
        Self {
            input,
            output,
            clamp: true,
        }
    }

    /// Allow extrapolation past both ends
    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Map an input value
    ///
    /// A zero-width input range acts as a step: inputs at or before the
    /// point give the start output, inputs past it give the end output.
    pub fn map(&self, x: f32) -> f32 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;

        if span.abs() < DEGENERATE_SPAN {
            return if x <= in_start { out_start } else { out_end };
        }

        let mut t = (x - in_start) / span;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        out_start + (out_end - out_start) * t
    }
}
