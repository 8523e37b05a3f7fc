//! Drag input

use crate::math::Vec2;

/// Zero-movement drags shorter than this are taps
pub const TAP_THRESHOLD_MS: f64 = 200.0;

/// One drag sample
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragInput {
    /// Pointer movement since the previous sample, screen pixels
    pub delta: Vec2,
    /// Time since the drag began
    pub elapsed_ms: f64,
}

impl DragInput {
    pub fn new(delta: Vec2, elapsed_ms: f64) -> Self {
        Self { delta, elapsed_ms }
    }

    /// A click that never moved; must not nudge the camera
    #[inline]
    pub fn is_tap(&self) -> bool {
        self.delta.is_zero() && self.elapsed_ms < TAP_THRESHOLD_MS
    }
}
