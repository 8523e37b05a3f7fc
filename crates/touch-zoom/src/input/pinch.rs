//! Pinch gesture tracking

use crate::math::Vec2;

/// Below this the previous pinch scale is treated as degenerate
pub const PINCH_EPSILON: f64 = 1e-6;

/// Device that produced a pinch event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinchSource {
    /// Two-finger touch or two active pointers
    #[default]
    Touch,
    /// Safari `gesturestart`/`gesturechange`/`gestureend`
    WebKitGesture,
    /// ctrl+wheel that a host routed to the pinch path; always ignored
    Wheel,
}

/// One pinch sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchInput {
    /// Gesture origin (midpoint of the fingers), screen coordinates
    pub origin: Vec2,
    /// Cumulative scale since the gesture started (starts at 1)
    pub movement: f64,
    pub source: PinchSource,
}

impl PinchInput {
    pub fn new(origin: Vec2, movement: f64) -> Self {
        Self {
            origin,
            movement,
            source: PinchSource::Touch,
        }
    }
}

/// Incremental change produced by one pinch update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Origin movement since the previous update (start minus current)
    pub pan: Vec2,
    /// Multiplicative zoom change since the previous update
    pub ratio: f64,
}

/// Transient state of the pinch in progress
#[derive(Clone, Debug)]
pub struct PinchTracker {
    origin: Option<Vec2>,
    accumulated: Vec2,
    last_movement: f64,
}

impl Default for PinchTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchTracker {
    pub fn new() -> Self {
        Self {
            origin: None,
            accumulated: Vec2::ZERO,
            last_movement: 1.0,
        }
    }

    /// True between `start` and `end`
    #[inline]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Begin a gesture at `origin`
    pub fn start(&mut self, origin: Vec2) {
        self.origin = Some(origin);
        self.accumulated = Vec2::ZERO;
        self.last_movement = 1.0;
    }

    /// Feed one update; `None` when no gesture has started.
    ///
    /// The pan is the difference against the previously accumulated delta
    /// rather than against the start, so rounding never accumulates drift.
    pub fn update(&mut self, origin: Vec2, movement: f64) -> Option<PinchStep> {
        let start = self.origin?;
        let delta = start - origin;
        let pan = delta - self.accumulated;
        self.accumulated = delta;

        let ratio = if self.last_movement.abs() < PINCH_EPSILON {
            1.0
        } else {
            movement / self.last_movement
        };
        self.last_movement = movement;

        let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
        Some(PinchStep { pan, ratio })
    }

    /// Clear all transient state
    pub fn end(&mut self) {
        *self = Self::new();
    }
}
