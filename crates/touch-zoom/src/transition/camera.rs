//! Camera transition for smooth programmatic moves

use crate::math::Camera;
use super::{smoothstep, TRANSITION_DURATION_MS};

/// One frame of a running transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionFrame {
    /// Intermediate eased camera
    InFlight(Camera),
    /// Duration elapsed; the camera is exactly the target
    Finished(Camera),
}

impl TransitionFrame {
    #[inline]
    pub fn camera(&self) -> Camera {
        match *self {
            TransitionFrame::InFlight(camera) | TransitionFrame::Finished(camera) => camera,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, TransitionFrame::Finished(_))
    }
}

/// Camera transition state
#[derive(Clone, Debug)]
pub struct CameraTransition {
    /// Starting camera state
    from: Camera,
    /// Target camera state
    to: Camera,
    /// Start time (ms timestamp)
    start_ms: f64,
}

impl CameraTransition {
    /// Create a new camera transition
    pub fn new(from: Camera, to: Camera, start_ms: f64) -> Self {
        Self { from, to, start_ms }
    }

    /// Get the linear progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / TRANSITION_DURATION_MS).clamp(0.0, 1.0)
    }

    /// The transition finishes once elapsed time strictly exceeds the duration
    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms > TRANSITION_DURATION_MS
    }

    /// Sample the transition at `now_ms`
    pub fn sample(&self, now_ms: f64) -> TransitionFrame {
        if self.is_complete(now_ms) {
            return TransitionFrame::Finished(self.to);
        }
        let k = smoothstep(self.progress(now_ms));
        TransitionFrame::InFlight(Camera::lerp_reciprocal(&self.from, &self.to, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_transition_starts_at_from() {
        let from = Camera::at(Vec2::new(0.0, 0.0), 1.0);
        let to = Camera::at(Vec2::new(100.0, 50.0), 2.0);
        let transition = CameraTransition::new(from, to, 1000.0);

        let frame = transition.sample(1000.0);
        assert!(!frame.is_finished());
        assert!(frame.camera().center.is_zero());
        assert!((frame.camera().zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transition_at_exact_duration_is_still_in_flight() {
        let from = Camera::new();
        let to = Camera::at(Vec2::new(100.0, 0.0), 1.0);
        let transition = CameraTransition::new(from, to, 0.0);

        let frame = transition.sample(TRANSITION_DURATION_MS);
        assert!(!frame.is_finished());
        assert!((frame.camera().center.x - 100.0).abs() < 1e-9);

        let frame = transition.sample(TRANSITION_DURATION_MS + 0.5);
        assert_eq!(frame, TransitionFrame::Finished(to));
    }

    #[test]
    fn test_transition_midpoint() {
        let from = Camera::at(Vec2::new(0.0, 0.0), 1.0);
        let to = Camera::at(Vec2::new(100.0, 200.0), 0.5);
        let transition = CameraTransition::new(from, to, 0.0);

        // smoothstep(0.5) = 0.5
        let camera = transition.sample(TRANSITION_DURATION_MS / 2.0).camera();
        assert!((camera.center.x - 50.0).abs() < 1e-9);
        assert!((camera.center.y - 100.0).abs() < 1e-9);
        assert!((camera.zoom - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_transition_progress() {
        let transition = CameraTransition::new(Camera::new(), Camera::new(), 100.0);
        assert_eq!(transition.progress(0.0), 0.0);
        assert!((transition.progress(100.0 + TRANSITION_DURATION_MS / 4.0) - 0.25).abs() < 1e-12);
        assert_eq!(transition.progress(10_000.0), 1.0);
    }
}
