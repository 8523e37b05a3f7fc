//! Programmatic camera transitions

use crate::host::ViewportHost;
use crate::math::{Camera, Vec2};
use crate::transition::{CameraTransition, FrameSource, TransitionFrame, TransitionOutcome};
use super::TouchZoom;

/// The transition currently allowed to drive the camera
pub(super) struct ActiveTransition {
    pub(super) generation: u64,
    transition: CameraTransition,
}

impl<H: ViewportHost> TouchZoom<H> {
    /// Animate the camera to `center`/`zoom` over 350 ms.
    ///
    /// The target is clamped to the limits first. Observers see every
    /// frame with `manual = false`, and the last frame lands exactly on the
    /// target. Starting another transition, any camera-moving gesture, or
    /// [`destroy`](Self::destroy) supersedes this one; it then resolves
    /// at its next frame without touching the camera again.
    pub async fn move_to<F: FrameSource>(
        &self,
        frames: &F,
        center: Vec2,
        zoom: f64,
    ) -> TransitionOutcome {
        if !center.is_finite() || !zoom.is_finite() {
            tracing::warn!(?center, zoom, "ignoring non-finite camera target");
            return TransitionOutcome::Rejected;
        }

        let mut now_ms = frames.now();
        let Some(generation) = self.begin_transition(Camera::at(center, zoom), now_ms) else {
            return TransitionOutcome::Detached;
        };

        loop {
            let frame = match self.step_transition(generation, now_ms) {
                Ok(frame) => frame,
                Err(outcome) => {
                    tracing::debug!(generation, ?outcome, "camera transition stopped");
                    return outcome;
                }
            };

            self.notify(frame.camera(), false);
            if frame.is_finished() {
                tracing::debug!(generation, camera = ?frame.camera(), "camera transition complete");
                return TransitionOutcome::Completed;
            }
            now_ms = frames.next_frame().await;
        }
    }

    /// Install a new transition from the current camera, superseding any
    /// previous one. `None` when destroyed.
    fn begin_transition(&self, target: Camera, now_ms: f64) -> Option<u64> {
        let mut state = self.state.borrow_mut();
        if !state.is_attached() {
            return None;
        }

        state.cancel_transition();
        state.generation += 1;
        let generation = state.generation;
        let target = state.viewport.limits().clamp_camera(target);
        let from = state.viewport.camera();
        state.transition = Some(ActiveTransition {
            generation,
            transition: CameraTransition::new(from, target, now_ms),
        });

        tracing::debug!(generation, ?from, to = ?target, "camera transition started");
        Some(generation)
    }

    /// Advance transition `generation` to `now_ms` and write the sampled
    /// camera. Errors when the transition no longer owns the camera.
    fn step_transition(
        &self,
        generation: u64,
        now_ms: f64,
    ) -> Result<TransitionFrame, TransitionOutcome> {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        if !state.is_attached() {
            return Err(TransitionOutcome::Detached);
        }

        let frame = match &state.transition {
            Some(active) if active.generation == generation => {
                active.transition.sample(now_ms)
            }
            _ => return Err(TransitionOutcome::Cancelled),
        };

        state.viewport.set_camera(frame.camera());
        if frame.is_finished() {
            state.transition = None;
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TouchZoomConfig;
    use crate::input::DragInput;
    use crate::math::Rect;

    struct TestHost;

    impl ViewportHost for TestHost {
        fn bounding_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 800.0, 600.0)
        }
    }

    fn engine() -> TouchZoom<TestHost> {
        TouchZoom::new(TestHost, TouchZoomConfig::default()).unwrap()
    }

    #[test]
    fn test_begin_transition_bumps_generation() {
        let engine = engine();
        let first = engine.begin_transition(Camera::at(Vec2::new(1.0, 1.0), 2.0), 0.0);
        let second = engine.begin_transition(Camera::at(Vec2::new(2.0, 2.0), 2.0), 0.0);
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));

        // Only the newest transition may write the camera
        assert_eq!(
            engine.step_transition(1, 10.0),
            Err(TransitionOutcome::Cancelled)
        );
        assert!(engine.step_transition(2, 10.0).is_ok());
    }

    #[test]
    fn test_target_is_clamped() {
        let engine = TouchZoom::new(
            TestHost,
            TouchZoomConfig {
                x_min_max: Some([-50.0, 50.0]),
                zoom_min_max: Some([0.5, 2.0]),
                ..Default::default()
            },
        )
        .unwrap();

        let generation = engine
            .begin_transition(Camera::at(Vec2::new(400.0, 0.0), 8.0), 0.0)
            .unwrap();
        let frame = engine.step_transition(generation, 1_000.0).unwrap();
        assert_eq!(frame, TransitionFrame::Finished(Camera::at(Vec2::new(50.0, 0.0), 2.0)));
        assert_eq!(engine.camera(), frame.camera());
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn test_gesture_cancels_transition() {
        let engine = engine();
        let generation = engine
            .begin_transition(Camera::at(Vec2::new(100.0, 0.0), 1.0), 0.0)
            .unwrap();
        assert!(engine.is_transitioning());

        engine.handle_drag(&DragInput::new(Vec2::new(5.0, 0.0), 16.0));
        assert!(!engine.is_transitioning());
        assert_eq!(
            engine.step_transition(generation, 100.0),
            Err(TransitionOutcome::Cancelled)
        );
    }

    #[test]
    fn test_destroyed_engine_reports_detached() {
        let engine = engine();
        let generation = engine
            .begin_transition(Camera::at(Vec2::new(100.0, 0.0), 1.0), 0.0)
            .unwrap();
        engine.destroy();
        assert_eq!(
            engine.step_transition(generation, 100.0),
            Err(TransitionOutcome::Detached)
        );
        assert_eq!(engine.begin_transition(Camera::new(), 0.0), None);
    }
}
