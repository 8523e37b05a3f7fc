//! Transition and animation module
//!
//! Provides eased camera transitions and the frame-source abstraction that
//! drives them.

mod camera;
mod easing;
mod frames;

pub use camera::{CameraTransition, TransitionFrame};
pub use easing::smoothstep;
pub use frames::FrameSource;

/// Duration of programmatic camera transitions in milliseconds
pub const TRANSITION_DURATION_MS: f64 = 350.0;

/// How a `move_to` call ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Reached the target and snapped to it
    Completed,
    /// Superseded by a newer transition or a user gesture
    Cancelled,
    /// The engine was destroyed before or during the transition
    Detached,
    /// The target center or zoom was not a finite number
    Rejected,
}

impl TransitionOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionOutcome::Completed => "completed",
            TransitionOutcome::Cancelled => "cancelled",
            TransitionOutcome::Detached => "detached",
            TransitionOutcome::Rejected => "rejected",
        }
    }
}
