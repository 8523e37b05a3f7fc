//! Input normalization
//!
//! Host-neutral descriptions of wheel, pinch and drag input, the math that
//! normalizes them, and a recognizer that builds drag/pinch gestures out of
//! raw pointer samples.

mod drag;
mod pinch;
mod platform;
mod recognizer;
mod result;
mod wheel;

pub use drag::{DragInput, TAP_THRESHOLD_MS};
pub use pinch::{PinchInput, PinchSource, PinchStep, PinchTracker, PINCH_EPSILON};
pub use platform::Platform;
pub use recognizer::{GestureEvent, GestureRecognizer, PointerSample};
pub use result::InputResult;
pub use wheel::{
    classify_wheel, normalize_wheel, Modifiers, NormalizedWheel, WheelAction, WheelInput,
    MAX_ZOOM_STEP, WHEEL_PAN_SCALE, WHEEL_ZOOM_DAMPING, WHEEL_ZOOM_DIVISOR,
};
