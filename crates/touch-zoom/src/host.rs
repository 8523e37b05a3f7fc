//! Host capabilities the engine depends on

use crate::input::Platform;
use crate::math::Rect;

/// The element the engine is bound to.
///
/// The browser binding wraps a DOM element; tests use a fixed rectangle.
pub trait ViewportHost {
    /// Current page rectangle of the viewport element
    fn bounding_rect(&self) -> Rect;

    /// Platform conventions for wheel axis mapping
    fn platform(&self) -> Platform {
        Platform::Other
    }

    /// Release listeners and observers. Called exactly once, on destroy.
    fn detach(&mut self) {}
}
