//! Viewport bounds refresh

use crate::host::ViewportHost;
use crate::math::Bounds;
use super::TouchZoom;

impl<H: ViewportHost> TouchZoom<H> {
    /// Re-measure the viewport rectangle now.
    ///
    /// Returns `None` once the engine has been destroyed.
    pub fn update_bounds(&self) -> Option<Bounds> {
        let mut state = self.state.borrow_mut();
        let rect = state.host.as_ref()?.bounding_rect();
        Some(state.bounds.refresh(rect))
    }

    /// The viewport element itself changed size.
    ///
    /// Skipped mid-pinch: pinch zoom on touch devices can resize the
    /// element, and re-measuring then would shift the gesture origin.
    pub fn handle_element_resize(&self) -> Option<Bounds> {
        if self.is_pinching() {
            tracing::trace!("element resize ignored while pinching");
            return None;
        }
        self.update_bounds()
    }

    /// A window resize or ancestor scroll happened at `now_ms`.
    ///
    /// Returns the deadline the host should call
    /// [`poll_bounds_update`](Self::poll_bounds_update) at, or `None` when
    /// destroyed.
    pub fn schedule_bounds_update(&self, now_ms: f64) -> Option<f64> {
        let mut state = self.state.borrow_mut();
        if !state.is_attached() {
            return None;
        }
        Some(state.bounds.schedule(now_ms))
    }

    /// Run the debounced refresh if its quiet period has elapsed.
    ///
    /// Returns `true` when the bounds were re-measured.
    pub fn poll_bounds_update(&self, now_ms: f64) -> bool {
        let due = self.state.borrow_mut().bounds.take_due(now_ms);
        due && self.update_bounds().is_some()
    }
}
