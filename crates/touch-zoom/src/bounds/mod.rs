//! Viewport bounds tracking
//!
//! Keeps the viewport's page rectangle current. Element resizes refresh
//! immediately; window resizes and ancestor scrolls are debounced.

mod debounce;
mod scroll;

pub use debounce::{Debounce, BOUNDS_DEBOUNCE_MS};
pub use scroll::{nearest_scroll_container, Overflow, ScrollAnchor, ScrollNode};

use crate::math::{Bounds, Rect};

/// Current bounds plus the pending debounced refresh
#[derive(Clone, Debug)]
pub struct BoundsTracker {
    bounds: Bounds,
    debounce: Debounce,
}

impl Default for BoundsTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsTracker {
    pub fn new() -> Self {
        Self {
            bounds: Bounds::default(),
            debounce: Debounce::new(BOUNDS_DEBOUNCE_MS),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replace the bounds from a freshly measured rectangle
    pub fn refresh(&mut self, rect: Rect) -> Bounds {
        self.bounds = Bounds::from_rect(rect);
        tracing::trace!(bounds = ?self.bounds, "viewport bounds updated");
        self.bounds
    }

    /// Request a refresh once input has been quiet for the debounce period
    #[inline]
    pub fn schedule(&mut self, now_ms: f64) -> f64 {
        self.debounce.trigger(now_ms)
    }

    /// True once when a scheduled refresh is due
    #[inline]
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        self.debounce.poll(now_ms)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Drop any scheduled refresh
    #[inline]
    pub fn cancel(&mut self) {
        self.debounce.cancel();
    }
}
