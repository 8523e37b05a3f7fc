//! Deadline-based debounce

/// Quiet period before a window resize or scroll refreshes bounds
pub const BOUNDS_DEBOUNCE_MS: f64 = 100.0;

/// Fires once after triggers stop arriving for `quiet_ms`.
///
/// Time is supplied by the caller, so the host decides how to wake up
/// (a timer in the browser, explicit polling in tests).
#[derive(Clone, Debug)]
pub struct Debounce {
    quiet_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            deadline: None,
        }
    }

    /// Register activity at `now_ms`, pushing the deadline back.
    /// Returns the new deadline.
    pub fn trigger(&mut self, now_ms: f64) -> f64 {
        let deadline = now_ms + self.quiet_ms;
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns true (once) if the deadline has been reached
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
