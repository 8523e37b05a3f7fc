//! Input result type

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    /// Input changed the camera or gesture state and observers were notified
    Handled,
    /// Input was dropped (duplicate, tap, zero delta, detached engine, ...)
    Ignored,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}
