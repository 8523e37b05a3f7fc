//! Frame scheduling abstraction

use std::future::Future;

/// Cooperative per-frame scheduler.
///
/// The browser implementation resolves on `requestAnimationFrame`; tests
/// use a scripted clock so transitions are deterministic.
pub trait FrameSource {
    /// Current time in milliseconds
    fn now(&self) -> f64;

    /// Suspend until the next display frame, resolving to its timestamp
    fn next_frame(&self) -> impl Future<Output = f64>;
}
