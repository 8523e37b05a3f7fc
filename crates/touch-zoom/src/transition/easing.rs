//! Easing functions for animations

/// Smoothstep: `x² (3 − 2x)` with the input clamped to `[0, 1]`.
///
/// Zero velocity at both ends.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let x = t.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}
