//! Camera type for viewport transformations

use serde::Serialize;
use super::Vec2;

/// Camera state: the content-space point shown at the viewport center and
/// the zoom factor applied around it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Camera {
    /// Center position in content space
    pub center: Vec2,
    /// Zoom level (1.0 = normal, >1.0 = zoomed in, <1.0 = zoomed out)
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera at default position (origin, zoom 1.0)
    #[inline]
    pub fn new() -> Self {
        Self {
            center: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Create a camera at a specific position and zoom
    #[inline]
    pub fn at(center: Vec2, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Convert a viewport-local point to content space
    #[inline]
    pub fn screen_to_content(&self, local: Vec2, viewport_center: Vec2) -> Vec2 {
        self.center + (local - viewport_center) / self.zoom
    }

    /// Camera state as JSON (`{"center":{"x":..,"y":..},"zoom":..}`)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Interpolate between two cameras.
    ///
    /// The center moves linearly; zoom is interpolated through its
    /// reciprocal so zooming in and out progress at a visually even rate.
    pub fn lerp_reciprocal(from: &Camera, to: &Camera, t: f64) -> Camera {
        let inv_from = 1.0 / from.zoom;
        let inv_to = 1.0 / to.zoom;
        Camera {
            center: Vec2::lerp(from.center, to.center, t),
            zoom: 1.0 / (inv_from * (1.0 - t) + inv_to * t),
        }
    }
}
