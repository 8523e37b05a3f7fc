//! Viewport rectangles in page coordinates

use super::Vec2;

/// Axis-aligned rectangle as reported by the host (client coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Position and size of the viewport element on the page
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Build bounds from the element's client rectangle
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            min_x: rect.x,
            max_x: rect.right(),
            min_y: rect.y,
            max_y: rect.bottom(),
            width: rect.width,
            height: rect.height,
        }
    }

    /// Center of the viewport in viewport-local coordinates
    #[inline]
    pub fn local_center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a client point into viewport-local coordinates.
    ///
    /// Client coordinates are rounded to hundredths first so sub-pixel
    /// jitter from high-DPI devices does not leak into the pivot math.
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        Vec2::new(
            round_hundredths(client.x) - self.min_x,
            round_hundredths(client.y) - self.min_y,
        )
    }
}

#[inline]
fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
