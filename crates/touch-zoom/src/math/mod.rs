//! Core geometry types for the camera engine
//!
//! These types provide basic 2D math for screen points, content-space
//! centers and the camera transform that relates the two.

mod vec2;
mod rect;
mod camera;

pub use vec2::Vec2;
pub use rect::{Bounds, Rect};
pub use camera::Camera;
