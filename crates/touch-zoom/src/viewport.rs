//! Clamped camera state holder

use crate::config::Limits;
use crate::math::{Camera, Vec2};

/// Owner of the camera transform.
///
/// Every write goes through a clamping setter, so readers always observe a
/// camera inside [`Limits`].
#[derive(Clone, Debug)]
pub struct Viewport {
    camera: Camera,
    limits: Limits,
}

impl Viewport {
    /// Create a viewport at the origin with zoom 1.0 (clamped into `limits`)
    pub fn new(limits: Limits) -> Self {
        let mut viewport = Self {
            camera: Camera::new(),
            limits,
        };
        viewport.set_camera(Camera::new());
        viewport
    }

    #[inline]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.camera.center
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[inline]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Replace the whole camera, clamping both center and zoom
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = self.limits.clamp_camera(camera);
        self.check_invariant();
    }

    /// Move the center, clamping both axes
    pub fn set_center(&mut self, center: Vec2) {
        self.camera.center = self.limits.clamp_center(center);
        self.check_invariant();
    }

    /// Move the center on the y axis only; x is left untouched
    pub fn set_center_y(&mut self, y: f64) {
        self.camera.center.y = self.limits.clamp_y(y);
        self.check_invariant();
    }

    /// Set the zoom level with clamping, returning the applied value
    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.camera.zoom = self.limits.clamp_zoom(zoom);
        self.check_invariant();
        self.camera.zoom
    }

    /// Pan by a screen-space delta (content follows the pointer)
    pub fn pan_screen(&mut self, delta: Vec2) {
        self.set_center(self.camera.center - delta / self.camera.zoom);
    }

    /// Zoom to `new_zoom` keeping the content under `pivot` fixed.
    ///
    /// `pivot` and `viewport_center` are viewport-local screen points.
    pub fn zoom_around(&mut self, new_zoom: f64, pivot: Vec2, viewport_center: Vec2) {
        let old_zoom = self.camera.zoom;
        let new_zoom = self.limits.clamp_zoom(new_zoom);
        let offset = pivot - viewport_center;
        let movement = offset * (1.0 / old_zoom - 1.0 / new_zoom);
        self.camera.zoom = new_zoom;
        self.set_center(self.camera.center + movement);
    }

    #[inline]
    fn check_invariant(&self) {
        debug_assert!(
            self.limits.contains(&self.camera),
            "camera {:?} escaped limits {:?}",
            self.camera,
            self.limits
        );
    }
}
