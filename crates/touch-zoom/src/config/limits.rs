//! Pan and zoom limits

use crate::error::ConfigError;
use crate::math::{Camera, Vec2};
use super::TouchZoomConfig;

/// Default minimum zoom
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Default maximum zoom
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Default off-axis cushioning for wheel panning (45 degrees)
pub const DEFAULT_HORIZONTAL_SCROLL_TOLERANCE: f64 = 1.0;

/// Limits every camera mutation is clamped against
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub horizontal_scroll_tolerance: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_x: f64::NEG_INFINITY,
            max_x: f64::INFINITY,
            min_y: f64::NEG_INFINITY,
            max_y: f64::INFINITY,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            horizontal_scroll_tolerance: DEFAULT_HORIZONTAL_SCROLL_TOLERANCE,
        }
    }
}

impl Limits {
    /// Build limits from a config, falling back to defaults for unset fields
    pub fn from_config(config: &TouchZoomConfig) -> Result<Self, ConfigError> {
        let defaults = Limits::default();

        let [min_x, max_x] = pan_range("xMinMax", config.x_min_max, [defaults.min_x, defaults.max_x])?;
        let [min_y, max_y] = pan_range("yMinMax", config.y_min_max, [defaults.min_y, defaults.max_y])?;

        let [min_zoom, max_zoom] = config
            .zoom_min_max
            .unwrap_or([defaults.min_zoom, defaults.max_zoom]);
        for value in [min_zoom, max_zoom] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field: "zoomMinMax", value });
            }
        }
        if min_zoom <= 0.0 {
            return Err(ConfigError::NonPositiveZoom(min_zoom));
        }
        if min_zoom > max_zoom {
            return Err(ConfigError::InvertedRange {
                field: "zoomMinMax",
                min: min_zoom,
                max: max_zoom,
            });
        }

        let horizontal_scroll_tolerance = config
            .horizontal_scroll_tolerance
            .unwrap_or(defaults.horizontal_scroll_tolerance);
        if horizontal_scroll_tolerance.is_nan() {
            return Err(ConfigError::NotFinite {
                field: "horizontalScrollTolerance",
                value: horizontal_scroll_tolerance,
            });
        }
        if horizontal_scroll_tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(horizontal_scroll_tolerance));
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_zoom,
            max_zoom,
            horizontal_scroll_tolerance,
        })
    }

    #[inline]
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.min_x, self.max_x)
    }

    #[inline]
    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(self.min_y, self.max_y)
    }

    #[inline]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// Clamp a center point component-wise
    #[inline]
    pub fn clamp_center(&self, center: Vec2) -> Vec2 {
        Vec2::new(self.clamp_x(center.x), self.clamp_y(center.y))
    }

    /// Clamp a whole camera
    #[inline]
    pub fn clamp_camera(&self, camera: Camera) -> Camera {
        Camera::at(self.clamp_center(camera.center), self.clamp_zoom(camera.zoom))
    }

    /// Check whether a camera already satisfies these limits
    pub fn contains(&self, camera: &Camera) -> bool {
        (self.min_x..=self.max_x).contains(&camera.center.x)
            && (self.min_y..=self.max_y).contains(&camera.center.y)
            && (self.min_zoom..=self.max_zoom).contains(&camera.zoom)
    }
}

/// Pan limits may be infinite but never NaN or inverted.
fn pan_range(
    field: &'static str,
    configured: Option<[f64; 2]>,
    default: [f64; 2],
) -> Result<[f64; 2], ConfigError> {
    let [min, max] = configured.unwrap_or(default);
    for value in [min, max] {
        if value.is_nan() {
            return Err(ConfigError::NotFinite { field, value });
        }
    }
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok([min, max])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::from_config(&TouchZoomConfig::default()).unwrap();
        assert_eq!(limits, Limits::default());
        assert!(limits.min_x.is_infinite() && limits.min_x < 0.0);
        assert!(limits.max_y.is_infinite() && limits.max_y > 0.0);
        assert!((limits.min_zoom - 0.1).abs() < 1e-12);
        assert!((limits.max_zoom - 10.0).abs() < 1e-12);
        assert!((limits.horizontal_scroll_tolerance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_is_a_valid_pan_limit() {
        let config = TouchZoomConfig {
            x_min_max: Some([0.0, 1000.0]),
            y_min_max: Some([-1000.0, 0.0]),
            ..Default::default()
        };
        let limits = Limits::from_config(&config).unwrap();
        assert_eq!(limits.min_x, 0.0);
        assert_eq!(limits.max_y, 0.0);
    }

    #[test]
    fn test_zero_tolerance_is_kept() {
        let config = TouchZoomConfig {
            horizontal_scroll_tolerance: Some(0.0),
            ..Default::default()
        };
        let limits = Limits::from_config(&config).unwrap();
        assert_eq!(limits.horizontal_scroll_tolerance, 0.0);
    }

    #[test]
    fn test_rejects_non_positive_min_zoom() {
        let config = TouchZoomConfig {
            zoom_min_max: Some([0.0, 2.0]),
            ..Default::default()
        };
        assert!(matches!(
            Limits::from_config(&config),
            Err(ConfigError::NonPositiveZoom(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let config = TouchZoomConfig {
            x_min_max: Some([10.0, -10.0]),
            ..Default::default()
        };
        assert!(matches!(
            Limits::from_config(&config),
            Err(ConfigError::InvertedRange { field: "xMinMax", .. })
        ));

        let config = TouchZoomConfig {
            zoom_min_max: Some([5.0, 1.0]),
            ..Default::default()
        };
        assert!(matches!(
            Limits::from_config(&config),
            Err(ConfigError::InvertedRange { field: "zoomMinMax", .. })
        ));
    }

    #[test]
    fn test_rejects_nan_and_negative_tolerance() {
        let config = TouchZoomConfig {
            y_min_max: Some([f64::NAN, 1.0]),
            ..Default::default()
        };
        assert!(matches!(
            Limits::from_config(&config),
            Err(ConfigError::NotFinite { field: "yMinMax", .. })
        ));

        let config = TouchZoomConfig {
            horizontal_scroll_tolerance: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            Limits::from_config(&config),
            Err(ConfigError::NegativeTolerance(_))
        ));
    }

    #[test]
    fn test_infinite_tolerance_disables_cushioning() {
        let config = TouchZoomConfig {
            horizontal_scroll_tolerance: Some(f64::INFINITY),
            ..Default::default()
        };
        assert!(Limits::from_config(&config).is_ok());
    }

    #[test]
    fn test_clamp_camera() {
        let limits = Limits {
            min_x: -10.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 5.0,
            ..Default::default()
        };
        let clamped = limits.clamp_camera(Camera::at(Vec2::new(50.0, -3.0), 100.0));
        assert_eq!(clamped.center, Vec2::new(10.0, 0.0));
        assert_eq!(clamped.zoom, 10.0);
        assert!(limits.contains(&clamped));
    }
}
