//! Engine configuration
//!
//! [`TouchZoomConfig`] mirrors the options object handed over by the host
//! page (camelCase JSON, every field optional). It is validated once into
//! [`Limits`], which the engine consults on every camera mutation.

mod limits;

pub use limits::{
    Limits, DEFAULT_HORIZONTAL_SCROLL_TOLERANCE, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
};

use serde::Deserialize;
use crate::error::ConfigError;

/// Which wheel axis drives horizontal panning
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Vertical wheel movement pans horizontally
    Horizontal,
    /// Wheel axes map straight through (any unrecognized value lands here)
    #[default]
    #[serde(other)]
    Vertical,
}

/// Options accepted when constructing a [`TouchZoom`](crate::TouchZoom)
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouchZoomConfig {
    /// Pan limits on the x axis
    pub x_min_max: Option<[f64; 2]>,
    /// Pan limits on the y axis
    pub y_min_max: Option<[f64; 2]>,
    /// Zoom limits
    pub zoom_min_max: Option<[f64; 2]>,
    /// How far off-axis a wheel pan may be before horizontal movement is
    /// dropped (1 = 45 degrees, 0 = never pan horizontally)
    pub horizontal_scroll_tolerance: Option<f64>,
    /// Wheel axis mapping override
    pub scroll_direction: Option<ScrollDirection>,
}

impl TouchZoomConfig {
    /// Parse a config from the JSON options object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Effective wheel axis mapping
    #[inline]
    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction.unwrap_or_default()
    }

    /// Validate into clamping limits
    pub fn limits(&self) -> Result<Limits, ConfigError> {
        Limits::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json() {
        let config = TouchZoomConfig::from_json(
            r#"{
                "xMinMax": [-500, 500],
                "zoomMinMax": [0.5, 4],
                "horizontalScrollTolerance": 2,
                "scrollDirection": "horizontal"
            }"#,
        )
        .unwrap();

        assert_eq!(config.x_min_max, Some([-500.0, 500.0]));
        assert_eq!(config.y_min_max, None);
        assert_eq!(config.zoom_min_max, Some([0.5, 4.0]));
        assert_eq!(config.horizontal_scroll_tolerance, Some(2.0));
        assert_eq!(config.scroll_direction(), ScrollDirection::Horizontal);
    }

    #[test]
    fn test_config_empty_json_uses_defaults() {
        let config = TouchZoomConfig::from_json("{}").unwrap();
        assert_eq!(config, TouchZoomConfig::default());
        assert_eq!(config.scroll_direction(), ScrollDirection::Vertical);
    }

    #[test]
    fn test_unknown_scroll_direction_is_vertical() {
        let config = TouchZoomConfig::from_json(r#"{"scrollDirection": "diagonal"}"#).unwrap();
        assert_eq!(config.scroll_direction(), ScrollDirection::Vertical);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = TouchZoomConfig::from_json(r#"{"xMinMax": "wide"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
