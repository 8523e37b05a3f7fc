//! Error types for the camera engine
//!
//! Gesture input never fails: malformed events are ignored. The only
//! fallible surface is configuration, which is rejected up front so the
//! engine can never divide by a zero zoom.

/// Errors raised while building [`Limits`](crate::Limits) from a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON config could not be parsed.
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    /// A `[min, max]` pair has `min > max`.
    #[error("inverted {field} range: min {min} is greater than max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// A value is NaN, or infinite where only finite values make sense.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// Minimum zoom must stay strictly above zero.
    #[error("minimum zoom must be greater than zero, got {0}")]
    NonPositiveZoom(f64),

    /// Horizontal scroll tolerance cannot be negative.
    #[error("horizontal scroll tolerance must not be negative, got {0}")]
    NegativeTolerance(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvertedRange {
            field: "zoomMinMax",
            min: 4.0,
            max: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "inverted zoomMinMax range: min 4 is greater than max 2"
        );
        assert_eq!(
            ConfigError::NonPositiveZoom(0.0).to_string(),
            "minimum zoom must be greater than zero, got 0"
        );
    }
}
