//! Geometry error type shared by the emitter and the coalescer.

use thiserror::Error;

/// Errors raised while validating or merging polygon geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry contains no polygons
    #[error("Geometry is empty")]
    Empty,

    /// A coordinate is NaN or infinite
    #[error("Geometry contains a non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    /// A ring cannot enclose any area
    #[error("Degenerate polygon: {0}")]
    Degenerate(String),

    /// Ring self-intersects or rings cross each other
    #[error("Invalid polygon: {0}")]
    Invalid(String),

    /// Geometry is not a polygon or multipolygon
    #[error("Expected polygonal geometry, got {0}")]
    NotPolygonal(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GeometryError::Empty.to_string(), "Geometry is empty");
        assert_eq!(
            GeometryError::NotPolygonal("LineString").to_string(),
            "Expected polygonal geometry, got LineString"
        );
        let msg = GeometryError::NonFinite {
            x: f64::NAN,
            y: 1.0,
        }
        .to_string();
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_error_trait() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<GeometryError>();
    }
}
