//! Error types for interpolation and key point handling

use serde::{Deserialize, Serialize};

/// Errors raised by intervals, key point collections and interpolation engines.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SplineError {
    /// Interval bounds are reversed or not comparable
    #[error("Invalid interval: start {start} is greater than end {end}")]
    InvalidInterval { start: f64, end: f64 },

    /// A value lies outside the interval it was applied to
    #[error("Value {value} is out of range [{start}, {end}]")]
    OutOfRange { value: f64, start: f64, end: f64 },

    /// Interpolation position lies outside the key point domain
    #[error("Position {position} is outside the key point domain [{start}, {end}]")]
    PositionOutOfRange { position: f64, start: f64, end: f64 },

    /// Normalized fraction outside [0, 1]
    #[error("Fraction {fraction} is outside [0, 1]")]
    FractionOutOfRange { fraction: f64 },

    /// Not enough key points to interpolate
    #[error("Interpolation requires at least {required} key points, got {actual}")]
    InsufficientKeyPoints { required: usize, actual: usize },

    /// The type provider has no such dimension
    #[error("Dimension {dimension} is not supported by {type_name}")]
    UnsupportedDimension {
        type_name: String,
        dimension: usize,
    },

    /// Component count does not match the provider's dimension count
    #[error("{type_name} expects {expected} dimensions, got {actual}")]
    DimensionMismatch {
        type_name: String,
        expected: usize,
        actual: usize,
    },

    /// Stored key point documents that fail validation
    #[error("Invalid key points: {reason}")]
    InvalidKeyPoints { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl SplineError {
    /// Error for a dimension index the provider of `V` does not expose.
    pub fn unsupported_dimension<V: ?Sized>(dimension: usize) -> Self {
        Self::UnsupportedDimension {
            type_name: std::any::type_name::<V>().to_string(),
            dimension,
        }
    }

    /// Error for a component slice whose length does not match `V`'s dimensions.
    pub fn dimension_mismatch<V: ?Sized>(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            type_name: std::any::type_name::<V>().to_string(),
            expected,
            actual,
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInterval { .. }
            | Self::OutOfRange { .. }
            | Self::PositionOutOfRange { .. }
            | Self::FractionOutOfRange { .. } => "range",
            Self::InsufficientKeyPoints { .. } | Self::InvalidKeyPoints { .. } => "keypoints",
            Self::UnsupportedDimension { .. } | Self::DimensionMismatch { .. } => "provider",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for SplineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_dimension_names_type() {
        let err = SplineError::unsupported_dimension::<f64>(3);
        assert_eq!(err.to_string(), "Dimension 3 is not supported by f64");
        assert_eq!(err.category(), "provider");
    }

    #[test]
    fn categories() {
        let err = SplineError::InsufficientKeyPoints {
            required: 2,
            actual: 1,
        };
        assert_eq!(err.category(), "keypoints");
        assert_eq!(
            SplineError::FractionOutOfRange { fraction: 2.0 }.category(),
            "range"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<f64, _> = serde_json::from_str("not json");
        let err: SplineError = parse.unwrap_err().into();
        assert!(matches!(err, SplineError::Serialization { .. }));
    }
}
