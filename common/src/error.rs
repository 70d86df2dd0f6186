//! Errors raised while validating gauge inputs.

use thiserror::Error;

/// Rejected gauge input.
///
/// Out-of-range values are not errors; only inputs that would put NaN,
/// infinity, a non-positive radius or an undrawable footprint into the
/// geometry are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GaugeError {
    /// The scale bounds are equal or not finite.
    #[error("invalid gauge range: min {min} and max {max} must be finite and distinct")]
    InvalidRange { min: f32, max: f32 },

    /// The gauge footprint leaves no positive arc radius.
    #[error("gauge size {size} is too small for a positive radius")]
    DegenerateSize { size: f32 },

    /// The gauge footprint is larger than the widgets can draw.
    #[error("gauge size {size} exceeds the maximum of {max}")]
    OversizedGauge { size: f32, max: f32 },

    /// The reading itself is NaN or infinite.
    #[error("gauge value is not a finite number")]
    NonFiniteValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GaugeError::InvalidRange { min: 50.0, max: 50.0 };
        assert_eq!(
            err.to_string(),
            "invalid gauge range: min 50 and max 50 must be finite and distinct"
        );

        let err = GaugeError::DegenerateSize { size: 40.0 };
        assert_eq!(err.to_string(), "gauge size 40 is too small for a positive radius");

        let err = GaugeError::OversizedGauge { size: 5000.0, max: 1024.0 };
        assert_eq!(err.to_string(), "gauge size 5000 exceeds the maximum of 1024");
    }
}
