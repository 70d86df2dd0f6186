//! Value-to-gauge mapping.
//!
//! A [`GaugeReading`] is projected onto either a semicircular arc
//! ([`semicircle_style`]) or a full-circle progress ring ([`ring_style`]).
//!
//! # Mapping
//!
//! ```text
//! percentage       = ((value - min) / (max - min)) * 100
//! radius           = size / 2 - 20
//! circumference    = PI * radius                  (half circle)
//! stroke_dashoffset = circumference - percentage / 100 * circumference
//! ```
//!
//! Nothing is clamped. A reading above `max` yields a percentage above 100 and
//! a negative dash offset; a reading below `min` yields a negative percentage
//! and an offset larger than the circumference. Clipping is left to the
//! drawing layer (see [`crate::widgets`]).
//!
//! Inputs that would produce NaN or a non-positive radius are rejected up
//! front with a [`GaugeError`].

use core::f32::consts::PI;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GAUGE_HIGH, GAUGE_LOW, GAUGE_MEDIUM};
use crate::config::{ARC_INSET, DEFAULT_GAUGE_SIZE, MAX_GAUGE_SIZE, MIN_GAUGE_SIZE};
use crate::error::GaugeError;
use crate::thresholds::{LOW_MAX_PERCENT, MEDIUM_MAX_PERCENT};

// =============================================================================
// Color Token
// =============================================================================

/// Severity-style color selected from the fill percentage.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ColorToken {
    /// At or below 33% (red).
    Low,
    /// Above 33% up to and including 66% (orange).
    Medium,
    /// Above 66% (green).
    High,
}

impl ColorToken {
    /// Select the token for an unclamped percentage.
    ///
    /// Negative percentages are Low and percentages above 100 are High.
    #[inline]
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage <= LOW_MAX_PERCENT {
            Self::Low
        } else if percentage <= MEDIUM_MAX_PERCENT {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Display color for this token.
    #[inline]
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Low => GAUGE_LOW,
            Self::Medium => GAUGE_MEDIUM,
            Self::High => GAUGE_HIGH,
        }
    }

    /// Hex notation of the display color.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Low => "#FF4444",
            Self::Medium => "#FFA500",
            Self::High => "#4CAF50",
        }
    }
}

// =============================================================================
// Reading
// =============================================================================

/// A validated reading on a linear scale.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeReading {
    value: f32,
    min_value: f32,
    max_value: f32,
}

impl GaugeReading {
    /// Validate a reading.
    ///
    /// The bounds must be finite and distinct, the value finite. The value is
    /// free to lie outside the bounds.
    pub fn new(
        value: f32,
        min_value: f32,
        max_value: f32,
    ) -> Result<Self, GaugeError> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value == max_value {
            log::debug!("rejecting gauge range {min_value}..{max_value}");
            return Err(GaugeError::InvalidRange {
                min: min_value,
                max: max_value,
            });
        }
        if !value.is_finite() {
            log::debug!("rejecting non-finite gauge value");
            return Err(GaugeError::NonFiniteValue);
        }
        Ok(Self {
            value,
            min_value,
            max_value,
        })
    }

    /// Validate a reading on a scale starting at zero.
    pub fn with_default_min(
        value: f32,
        max_value: f32,
    ) -> Result<Self, GaugeError> {
        Self::new(value, 0.0, max_value)
    }

    pub const fn value(&self) -> f32 { self.value }

    pub const fn min_value(&self) -> f32 { self.min_value }

    pub const fn max_value(&self) -> f32 { self.max_value }

    /// Linear position of the value between the bounds, 0-100, unclamped.
    #[inline]
    pub fn percentage(&self) -> f32 { ((self.value - self.min_value) / (self.max_value - self.min_value)) * 100.0 }

    /// Token for this reading's percentage.
    #[inline]
    pub fn token(&self) -> ColorToken { ColorToken::from_percentage(self.percentage()) }
}

// =============================================================================
// Size
// =============================================================================

/// Pixel footprint of a semicircular gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeSize(f32);

impl GaugeSize {
    /// Validate a footprint. Sizes at or below 40 leave no positive radius,
    /// sizes above [`MAX_GAUGE_SIZE`] cannot be drawn.
    pub fn new(size: f32) -> Result<Self, GaugeError> {
        if !size.is_finite() || size <= MIN_GAUGE_SIZE {
            log::debug!("rejecting gauge size {size}");
            return Err(GaugeError::DegenerateSize { size });
        }
        if size > MAX_GAUGE_SIZE {
            log::debug!("rejecting oversized gauge {size}");
            return Err(GaugeError::OversizedGauge {
                size,
                max: MAX_GAUGE_SIZE,
            });
        }
        Ok(Self(size))
    }

    pub const fn get(self) -> f32 { self.0 }

    /// Arc radius, always positive.
    #[inline]
    pub fn radius(self) -> f32 { self.0 / 2.0 - ARC_INSET }
}

impl Default for GaugeSize {
    fn default() -> Self { Self(DEFAULT_GAUGE_SIZE) }
}

// =============================================================================
// Styles
// =============================================================================

/// Render-ready description of a semicircular gauge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SemicircleStyle {
    /// Unclamped fill percentage.
    pub percentage: f32,
    pub token: ColorToken,
    /// Resolved color of `token`.
    pub color: Rgb565,
    pub radius: f32,
    /// Length of the half-circle arc, `PI * radius`.
    pub circumference: f32,
    /// Dash offset of the progress stroke. Negative above 100%, larger than
    /// `circumference` below 0%.
    pub stroke_dashoffset: f32,
}

/// Render-ready description of a full-circle progress ring.
///
/// The ring primitive takes a 0-100 fill directly, so no arc math is needed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RingStyle {
    /// Fill handed to the ring, unclamped.
    pub percentage: f32,
    pub token: ColorToken,
}

/// Map a reading onto a semicircular arc of the given footprint.
pub fn semicircle_style(
    reading: &GaugeReading,
    size: GaugeSize,
) -> SemicircleStyle {
    let percentage = reading.percentage();
    let token = ColorToken::from_percentage(percentage);
    let radius = size.radius();
    let circumference = PI * radius;
    let stroke_dashoffset = circumference - (percentage / 100.0) * circumference;

    SemicircleStyle {
        percentage,
        token,
        color: token.color(),
        radius,
        circumference,
        stroke_dashoffset,
    }
}

/// Map a reading onto a progress ring.
pub fn ring_style(reading: &GaugeReading) -> RingStyle {
    let percentage = reading.percentage();
    RingStyle {
        percentage,
        token: ColorToken::from_percentage(percentage),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
