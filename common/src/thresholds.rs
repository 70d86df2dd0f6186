//! Gauge color thresholds.
//!
//! Both thresholds apply to the unclamped fill percentage and are inclusive
//! upper bounds: a gauge at exactly 33% is still Low, at exactly 66% still
//! Medium.

/// Highest percentage rendered with the Low token.
pub const LOW_MAX_PERCENT: f32 = 33.0;

/// Highest percentage rendered with the Medium token.
pub const MEDIUM_MAX_PERCENT: f32 = 66.0;

// Compile-time validation: thresholds must be in ascending order
const _: () = assert!(LOW_MAX_PERCENT < MEDIUM_MAX_PERCENT);
const _: () = assert!(MEDIUM_MAX_PERCENT < 100.0);
