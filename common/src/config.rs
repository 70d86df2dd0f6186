//! Gauge geometry configuration constants.
//!
//! The semicircular gauge is laid out in a `size x size * 0.7` box with the
//! arc center at `(size / 2, size / 2)` and a radius of `size / 2 - ARC_INSET`.

// =============================================================================
// Semicircular Gauge
// =============================================================================

/// Default pixel footprint of a semicircular gauge.
pub const DEFAULT_GAUGE_SIZE: f32 = 140.0;

/// Distance between the gauge box edge and the arc centerline.
pub const ARC_INSET: f32 = 20.0;

/// Sizes at or below this value leave no positive radius.
pub const MIN_GAUGE_SIZE: f32 = 2.0 * ARC_INSET;

/// Largest footprint the widgets draw. Keeps every derived pixel coordinate
/// well inside `i32`.
pub const MAX_GAUGE_SIZE: f32 = 1024.0;

/// Stroke width of the track and progress arcs.
pub const GAUGE_STROKE_WIDTH: u32 = 8;

/// Height of the drawing area relative to the gauge size.
pub const GAUGE_HEIGHT_RATIO: f32 = 0.7;

/// Space reserved above the arc for the title.
pub const GAUGE_TITLE_HEIGHT: u32 = 20;

/// Space reserved below the arc for the range caption.
pub const GAUGE_CAPTION_HEIGHT: u32 = 14;

/// Sweep of the full semicircle in degrees.
pub const SEMICIRCLE_SWEEP_DEG: f32 = 180.0;

/// Start angle of the semicircle (9 o'clock), sweeping clockwise over the top.
pub const SEMICIRCLE_START_DEG: f32 = 180.0;

const _: () = assert!(MIN_GAUGE_SIZE < DEFAULT_GAUGE_SIZE);
const _: () = assert!(DEFAULT_GAUGE_SIZE < MAX_GAUGE_SIZE);

// =============================================================================
// Ring Gauge
// =============================================================================

/// Largest ring diameter the widget draws; larger sizes are clamped.
pub const MAX_RING_SIZE: u32 = MAX_GAUGE_SIZE as u32;

/// Default pixel footprint of a full-circle ring gauge.
pub const DEFAULT_RING_SIZE: u32 = 120;

/// Default stroke width of a ring gauge.
pub const RING_STROKE_WIDTH: u32 = 8;

/// Start angle of the ring progress (12 o'clock).
pub const RING_START_DEG: f32 = -90.0;

/// Sweep of a full ring in degrees.
pub const RING_SWEEP_DEG: f32 = 360.0;
