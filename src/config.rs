//! Application configuration constants.
//!
//! The shell renders a fixed portrait phone layout. All card positions are
//! compile-time constants derived from the screen size and margins.

use curing_common::config::GAUGE_CAPTION_HEIGHT;

// =============================================================================
// Display Configuration
// =============================================================================

/// Screen width in pixels (portrait phone).
pub const SCREEN_WIDTH: u32 = 360;

/// Height of the rendered canvas. Pages scroll on a phone, so a frame holds
/// the whole page rather than one viewport.
pub const SCREEN_HEIGHT: u32 = 920;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 48;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Card Layout
// =============================================================================

/// Gap between cards and around the screen edge.
pub const CARD_MARGIN: u32 = 8;

/// Width of a card spanning the whole screen.
pub const FULL_CARD_WIDTH: u32 = SCREEN_WIDTH - 2 * CARD_MARGIN;

/// Width of a card in the two-column grid.
pub const HALF_CARD_WIDTH: u32 = (SCREEN_WIDTH - 3 * CARD_MARGIN) / 2;

/// Vertical space for a card title.
pub const CARD_TITLE_HEIGHT: u32 = 22;

/// Gauge footprint on the dashboard grid.
pub const DASHBOARD_GAUGE_SIZE: f32 = 120.0;

/// Gauge footprint in the barn detail conditions row (three across).
pub const DETAIL_GAUGE_SIZE: f32 = 100.0;

/// Curing progress ring diameter.
pub const PROGRESS_RING_SIZE: u32 = 100;

/// Curing progress ring stroke.
pub const PROGRESS_RING_STROKE: u32 = 10;

/// Padding below a gauge inside its card.
pub const GAUGE_CARD_PADDING: u32 = GAUGE_CAPTION_HEIGHT / 2;

/// Height of the plot area of a trend card.
pub const TREND_CHART_HEIGHT: u32 = 110;

/// Full height of a trend card, title included.
pub const TREND_CARD_HEIGHT: u32 = CARD_TITLE_HEIGHT + TREND_CHART_HEIGHT + CARD_MARGIN;

// =============================================================================
// Output
// =============================================================================

/// Directory the rendered frames are written to.
pub const OUTPUT_DIR: &str = "frames";

/// Pixel scale of the PNG output.
pub const OUTPUT_SCALE: u32 = 2;
