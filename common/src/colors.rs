//! Color constants for the curing monitor.
//!
//! The mobile shell specifies its palette as 24-bit hex strings. Each constant
//! here is the RGB565 truncation of that value (`r >> 3`, `g >> 2`, `b >> 3`),
//! so the hex source is listed next to every custom color.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Card backgrounds and ring centers.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Gauge Token Colors
// =============================================================================

/// Low fill (`#FF4444`). Gauge at or below 33%.
pub const GAUGE_LOW: Rgb565 = Rgb565::new(31, 17, 8);

/// Medium fill (`#FFA500`). Gauge above 33% up to 66%.
pub const GAUGE_MEDIUM: Rgb565 = Rgb565::new(31, 41, 0);

/// High fill (`#4CAF50`). Gauge above 66%, also the default ring tint.
pub const GAUGE_HIGH: Rgb565 = Rgb565::new(9, 43, 10);

/// Background track behind every gauge arc (`#E0E0E0`).
pub const GAUGE_TRACK: Rgb565 = Rgb565::new(28, 56, 28);

/// Humidity trend line and the sensor health status (`#2196F3`).
pub const ACCENT_BLUE: Rgb565 = Rgb565::new(4, 37, 30);

// =============================================================================
// Text Colors
// =============================================================================

/// Titles and gauge values (`#333333`).
pub const TEXT_DARK: Rgb565 = Rgb565::new(6, 12, 6);

/// Units and secondary labels (`#666666`).
pub const TEXT_SECONDARY: Rgb565 = Rgb565::new(12, 25, 12);

/// Range captions below gauges (`#999999`).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(19, 38, 19);

// =============================================================================
// Shell Colors
// =============================================================================

/// Header bar (`#2E7D32`).
pub const HEADER_GREEN: Rgb565 = Rgb565::new(5, 31, 6);

/// Screen background behind cards (`#CFD5CF`).
pub const SCREEN_BG: Rgb565 = Rgb565::new(25, 53, 25);

/// Switch track when off (`#767577`).
pub const SWITCH_TRACK_OFF: Rgb565 = Rgb565::new(14, 29, 14);

/// Switch track when on (`#81B0FF`).
pub const SWITCH_TRACK_ON: Rgb565 = Rgb565::new(16, 44, 31);

/// Switch thumb when off (`#F4F3F4`).
pub const SWITCH_THUMB_OFF: Rgb565 = Rgb565::new(30, 60, 30);

/// Warning text under the manual override controls (`#E65100`).
pub const WARNING: Rgb565 = Rgb565::new(28, 20, 0);
