//! Common types and constants for the curing-barn monitor.
//!
//! This crate contains the platform-agnostic gauge core shared by every
//! render target:
//!
//! - [`gauge`]: Reading validation, percentage mapping and arc geometry
//! - [`error`]: Validation errors raised by the gauge core
//! - [`colors`]: RGB565 color constants for gauges and cards
//! - [`thresholds`]: Percentage thresholds for the color tokens
//! - [`config`]: Gauge geometry configuration constants
//! - [`styles`]: Pre-computed text styles
//! - [`widgets`]: Gauge drawing functions generic over `DrawTarget`
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible outside of tests. It performs no
//! allocation; labels are formatted into `heapless::String`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod error;
pub mod gauge;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use error::GaugeError;
pub use gauge::{ColorToken, GaugeReading, GaugeSize, RingStyle, SemicircleStyle, ring_style, semicircle_style};
