//! Gauge and chart widgets for the curing monitor display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod chart;
mod gauge;
mod primitives;

#[cfg(test)]
pub(crate) mod framebuffer;

pub use chart::{MAX_TREND_POINTS, TrendSeries, draw_trend_chart};
pub use gauge::{
    GaugeCard,
    RingCard,
    draw_placeholder_gauge,
    draw_ring_gauge,
    draw_semicircle_gauge,
    ring_fraction,
    semicircle_footprint,
    visible_fraction,
};
pub use primitives::{draw_card_background, draw_range_caption, format_number};
