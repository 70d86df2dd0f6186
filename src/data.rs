//! Reading sources for the monitor pages.
//!
//! Screens never hold literal readings themselves; they ask a [`ReadingSource`]
//! for the channels of the page being drawn. [`MockBarn`] serves the fixed
//! values of the mobile app until a telemetry feed exists.

use curing_common::colors::{ACCENT_BLUE, GAUGE_HIGH};
use curing_common::widgets::TrendSeries;
use curing_common::{GaugeError, GaugeReading};
use embedded_graphics::pixelcolor::Rgb565;

use crate::pages::Page;

/// One gauge channel as reported by a source, before validation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Channel {
    pub title: &'static str,
    pub unit: &'static str,
    pub value: f32,
    pub min_value: f32,
    pub max_value: f32,
}

impl Channel {
    /// Channel on a 0-100 scale.
    pub const fn percent_scale(
        title: &'static str,
        unit: &'static str,
        value: f32,
    ) -> Self {
        Self {
            title,
            unit,
            value,
            min_value: 0.0,
            max_value: 100.0,
        }
    }

    /// Validate the channel into a gauge reading.
    pub fn reading(&self) -> Result<GaugeReading, GaugeError> { GaugeReading::new(self.value, self.min_value, self.max_value) }
}

/// Curing phase progress shown in the dashboard ring.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CuringProgress {
    pub phase: &'static str,
    /// Progress through the current phase, 0-100.
    pub percent: f32,
    pub hours_remaining: u32,
}

/// Facts in the dashboard's barn summary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BarnSummary {
    pub status: &'static str,
    pub location: &'static str,
    /// Batch number within the season.
    pub batch: &'static str,
    pub leaf_type: &'static str,
}

/// Facts in the barn detail overview.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BarnOverview {
    pub status: &'static str,
    pub phase: &'static str,
    pub leaf_type: &'static str,
    pub batch_size: &'static str,
}

/// A titled history series for a trend card.
#[derive(Clone, PartialEq, Debug)]
pub struct Trend {
    pub title: &'static str,
    pub labels: &'static [&'static str],
    pub values: Vec<f32>,
    pub color: Rgb565,
}

impl Trend {
    pub fn series(&self) -> TrendSeries<'_> {
        TrendSeries {
            labels: self.labels,
            values: &self.values,
            color: self.color,
        }
    }
}

/// One entry of the system health row.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HealthItem {
    pub label: &'static str,
    pub status: &'static str,
    pub color: Rgb565,
}

/// Supplies everything the pages display.
pub trait ReadingSource {
    /// Gauge channels for a page, in display order.
    fn channels(
        &self,
        page: Page,
    ) -> Vec<Channel>;

    fn curing_progress(&self) -> CuringProgress;

    fn summary(&self) -> BarnSummary;

    fn overview(&self) -> BarnOverview;

    /// Trend cards for a page, in display order.
    fn trends(
        &self,
        page: Page,
    ) -> Vec<Trend>;

    fn system_health(&self) -> Vec<HealthItem>;
}

/// Fixed readings matching the mobile app's demo barn (Plot 7A).
#[derive(Clone, Copy, Default, Debug)]
pub struct MockBarn;

const TEMPERATURE: Channel = Channel::percent_scale("Temperature", "°C", 68.0);
const HUMIDITY: Channel = Channel::percent_scale("Humidity", "%", 65.0);
const AIR_FLOW: Channel = Channel::percent_scale("Air Flow", "%", 75.0);
const BATTERY: Channel = Channel::percent_scale("Battery", "%", 85.0);

const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];
const DAY_HOURS: [&str; 5] = ["00:00", "06:00", "12:00", "18:00", "24:00"];

impl ReadingSource for MockBarn {
    fn channels(
        &self,
        page: Page,
    ) -> Vec<Channel> {
        match page {
            Page::Dashboard => vec![TEMPERATURE, HUMIDITY, AIR_FLOW, BATTERY],
            Page::BarnDetail => vec![TEMPERATURE, HUMIDITY, AIR_FLOW],
        }
    }

    fn curing_progress(&self) -> CuringProgress {
        CuringProgress {
            phase: "Yellowing",
            percent: 60.0,
            hours_remaining: 12,
        }
    }

    fn summary(&self) -> BarnSummary {
        BarnSummary {
            status: "Active",
            location: "Plot 7A, Murehwa",
            batch: "03",
            leaf_type: "Virginia",
        }
    }

    fn overview(&self) -> BarnOverview {
        BarnOverview {
            status: "Active Curing",
            phase: "Yellowing (Day 3)",
            leaf_type: "Virginia Gold",
            batch_size: "2.5 tons",
        }
    }

    fn trends(
        &self,
        page: Page,
    ) -> Vec<Trend> {
        match page {
            Page::Dashboard => vec![
                Trend {
                    title: "Temperature Trend",
                    labels: &WEEKDAYS,
                    values: vec![65.0, 68.0, 70.0, 69.0, 67.0],
                    color: GAUGE_HIGH,
                },
                Trend {
                    title: "Humidity Trend",
                    labels: &WEEKDAYS,
                    values: vec![60.0, 62.0, 63.0, 65.0, 64.0],
                    color: ACCENT_BLUE,
                },
            ],
            Page::BarnDetail => vec![
                Trend {
                    title: "24-Hour Temperature Trend",
                    labels: &DAY_HOURS,
                    values: vec![62.0, 65.0, 68.0, 70.0, 67.0],
                    color: GAUGE_HIGH,
                },
                Trend {
                    title: "24-Hour Humidity Trend",
                    labels: &DAY_HOURS,
                    values: vec![70.0, 68.0, 65.0, 62.0, 64.0],
                    color: ACCENT_BLUE,
                },
            ],
        }
    }

    fn system_health(&self) -> Vec<HealthItem> {
        vec![
            HealthItem {
                label: "Solar",
                status: "Optimal",
                color: GAUGE_HIGH,
            },
            HealthItem {
                label: "Sensors",
                status: "All Online",
                color: ACCENT_BLUE,
            },
        ]
    }
}
