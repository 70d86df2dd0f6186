//! Dashboard page: barn summary with facts, curing progress ring and system
//! health, a 2x2 grid of semicircular gauges, then the weekly trend cards.

use core::fmt::Write;

use curing_common::styles::{BODY_STYLE, CENTERED, LEFT_ALIGNED, TITLE_STYLE, UNIT_STYLE};
use curing_common::widgets::{RingCard, draw_ring_gauge, semicircle_footprint};
use curing_common::{GaugeError, GaugeReading, GaugeSize};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use super::{GaugeOutcome, draw_card, draw_channel_gauge, draw_fact_grid, draw_trend_cards};
use crate::config::{
    CARD_MARGIN,
    DASHBOARD_GAUGE_SIZE,
    FULL_CARD_WIDTH,
    GAUGE_CARD_PADDING,
    HALF_CARD_WIDTH,
    HEADER_HEIGHT,
    PROGRESS_RING_SIZE,
    PROGRESS_RING_STROKE,
};
use crate::data::ReadingSource;
use crate::pages::Page;
use crate::widgets::draw_header;

const SUMMARY_POS: Point = Point::new(CARD_MARGIN as i32, (HEADER_HEIGHT + CARD_MARGIN) as i32);
const SUMMARY_SIZE: Size = Size::new(FULL_CARD_WIDTH, 276);

/// Baseline of the "Curing Progress Tracker" heading, below the fact grid.
const TRACKER_Y: i32 = SUMMARY_POS.y + 104;

/// Ring sits in the left part of the summary card.
const RING_POS: Point = Point::new(SUMMARY_POS.x + 12, TRACKER_Y + 8);

/// Left edge of the text column right of the ring.
const INFO_X: i32 = RING_POS.x + PROGRESS_RING_SIZE as i32 + 20;

/// Baseline of the "System Health" heading, below the ring.
const HEALTH_Y: i32 = RING_POS.y + PROGRESS_RING_SIZE as i32 + 22;

const GRID_TOP: i32 = SUMMARY_POS.y + SUMMARY_SIZE.height as i32 + CARD_MARGIN as i32;

const GRID_COLUMNS: usize = 2;

/// Draw the dashboard page.
pub fn draw_dashboard<D, S>(
    display: &mut D,
    source: &S,
) -> Result<Vec<GaugeOutcome>, GaugeError>
where
    D: DrawTarget<Color = Rgb565>,
    S: ReadingSource + ?Sized,
{
    let gauge_size = GaugeSize::new(DASHBOARD_GAUGE_SIZE)?;
    let mut outcomes = Vec::new();

    draw_header(display, Page::Dashboard.title());

    // Barn summary: facts
    draw_card(display, SUMMARY_POS, SUMMARY_SIZE, "Barn Summary");
    let summary = source.summary();
    draw_fact_grid(
        display,
        SUMMARY_POS,
        &[
            ("Status", summary.status),
            ("Location", summary.location),
            ("Batch", summary.batch),
            ("Leaf Type", summary.leaf_type),
        ],
    );

    // Barn summary: progress ring
    Text::with_text_style(
        "Curing Progress Tracker",
        Point::new(SUMMARY_POS.x + 12, TRACKER_Y),
        TITLE_STYLE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    let progress = source.curing_progress();
    let ring = GaugeReading::with_default_min(progress.percent, 100.0).map(|reading| {
        let card = RingCard {
            size: PROGRESS_RING_SIZE,
            stroke_width: PROGRESS_RING_STROKE,
            ..RingCard::new(progress.phase, reading)
        };
        draw_ring_gauge(display, RING_POS, &card).token
    });
    if let Err(err) = &ring {
        log::warn!("curing progress: {err}");
    }
    outcomes.push(GaugeOutcome {
        title: "Curing Progress",
        result: ring,
    });

    let mut phase: String<48> = String::new();
    let _ = write!(phase, "Phase: {}", progress.phase);
    let mut remaining: String<48> = String::new();
    let _ = write!(remaining, "Time Remaining: {} hrs", progress.hours_remaining);
    for (i, line) in [phase.as_str(), remaining.as_str()].iter().enumerate() {
        Text::with_text_style(line, Point::new(INFO_X, RING_POS.y + 44 + 18 * i as i32), BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    // Barn summary: system health, evenly spaced
    Text::with_text_style("System Health", Point::new(SUMMARY_POS.x + 12, HEALTH_Y), TITLE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let health = source.system_health();
    let slot = FULL_CARD_WIDTH as i32 / health.len().max(1) as i32;
    for (i, item) in health.iter().enumerate() {
        let x = SUMMARY_POS.x + slot * i as i32 + slot / 2;
        Text::with_text_style(item.label, Point::new(x, HEALTH_Y + 18), UNIT_STYLE, CENTERED)
            .draw(display)
            .ok();
        let status_style = MonoTextStyle::new(TITLE_STYLE.font, item.color);
        Text::with_text_style(item.status, Point::new(x, HEALTH_Y + 34), status_style, CENTERED)
            .draw(display)
            .ok();
    }

    // Gauge grid
    let footprint = semicircle_footprint(gauge_size);
    let card_size = Size::new(HALF_CARD_WIDTH, footprint.height + 2 * GAUGE_CARD_PADDING);
    let inset = Point::new(
        (HALF_CARD_WIDTH.saturating_sub(footprint.width) / 2) as i32,
        GAUGE_CARD_PADDING as i32,
    );

    let channels = source.channels(Page::Dashboard);
    for (i, channel) in channels.iter().enumerate() {
        let col = (i % GRID_COLUMNS) as i32;
        let row = (i / GRID_COLUMNS) as i32;
        let card_pos = Point::new(
            CARD_MARGIN as i32 + col * (HALF_CARD_WIDTH + CARD_MARGIN) as i32,
            GRID_TOP + row * (card_size.height + CARD_MARGIN) as i32,
        );
        draw_card(display, card_pos, card_size, "");
        outcomes.push(draw_channel_gauge(display, card_pos + inset, channel, gauge_size));
    }

    // Trends
    let rows = channels.len().div_ceil(GRID_COLUMNS) as i32;
    let trends_top = GRID_TOP + rows * (card_size.height + CARD_MARGIN) as i32;
    draw_trend_cards(display, trends_top, &source.trends(Page::Dashboard));

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use curing_common::ColorToken;
    use curing_common::colors::{ACCENT_BLUE, GAUGE_HIGH, HEADER_GREEN};

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TREND_CARD_HEIGHT};
    use crate::data::MockBarn;
    use crate::screens::test_support::{BrokenHumidity, display};

    #[test]
    fn test_dashboard_tokens() {
        let mut d = display();
        let outcomes = draw_dashboard(&mut d, &MockBarn).unwrap();
        let tokens: Vec<_> = outcomes.iter().map(|o| (o.title, o.result)).collect();
        assert_eq!(
            tokens,
            [
                ("Curing Progress", Ok(ColorToken::Medium)),
                ("Temperature", Ok(ColorToken::High)),
                ("Humidity", Ok(ColorToken::Medium)),
                ("Air Flow", Ok(ColorToken::High)),
                ("Battery", Ok(ColorToken::High)),
            ]
        );
    }

    #[test]
    fn test_dashboard_paints_header_and_progress() {
        let mut d = display();
        draw_dashboard(&mut d, &MockBarn).unwrap();
        assert_eq!(d.get_pixel(Point::new(2, 2)), HEADER_GREEN);

        let green = (0..SCREEN_HEIGHT as i32)
            .flat_map(|y| (0..SCREEN_WIDTH as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| d.get_pixel(p) == GAUGE_HIGH)
            .count();
        assert!(green > 0, "high gauges should paint green arcs");
    }

    #[test]
    fn test_page_fits_on_screen() {
        let footprint = semicircle_footprint(GaugeSize::new(DASHBOARD_GAUGE_SIZE).unwrap());
        assert_eq!(footprint, Size::new(120, 20 + 84 + 14));
        assert!(footprint.width <= HALF_CARD_WIDTH);

        let card_height = footprint.height + 2 * GAUGE_CARD_PADDING;
        let trends_top = GRID_TOP as u32 + 2 * (card_height + CARD_MARGIN);
        let bottom = trends_top + 2 * (TREND_CARD_HEIGHT + CARD_MARGIN);
        assert!(bottom <= SCREEN_HEIGHT);
    }

    #[test]
    fn test_summary_sections_fit_card() {
        let card_bottom = SUMMARY_POS.y + SUMMARY_SIZE.height as i32;
        assert!(TRACKER_Y > SUMMARY_POS.y + 36 + 30 + 13, "tracker below the fact grid");
        assert!(HEALTH_Y + 34 < card_bottom, "health row inside the card");
    }

    #[test]
    fn test_health_and_trends_drawn() {
        let mut d = display();
        draw_dashboard(&mut d, &MockBarn).unwrap();
        let blue = (GRID_TOP..SCREEN_HEIGHT as i32)
            .flat_map(|y| (0..SCREEN_WIDTH as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| d.get_pixel(p) == ACCENT_BLUE)
            .count();
        assert!(blue > 0, "humidity trend line");

        let health_blue = (HEALTH_Y..HEALTH_Y + 36)
            .flat_map(|y| (0..SCREEN_WIDTH as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| d.get_pixel(p) == ACCENT_BLUE)
            .count();
        assert!(health_blue > 0, "sensor status text");
    }

    #[test]
    fn test_broken_channel_falls_back() {
        let mut d = display();
        let outcomes = draw_dashboard(&mut d, &BrokenHumidity).unwrap();
        assert_eq!(outcomes.len(), 5, "placeholder still counts as a gauge slot");
        let humidity = outcomes.iter().find(|o| o.title == "Humidity").unwrap();
        assert!(humidity.result.is_err());
        let temperature = outcomes.iter().find(|o| o.title == "Temperature").unwrap();
        assert_eq!(temperature.result, Ok(ColorToken::High));
    }
}
