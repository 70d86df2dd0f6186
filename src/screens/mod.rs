//! Page screens and the helpers they share.
//!
//! Each screen draws one [`Page`] for a [`ViewState`] and reports how every
//! gauge on it resolved, so callers (and tests) can see which channels fell
//! back to a placeholder.

mod barn_detail;
mod dashboard;

pub use barn_detail::draw_barn_detail;
use curing_common::styles::{BODY_STYLE, CAPTION_STYLE, LEFT_ALIGNED, TITLE_STYLE};
use curing_common::widgets::{
    GaugeCard,
    draw_card_background,
    draw_placeholder_gauge,
    draw_semicircle_gauge,
    draw_trend_chart,
};
use curing_common::{ColorToken, GaugeError, GaugeSize};
pub use dashboard::draw_dashboard;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::{CARD_MARGIN, CARD_TITLE_HEIGHT, FULL_CARD_WIDTH, TREND_CARD_HEIGHT, TREND_CHART_HEIGHT};
use crate::data::{Channel, ReadingSource, Trend};
use crate::pages::Page;
use crate::state::ViewState;

/// How a single gauge on a screen was resolved.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GaugeOutcome {
    pub title: &'static str,
    /// Token of the drawn gauge, or why a placeholder was drawn instead.
    pub result: Result<ColorToken, GaugeError>,
}

/// Draw the page selected in `state`.
pub fn draw_page<D, S>(
    display: &mut D,
    state: &ViewState,
    source: &S,
) -> Result<Vec<GaugeOutcome>, GaugeError>
where
    D: DrawTarget<Color = Rgb565>,
    S: ReadingSource + ?Sized,
{
    match state.page {
        Page::Dashboard => draw_dashboard(display, source),
        Page::BarnDetail => draw_barn_detail(display, state, source),
    }
}

/// Draw a white card with its title in the top-left corner.
pub(crate) fn draw_card<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    title: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card_background(display, top_left, size);
    if !title.is_empty() {
        Text::with_text_style(title, top_left + Point::new(12, 16), TITLE_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Draw label/value pairs two per row under a card title.
pub(crate) fn draw_fact_grid<D>(
    display: &mut D,
    card_pos: Point,
    facts: &[(&str, &str)],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let column_width = (FULL_CARD_WIDTH / 2) as i32;
    for (i, (label, value)) in facts.iter().enumerate() {
        let x = card_pos.x + 12 + (i as i32 % 2) * column_width;
        let y = card_pos.y + 36 + (i as i32 / 2) * 30;
        Text::with_text_style(label, Point::new(x, y), CAPTION_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(value, Point::new(x, y + 13), BODY_STYLE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Draw full-width trend cards stacked from `top`. Returns the y coordinate
/// below the last card.
pub(crate) fn draw_trend_cards<D>(
    display: &mut D,
    top: i32,
    trends: &[Trend],
) -> i32
where
    D: DrawTarget<Color = Rgb565>,
{
    let card_size = Size::new(FULL_CARD_WIDTH, TREND_CARD_HEIGHT);
    let chart_size = Size::new(FULL_CARD_WIDTH - 24, TREND_CHART_HEIGHT);
    let mut y = top;
    for trend in trends {
        let card_pos = Point::new(CARD_MARGIN as i32, y);
        draw_card(display, card_pos, card_size, trend.title);
        let plotted = draw_trend_chart(
            display,
            card_pos + Point::new(12, CARD_TITLE_HEIGHT as i32),
            chart_size,
            &trend.series(),
        );
        if plotted < 2 {
            log::warn!("{}: not enough samples to plot", trend.title);
        }
        y += (TREND_CARD_HEIGHT + CARD_MARGIN) as i32;
    }
    y
}

/// Validate a channel and draw it as a semicircular gauge, or as a
/// placeholder if the source handed over an unusable reading.
pub(crate) fn draw_channel_gauge<D>(
    display: &mut D,
    top_left: Point,
    channel: &Channel,
    size: GaugeSize,
) -> GaugeOutcome
where
    D: DrawTarget<Color = Rgb565>,
{
    let result = channel.reading().map(|reading| {
        let card = GaugeCard {
            title: channel.title,
            unit: channel.unit,
            reading,
        };
        draw_semicircle_gauge(display, top_left, &card, size).token
    });

    if let Err(err) = &result {
        log::warn!("{}: {err}, drawing placeholder", channel.title);
        draw_placeholder_gauge(display, top_left, channel.title, size);
    }

    GaugeOutcome {
        title: channel.title,
        result,
    }
}
