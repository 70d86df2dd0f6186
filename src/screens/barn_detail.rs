//! Barn detail page: overview facts, current conditions, the 24-hour trend
//! cards and the manual override switches.

use curing_common::colors::WARNING;
use curing_common::styles::{LABEL_FONT, LEFT_ALIGNED};
use curing_common::widgets::semicircle_footprint;
use curing_common::{GaugeError, GaugeSize};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use super::{GaugeOutcome, draw_card, draw_channel_gauge, draw_fact_grid, draw_trend_cards};
use crate::config::{CARD_MARGIN, CARD_TITLE_HEIGHT, DETAIL_GAUGE_SIZE, FULL_CARD_WIDTH, HEADER_HEIGHT};
use crate::data::ReadingSource;
use crate::pages::Page;
use crate::state::ViewState;
use crate::widgets::{SWITCH_SIZE, draw_header, draw_switch_row};

const OVERVIEW_POS: Point = Point::new(CARD_MARGIN as i32, (HEADER_HEIGHT + CARD_MARGIN) as i32);
const OVERVIEW_SIZE: Size = Size::new(FULL_CARD_WIDTH, 96);

const CONDITIONS_POS: Point = Point::new(
    CARD_MARGIN as i32,
    OVERVIEW_POS.y + OVERVIEW_SIZE.height as i32 + CARD_MARGIN as i32,
);

/// Left inset of the first condition gauge inside its card.
const CONDITION_INSET: i32 = 11;

/// Horizontal step between the three condition gauges.
const CONDITION_STEP: i32 = 111;

const ROW_HEIGHT: i32 = 28;

/// Right edge of switches inside the controls card.
const SWITCH_RIGHT: i32 = (CARD_MARGIN + FULL_CARD_WIDTH) as i32 - 12;

const WARNING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, WARNING);

const WARNING_LINES: [&str; 2] = ["Manual mode overrides automatic curing", "controls. Monitor conditions closely."];

/// Draw the barn detail page.
pub fn draw_barn_detail<D, S>(
    display: &mut D,
    state: &ViewState,
    source: &S,
) -> Result<Vec<GaugeOutcome>, GaugeError>
where
    D: DrawTarget<Color = Rgb565>,
    S: ReadingSource + ?Sized,
{
    let gauge_size = GaugeSize::new(DETAIL_GAUGE_SIZE)?;

    draw_header(display, Page::BarnDetail.title());

    // Overview: 2x2 label/value grid
    draw_card(display, OVERVIEW_POS, OVERVIEW_SIZE, "Barn Overview");
    let overview = source.overview();
    draw_fact_grid(
        display,
        OVERVIEW_POS,
        &[
            ("Status", overview.status),
            ("Current Phase", overview.phase),
            ("Leaf Type", overview.leaf_type),
            ("Batch Size", overview.batch_size),
        ],
    );

    // Current conditions: gauges in one row
    let footprint = semicircle_footprint(gauge_size);
    let conditions_size = Size::new(FULL_CARD_WIDTH, CARD_TITLE_HEIGHT + footprint.height + CARD_MARGIN);
    draw_card(display, CONDITIONS_POS, conditions_size, "Current Conditions");

    let mut outcomes = Vec::new();
    for (i, channel) in source.channels(Page::BarnDetail).iter().enumerate() {
        let top_left = CONDITIONS_POS + Point::new(CONDITION_INSET + i as i32 * CONDITION_STEP, CARD_TITLE_HEIGHT as i32);
        outcomes.push(draw_channel_gauge(display, top_left, channel, gauge_size));
    }

    // Trends
    let trends_top = CONDITIONS_POS.y + (conditions_size.height + CARD_MARGIN) as i32;
    let controls_top = draw_trend_cards(display, trends_top, &source.trends(Page::BarnDetail));

    // Manual override controls
    let controls_pos = Point::new(CARD_MARGIN as i32, controls_top);
    let rows = if state.shows_override_controls() { 4 } else { 1 };
    let controls_size = Size::new(
        FULL_CARD_WIDTH,
        CARD_TITLE_HEIGHT + (rows * ROW_HEIGHT) as u32 + CARD_MARGIN,
    );
    draw_card(display, controls_pos, controls_size, "Manual Override Controls");

    let row_origin = controls_pos + Point::new(12, CARD_TITLE_HEIGHT as i32 + (ROW_HEIGHT - SWITCH_SIZE.height as i32) / 2);
    draw_switch_row(display, row_origin, SWITCH_RIGHT, "Manual Mode", state.manual_mode);

    if state.shows_override_controls() {
        draw_switch_row(
            display,
            row_origin + Point::new(0, ROW_HEIGHT),
            SWITCH_RIGHT,
            "Ventilation Override",
            state.ventilation_override,
        );
        for (i, line) in WARNING_LINES.iter().enumerate() {
            let y = row_origin.y + 2 * ROW_HEIGHT + 14 + 13 * i as i32;
            Text::with_text_style(line, Point::new(row_origin.x, y), WARNING_STYLE, LEFT_ALIGNED)
                .draw(display)
                .ok();
        }
    }

    Ok(outcomes)
}
