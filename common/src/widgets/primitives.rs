//! Low-level drawing primitives shared across widgets.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::WHITE;
use crate::styles::{CAPTION_STYLE, CENTERED};

/// Corner radius of card backgrounds.
const CARD_CORNER_RADIUS: u32 = 8;

const CARD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Draw a white card with rounded corners.
pub fn draw_card_background<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if size.width < 2 * CARD_CORNER_RADIUS || size.height < 2 * CARD_CORNER_RADIUS {
        return;
    }
    RoundedRectangle::with_equal_corners(
        Rectangle::new(top_left, size),
        Size::new(CARD_CORNER_RADIUS, CARD_CORNER_RADIUS),
    )
    .into_styled(CARD_FILL)
    .draw(display)
    .ok();
}

/// Format a reading the way the mobile shell prints numbers.
///
/// Integers print without a fraction, everything else with at most two
/// decimals and no trailing zeros. Magnitudes too wide for the buffer fall
/// back to exponent form (`1.00e20`).
pub fn format_number(value: f32) -> String<16> {
    let mut out: String<16> = String::new();
    if write!(out, "{value:.2}").is_err() {
        out.clear();
        // At most 10 bytes for any finite or infinite f32
        let _ = write!(out, "{value:.2e}");
        return out;
    }
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    if out == "-0" {
        out.clear();
        let _ = out.push('0');
    }
    out
}

/// Draw the `"<min> - <max> <unit>"` caption centered on `anchor`.
pub fn draw_range_caption<D>(
    display: &mut D,
    anchor: Point,
    min_value: f32,
    max_value: f32,
    unit: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut caption: String<48> = String::new();
    let _ = write!(
        caption,
        "{} - {} {unit}",
        format_number(min_value),
        format_number(max_value)
    );
    Text::with_text_style(&caption, anchor, CAPTION_STYLE, CENTERED)
        .draw(display)
        .ok();
}
