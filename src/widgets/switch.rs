//! Labeled on/off switch rows.

use curing_common::colors::{GAUGE_HIGH, SWITCH_THUMB_OFF, SWITCH_TRACK_OFF, SWITCH_TRACK_ON};
use curing_common::styles::{BODY_STYLE, LEFT_ALIGNED};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};

/// Outer size of the switch track.
pub const SWITCH_SIZE: Size = Size::new(36, 20);

const THUMB_DIAMETER: u32 = 16;
const THUMB_INSET: i32 = 2;

/// Draw `label` at `origin` and a switch right-aligned to `right_edge`.
pub fn draw_switch_row<D>(
    display: &mut D,
    origin: Point,
    right_edge: i32,
    label: &str,
    on: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(label, origin + Point::new(0, 14), BODY_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let track_pos = Point::new(right_edge - SWITCH_SIZE.width as i32, origin.y);
    let track_color = if on { SWITCH_TRACK_ON } else { SWITCH_TRACK_OFF };
    RoundedRectangle::with_equal_corners(
        Rectangle::new(track_pos, SWITCH_SIZE),
        Size::new(SWITCH_SIZE.height / 2, SWITCH_SIZE.height / 2),
    )
    .into_styled(PrimitiveStyle::with_fill(track_color))
    .draw(display)
    .ok();

    let thumb_x = if on {
        track_pos.x + SWITCH_SIZE.width as i32 - THUMB_DIAMETER as i32 - THUMB_INSET
    } else {
        track_pos.x + THUMB_INSET
    };
    let thumb_color = if on { GAUGE_HIGH } else { SWITCH_THUMB_OFF };
    Circle::new(Point::new(thumb_x, track_pos.y + THUMB_INSET), THUMB_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(thumb_color))
        .draw(display)
        .ok();
}
