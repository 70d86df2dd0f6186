//! Header bar rendering.
//!
//! All fixed positions are `const` so the header needs no per-frame layout
//! arithmetic. `PrimitiveStyle::with_fill` is a const fn in embedded-graphics
//! 0.8, so the fill style is computed at compile time as well.

use curing_common::colors::HEADER_GREEN;
use curing_common::styles::{CENTERED, HEADER_STYLE};
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::config::{CENTER_X, HEADER_HEIGHT, SCREEN_WIDTH};

/// Baseline of the centered title text.
const HEADER_TITLE_POS: Point = Point::new(CENTER_X, (HEADER_HEIGHT / 2 + 6) as i32);

/// Top-left corner of header rectangle.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of header rectangle (full width).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(HEADER_GREEN);

/// Draw the green header bar with a centered title.
pub fn draw_header<D>(
    display: &mut D,
    title: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style(title, HEADER_TITLE_POS, HEADER_STYLE, CENTERED)
        .draw(display)
        .ok();
}
