//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in embedded-graphics
//! 0.8, so every style used by the gauge widgets lives in read-only data
//! instead of being rebuilt for each card.
//!
//! Labels use the ISO 8859-1 fonts because unit strings contain `°`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        iso_8859_1::{FONT_6X10, FONT_7X13_BOLD, FONT_9X18_BOLD},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{TEXT_DARK, TEXT_MUTED, TEXT_SECONDARY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Gauge titles, values and captions.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Row labels.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References
// =============================================================================

/// Small label font, exposed for dynamic-color styles.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Bold card and gauge titles.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13_BOLD, TEXT_DARK);

/// Header bar title.
pub const HEADER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X18_BOLD, WHITE);

/// Large gauge value in the middle of the arc.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, TEXT_DARK);

/// Unit next to a value.
pub const UNIT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_SECONDARY);

/// Range caption below a gauge.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_MUTED);

/// Body text on cards.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_DARK);
