//! Semicircular gauge and progress ring widgets.
//!
//! Both widgets stack a colored progress arc on a gray track. The gauge core
//! hands over unclamped geometry; these functions are where it gets clipped to
//! the drawable range, the same way an SVG dash pattern never paints more than
//! its own path.

use core::fmt::Write;

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{GAUGE_HIGH, GAUGE_TRACK, TEXT_MUTED};
use crate::config::{
    DEFAULT_RING_SIZE,
    GAUGE_CAPTION_HEIGHT,
    GAUGE_HEIGHT_RATIO,
    GAUGE_STROKE_WIDTH,
    GAUGE_TITLE_HEIGHT,
    MAX_RING_SIZE,
    RING_START_DEG,
    RING_STROKE_WIDTH,
    RING_SWEEP_DEG,
    SEMICIRCLE_START_DEG,
    SEMICIRCLE_SWEEP_DEG,
};
use crate::gauge::{GaugeReading, GaugeSize, RingStyle, SemicircleStyle, ring_style, semicircle_style};
use crate::styles::{CAPTION_STYLE, CENTERED, TITLE_STYLE, UNIT_STYLE, VALUE_STYLE};

use super::primitives::{draw_range_caption, format_number};

const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GAUGE_TRACK, GAUGE_STROKE_WIDTH);

// =============================================================================
// Card Data
// =============================================================================

/// A titled reading drawn as a semicircular gauge.
#[derive(Clone, Copy, Debug)]
pub struct GaugeCard<'a> {
    pub title: &'a str,
    pub unit: &'a str,
    pub reading: GaugeReading,
}

/// A reading drawn as a full progress ring.
#[derive(Clone, Copy, Debug)]
pub struct RingCard<'a> {
    /// Second line under the percentage in the ring center.
    pub caption: &'a str,
    pub reading: GaugeReading,
    /// Outer diameter in pixels.
    pub size: u32,
    pub stroke_width: u32,
    /// Fixed progress color. `None` picks the threshold color.
    pub tint: Option<Rgb565>,
}

impl<'a> RingCard<'a> {
    /// Ring with the default size, stroke and green tint.
    pub const fn new(
        caption: &'a str,
        reading: GaugeReading,
    ) -> Self {
        Self {
            caption,
            reading,
            size: DEFAULT_RING_SIZE,
            stroke_width: RING_STROKE_WIDTH,
            tint: Some(GAUGE_HIGH),
        }
    }
}

// =============================================================================
// Geometry Helpers
// =============================================================================

/// Fraction of the arc actually painted for a dash offset, in `[0, 1]`.
#[inline]
pub fn visible_fraction(style: &SemicircleStyle) -> f32 {
    ((style.circumference - style.stroke_dashoffset) / style.circumference).clamp(0.0, 1.0)
}

/// Fraction of a ring painted for an unclamped fill percentage, in `[0, 1]`.
#[inline]
pub fn ring_fraction(style: &RingStyle) -> f32 { (style.percentage / 100.0).clamp(0.0, 1.0) }

/// Total footprint of a semicircular gauge including title and caption.
pub fn semicircle_footprint(size: GaugeSize) -> Size {
    let side = round_px(size.get());
    let arc_height = round_px(size.get() * GAUGE_HEIGHT_RATIO);
    Size::new(side, GAUGE_TITLE_HEIGHT + arc_height + GAUGE_CAPTION_HEIGHT)
}

#[inline]
fn round_px(value: f32) -> u32 { micromath::F32(value).round().0.max(0.0) as u32 }

/// `"<percentage>%"` for the ring center.
fn percent_label(percentage: f32) -> String<20> {
    let mut label: String<20> = String::new();
    // format_number never exceeds 16 bytes
    let _ = write!(label, "{}%", format_number(percentage));
    label
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw a semicircular gauge with its title, value and range caption.
///
/// Returns the computed style so callers can reuse the color (e.g. for a
/// status badge next to the card).
pub fn draw_semicircle_gauge<D>(
    display: &mut D,
    top_left: Point,
    card: &GaugeCard<'_>,
    size: GaugeSize,
) -> SemicircleStyle
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = semicircle_style(&card.reading, size);

    let half = size.get() / 2.0;
    let center_x = top_left.x + round_px(half) as i32;
    let arc_top = top_left.y + GAUGE_TITLE_HEIGHT as i32;
    let center = Point::new(center_x, arc_top + round_px(half) as i32);
    let diameter = round_px(2.0 * style.radius);

    Text::with_text_style(
        card.title,
        Point::new(center_x, top_left.y + 13),
        TITLE_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();

    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(SEMICIRCLE_START_DEG),
        Angle::from_degrees(SEMICIRCLE_SWEEP_DEG),
    )
    .into_styled(TRACK_STYLE)
    .draw(display)
    .ok();

    let sweep = visible_fraction(&style) * SEMICIRCLE_SWEEP_DEG;
    if sweep > 0.0 {
        Arc::with_center(
            center,
            diameter,
            Angle::from_degrees(SEMICIRCLE_START_DEG),
            Angle::from_degrees(sweep),
        )
        .into_styled(PrimitiveStyle::with_stroke(style.color, GAUGE_STROKE_WIDTH))
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        &format_number(card.reading.value()),
        Point::new(center_x, center.y - 14),
        VALUE_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(card.unit, Point::new(center_x, center.y - 2), UNIT_STYLE, CENTERED)
        .draw(display)
        .ok();

    let caption_y = arc_top + round_px(size.get() * GAUGE_HEIGHT_RATIO) as i32 + 10;
    draw_range_caption(
        display,
        Point::new(center_x, caption_y),
        card.reading.min_value(),
        card.reading.max_value(),
        card.unit,
    );

    style
}

/// Draw a progress ring starting at 12 o'clock with the fill percentage and
/// caption in its center.
pub fn draw_ring_gauge<D>(
    display: &mut D,
    top_left: Point,
    card: &RingCard<'_>,
) -> RingStyle
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = ring_style(&card.reading);
    let size = card.size.min(MAX_RING_SIZE);
    let half = (size / 2) as i32;
    let center = top_left + Point::new(half, half);
    let diameter = size.saturating_sub(card.stroke_width);

    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(GAUGE_TRACK, card.stroke_width))
        .draw(display)
        .ok();

    let sweep = ring_fraction(&style) * RING_SWEEP_DEG;
    if sweep > 0.0 {
        let tint = card.tint.unwrap_or(style.token.color());
        Arc::with_center(
            center,
            diameter,
            Angle::from_degrees(RING_START_DEG),
            Angle::from_degrees(sweep),
        )
        .into_styled(PrimitiveStyle::with_stroke(tint, card.stroke_width))
        .draw(display)
        .ok();
    }

    Text::with_text_style(&percent_label(style.percentage), center, VALUE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(card.caption, center + Point::new(0, 14), UNIT_STYLE, CENTERED)
        .draw(display)
        .ok();

    style
}

/// Draw a stand-in for a gauge whose input was rejected.
pub fn draw_placeholder_gauge<D>(
    display: &mut D,
    top_left: Point,
    title: &str,
    size: GaugeSize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let footprint = semicircle_footprint(size);
    let center_x = top_left.x + (footprint.width / 2) as i32;

    Text::with_text_style(title, Point::new(center_x, top_left.y + 13), TITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    let inset = GAUGE_STROKE_WIDTH as i32;
    let body = Rectangle::new(
        top_left + Point::new(inset, GAUGE_TITLE_HEIGHT as i32),
        Size::new(
            footprint.width.saturating_sub(2 * GAUGE_STROKE_WIDTH),
            footprint.height.saturating_sub(GAUGE_TITLE_HEIGHT + GAUGE_CAPTION_HEIGHT),
        ),
    );
    body.into_styled(PrimitiveStyle::with_stroke(TEXT_MUTED, 1))
        .draw(display)
        .ok();

    Text::with_text_style("--", body.center(), VALUE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(
        "NO DATA",
        Point::new(center_x, top_left.y + footprint.height as i32 - 4),
        CAPTION_STYLE,
        CENTERED,
    )
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GAUGE_LOW, GAUGE_MEDIUM, SCREEN_BG};
    use crate::widgets::framebuffer::Framebuffer;

    fn card(value: f32) -> GaugeCard<'static> {
        GaugeCard {
            title: "Temperature",
            unit: "°C",
            reading: GaugeReading::new(value, 0.0, 100.0).unwrap(),
        }
    }

    fn draw(value: f32) -> (Framebuffer, SemicircleStyle) {
        let mut fb = Framebuffer::new(160, 160, SCREEN_BG);
        let style = draw_semicircle_gauge(&mut fb, Point::zero(), &card(value), GaugeSize::default());
        (fb, style)
    }

    #[test]
    fn test_visible_fraction_clips() {
        assert_eq!(visible_fraction(&draw(150.0).1), 1.0);
        assert_eq!(visible_fraction(&draw(-10.0).1), 0.0);
        assert!((visible_fraction(&draw(68.0).1) - 0.68).abs() < 1e-3);
    }

    #[test]
    fn test_ring_fraction_clips() {
        let r = |v| ring_style(&GaugeReading::new(v, 0.0, 100.0).unwrap());
        assert_eq!(ring_fraction(&r(130.0)), 1.0);
        assert_eq!(ring_fraction(&r(-5.0)), 0.0);
        assert!((ring_fraction(&r(60.0)) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_footprint() {
        assert_eq!(semicircle_footprint(GaugeSize::default()), Size::new(140, 20 + 98 + 14));
    }

    #[test]
    fn test_high_gauge_draws_green_progress() {
        let (fb, style) = draw(68.0);
        assert_eq!(style.color, GAUGE_HIGH);
        assert!(fb.count(GAUGE_HIGH) > 0, "progress arc should be painted");
        assert_eq!(fb.count(GAUGE_LOW), 0);
        assert_eq!(fb.count(GAUGE_MEDIUM), 0);
        assert!(fb.count(GAUGE_TRACK) > 0, "track remains visible past the fill");
    }

    #[test]
    fn test_empty_gauge_draws_only_track() {
        let (fb, style) = draw(0.0);
        assert_eq!(style.color, GAUGE_LOW);
        assert_eq!(fb.count(GAUGE_LOW), 0);
        assert!(fb.count(GAUGE_TRACK) > 0);
    }

    #[test]
    fn test_overflow_paints_same_as_full() {
        let (full, _) = draw(100.0);
        let (over, _) = draw(150.0);
        assert_eq!(full.count(GAUGE_HIGH), over.count(GAUGE_HIGH));
    }

    #[test]
    fn test_quarter_gauge_stays_left_of_center() {
        let (fb, _) = draw(25.0);
        let painted = fb.points(GAUGE_LOW);
        assert!(!painted.is_empty());
        assert!(painted.iter().all(|p| p.x < 70), "25% fill must not cross the top of the arc");
    }

    #[test]
    fn test_ring_uses_tint_or_threshold() {
        let reading = GaugeReading::new(60.0, 0.0, 100.0).unwrap();

        let mut fb = Framebuffer::new(130, 130, SCREEN_BG);
        let style = draw_ring_gauge(&mut fb, Point::zero(), &RingCard::new("Yellowing", reading));
        assert_eq!(style.token, crate::gauge::ColorToken::Medium);
        assert!(fb.count(GAUGE_HIGH) > 0);
        assert_eq!(fb.count(GAUGE_MEDIUM), 0);

        let mut fb = Framebuffer::new(130, 130, SCREEN_BG);
        let card = RingCard {
            tint: None,
            ..RingCard::new("Yellowing", reading)
        };
        draw_ring_gauge(&mut fb, Point::zero(), &card);
        assert!(fb.count(GAUGE_MEDIUM) > 0);
        assert_eq!(fb.count(GAUGE_HIGH), 0);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(60.0).as_str(), "60%");
        assert_eq!(percent_label(12.5).as_str(), "12.5%");
        assert_eq!(percent_label(1.0e20).as_str(), "1.00e20%");
    }

    #[test]
    fn test_huge_ring_value_keeps_label() {
        let reading = GaugeReading::new(1.0e18, 0.0, 100.0).unwrap();
        let mut fb = Framebuffer::new(130, 130, SCREEN_BG);
        let style = draw_ring_gauge(&mut fb, Point::zero(), &RingCard::new("Yellowing", reading));
        assert_eq!(ring_fraction(&style), 1.0);
        assert!(fb.count(crate::colors::TEXT_DARK) > 0, "percentage label is drawn");
    }

    #[test]
    fn test_largest_gauge_draws_without_overflow() {
        let size = GaugeSize::new(crate::config::MAX_GAUGE_SIZE).unwrap();
        assert_eq!(semicircle_footprint(size), Size::new(1024, 20 + 717 + 14));

        let mut fb = Framebuffer::new(64, 64, SCREEN_BG);
        let style = draw_semicircle_gauge(&mut fb, Point::zero(), &card(68.0), size);
        assert_eq!(style.color, GAUGE_HIGH);
        draw_placeholder_gauge(&mut fb, Point::zero(), "Humidity", size);
    }

    #[test]
    fn test_oversized_ring_is_clamped() {
        let reading = GaugeReading::new(60.0, 0.0, 100.0).unwrap();
        let card = RingCard {
            size: u32::MAX,
            ..RingCard::new("Yellowing", reading)
        };
        let mut fb = Framebuffer::new(64, 64, SCREEN_BG);
        let style = draw_ring_gauge(&mut fb, Point::zero(), &card);
        assert_eq!(style.token, crate::gauge::ColorToken::Medium);
    }

    #[test]
    fn test_placeholder_has_no_progress() {
        let mut fb = Framebuffer::new(160, 160, SCREEN_BG);
        draw_placeholder_gauge(&mut fb, Point::zero(), "Humidity", GaugeSize::default());
        assert_eq!(fb.count(GAUGE_LOW) + fb.count(GAUGE_MEDIUM) + fb.count(GAUGE_HIGH), 0);
        assert!(fb.count(TEXT_MUTED) > 0);
    }
}
