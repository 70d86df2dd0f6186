//! Trend line chart.
//!
//! Plots a short series as a polyline with a dot on every sample, three
//! horizontal grid lines, the series extremes on the left and one label per
//! sample along the bottom. Scaling follows the series' own min/max; a flat
//! series is drawn through the vertical middle.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Polyline};
use embedded_graphics::text::Text;
use heapless::Vec;

use crate::colors::GAUGE_TRACK;
use crate::styles::{CAPTION_STYLE, CENTERED, LEFT_ALIGNED};

use super::primitives::format_number;

/// Most samples a chart plots; later samples are ignored.
pub const MAX_TREND_POINTS: usize = 24;

/// Width reserved left of the plot for the min/max labels.
const Y_AXIS_WIDTH: u32 = 30;

/// Height reserved below the plot for sample labels.
const X_AXIS_HEIGHT: u32 = 14;

const LINE_WIDTH: u32 = 2;
const DOT_DIAMETER: u32 = 5;

const GRID_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GAUGE_TRACK, 1);

/// One series to plot.
#[derive(Clone, Copy, Debug)]
pub struct TrendSeries<'a> {
    /// Label under each sample. Missing labels are left blank.
    pub labels: &'a [&'a str],
    pub values: &'a [f32],
    pub color: Rgb565,
}

/// Draw `series` into the `size` box at `top_left`.
///
/// Non-finite samples are skipped. Returns how many samples were plotted;
/// fewer than two draws only the grid.
pub fn draw_trend_chart<D>(
    display: &mut D,
    top_left: Point,
    size: Size,
    series: &TrendSeries<'_>,
) -> usize
where
    D: DrawTarget<Color = Rgb565>,
{
    if size.width <= Y_AXIS_WIDTH + 4 || size.height <= X_AXIS_HEIGHT + 4 {
        return 0;
    }

    let plot_x = top_left.x + Y_AXIS_WIDTH as i32;
    let plot_y = top_left.y + 4;
    let plot_width = (size.width - Y_AXIS_WIDTH - 4) as i32;
    let plot_height = (size.height - X_AXIS_HEIGHT - 4) as i32;
    let max_x = plot_x + plot_width - 1;
    let max_y = plot_y + plot_height - 1;

    for row in 0..3 {
        let y = plot_y + row * (plot_height - 1) / 2;
        Line::new(Point::new(plot_x, y), Point::new(max_x, y))
            .into_styled(GRID_STYLE)
            .draw(display)
            .ok();
    }

    let samples = series.values.len().min(MAX_TREND_POINTS);
    let (data_min, data_max) = series.values[..samples]
        .iter()
        .filter(|v| v.is_finite())
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let plotted = series.values[..samples].iter().filter(|v| v.is_finite()).count();
    if plotted < 2 {
        return 0;
    }

    let data_range = data_max - data_min;
    let y_scale = if data_range > 0.0 {
        (plot_height - 1) as f32 / data_range
    } else {
        0.0
    };
    let x_step = (plot_width - 1) as f32 / (samples - 1) as f32;

    let mut points: Vec<Point, MAX_TREND_POINTS> = Vec::new();
    for (i, &value) in series.values[..samples].iter().enumerate() {
        let x = (plot_x + (i as f32 * x_step) as i32).min(max_x);
        if let Some(label) = series.labels.get(i) {
            Text::with_text_style(label, Point::new(x, max_y + X_AXIS_HEIGHT as i32), CAPTION_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
        if !value.is_finite() {
            continue;
        }
        let y = if y_scale > 0.0 {
            (max_y - ((value - data_min) * y_scale) as i32).clamp(plot_y, max_y)
        } else {
            plot_y + (plot_height - 1) / 2
        };
        // Capacity matches the sample cap
        let _ = points.push(Point::new(x, y));
    }

    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(series.color, LINE_WIDTH))
        .draw(display)
        .ok();
    let dot = PrimitiveStyle::with_fill(series.color);
    for &point in &points {
        Circle::with_center(point, DOT_DIAMETER).into_styled(dot).draw(display).ok();
    }

    Text::with_text_style(&format_number(data_max), Point::new(top_left.x, plot_y + 7), CAPTION_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(&format_number(data_min), Point::new(top_left.x, max_y), CAPTION_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    points.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GAUGE_HIGH, SCREEN_BG, TEXT_MUTED};
    use crate::widgets::framebuffer::Framebuffer;

    const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

    fn chart(values: &[f32]) -> (Framebuffer, usize) {
        let mut fb = Framebuffer::new(200, 100, SCREEN_BG);
        let series = TrendSeries {
            labels: &DAYS,
            values,
            color: GAUGE_HIGH,
        };
        let plotted = draw_trend_chart(&mut fb, Point::zero(), Size::new(200, 100), &series);
        (fb, plotted)
    }

    #[test]
    fn test_plots_every_sample() {
        let (fb, plotted) = chart(&[65.0, 68.0, 70.0, 69.0, 67.0]);
        assert_eq!(plotted, 5);
        assert!(fb.count(GAUGE_HIGH) > 0);
        assert!(fb.count(GAUGE_TRACK) > 0, "grid lines");
        assert!(fb.count(TEXT_MUTED) > 0, "axis labels");
    }

    #[test]
    fn test_rising_series_climbs_left_to_right() {
        let (fb, _) = chart(&[0.0, 10.0]);
        let painted = fb.points(GAUGE_HIGH);
        let leftmost = painted.iter().min_by_key(|p| (p.x, p.y)).unwrap();
        let rightmost = painted.iter().max_by_key(|p| (p.x, -p.y)).unwrap();
        assert!(leftmost.y > rightmost.y);
    }

    #[test]
    fn test_flat_series_is_horizontal() {
        let (fb, plotted) = chart(&[50.0, 50.0, 50.0]);
        assert_eq!(plotted, 3);
        let painted = fb.points(GAUGE_HIGH);
        let top = painted.iter().map(|p| p.y).min().unwrap();
        let bottom = painted.iter().map(|p| p.y).max().unwrap();
        assert!(bottom - top <= DOT_DIAMETER as i32);
    }

    #[test]
    fn test_too_few_samples_draws_grid_only() {
        let (fb, plotted) = chart(&[42.0]);
        assert_eq!(plotted, 0);
        assert_eq!(fb.count(GAUGE_HIGH), 0);
        assert!(fb.count(GAUGE_TRACK) > 0);

        let (_, plotted) = chart(&[]);
        assert_eq!(plotted, 0);
    }

    #[test]
    fn test_non_finite_samples_are_skipped() {
        let (_, plotted) = chart(&[1.0, f32::NAN, 3.0, f32::INFINITY, 2.0]);
        assert_eq!(plotted, 3);

        let (fb, plotted) = chart(&[f32::NAN, 7.0]);
        assert_eq!(plotted, 0);
        assert_eq!(fb.count(GAUGE_HIGH), 0);
    }

    #[test]
    fn test_long_series_is_capped() {
        let values: std::vec::Vec<f32> = (0..40).map(|i| i as f32).collect();
        let (_, plotted) = chart(&values);
        assert_eq!(plotted, MAX_TREND_POINTS);
    }

    #[test]
    fn test_tiny_box_draws_nothing() {
        let mut fb = Framebuffer::new(20, 20, SCREEN_BG);
        let series = TrendSeries {
            labels: &DAYS,
            values: &[1.0, 2.0],
            color: GAUGE_HIGH,
        };
        assert_eq!(draw_trend_chart(&mut fb, Point::zero(), Size::new(20, 20), &series), 0);
        assert_eq!(fb.count(SCREEN_BG), 400);
    }
}
