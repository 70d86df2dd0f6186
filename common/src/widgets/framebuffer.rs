//! In-memory `DrawTarget` used by widget tests.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Row-major pixel buffer with inspection helpers.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(
        width: u32,
        height: u32,
        background: Rgb565,
    ) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    /// Number of pixels with exactly this color.
    pub fn count(
        &self,
        color: Rgb565,
    ) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Coordinates of every pixel with this color.
    pub fn points(
        &self,
        color: Rgb565,
    ) -> Vec<Point> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == color)
            .map(|(i, _)| Point::new((i as u32 % self.width) as i32, (i as u32 / self.width) as i32))
            .collect()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height {
                let idx = point.y as usize * self.width as usize + point.x as usize;
                self.pixels[idx] = color;
            }
        }
        Ok(())
    }
}
