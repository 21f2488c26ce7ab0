//! Off-screen RGBA raster surface with PNG export.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::core::{FrameDescription, Point, RenderConfig, RevealError, RevealResult, Rgb};
use crate::driver::Surface;

/// A pixel buffer the frame pump can draw into
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    presented: u64,
}

impl RasterSurface {
    /// Creates a surface of the given size, filled with black
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])),
            presented: 0,
        }
    }

    /// Creates a surface sized by a render config
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Width in pixels
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Frames presented so far
    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// The underlying image
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Raw RGBA bytes, row-major
    #[must_use]
    pub fn as_rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Colour at a pixel, if in bounds
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Rgb(p[0], p[1], p[2]))
    }

    /// Number of pixels of exactly `color`
    #[must_use]
    pub fn count_color(&self, color: Rgb) -> usize {
        let rgba = color.to_rgba();
        self.image.pixels().filter(|p| p.0 == rgba).count()
    }

    /// Encodes the current contents as PNG
    pub fn encode_png(&self) -> RevealResult<Vec<u8>> {
        let mut output = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut output, self.width(), self.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_compression(png::Compression::Fast);

            let mut writer = encoder
                .write_header()
                .map_err(|e| RevealError::encode(format!("Failed to write PNG header: {e}")))?;

            writer
                .write_image_data(self.image.as_raw())
                .map_err(|e| RevealError::encode(format!("Failed to write PNG data: {e}")))?;
        }

        Ok(output)
    }

    /// Writes the current contents to a PNG file
    pub fn save_png(&self, path: &Path) -> RevealResult<()> {
        let data = self.encode_png()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Clipped pixel range covering `[min, max]` along one axis
    fn span(min: f32, max: f32, limit: u32) -> std::ops::Range<u32> {
        let lo = min.floor().max(0.0);
        let hi = (max.ceil() + 1.0).min(limit as f32);
        if hi <= lo {
            return 0..0;
        }
        lo as u32..hi as u32
    }

    fn fill_where<F>(&mut self, min: Point, max: Point, color: Rgb, inside: F)
    where
        F: Fn(Point) -> bool,
    {
        let rgba = Rgba(color.to_rgba());
        let (width, height) = self.image.dimensions();
        for y in Self::span(min.y, max.y, height) {
            for x in Self::span(min.x, max.x, width) {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside(center) {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
    }
}

/// Distance from `p` to the segment `a..b`
fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}

impl Surface for RasterSurface {
    fn clear(&mut self, color: Rgb) {
        let rgba = Rgba(color.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        let min = Point::new(center.x - radius, center.y - radius);
        let max = Point::new(center.x + radius, center.y + radius);
        self.fill_where(min, max, color, |p| p.distance(center) <= radius);
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Rgb) {
        // one pixel minimum so hairlines stay visible
        let half = (width / 2.0).max(0.5);
        let min = Point::new(start.x.min(end.x) - half, start.y.min(end.y) - half);
        let max = Point::new(start.x.max(end.x) + half, start.y.max(end.y) + half);
        self.fill_where(min, max, color, |p| {
            distance_to_segment(p, start, end) <= half
        });
    }

    fn present(&mut self, _description: &FrameDescription) -> RevealResult<()> {
        self.presented += 1;
        Ok(())
    }
}
