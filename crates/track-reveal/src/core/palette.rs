//! Colours and canvas geometry shared by every surface.

use serde::{Deserialize, Serialize};

use super::error::{RevealError, RevealResult};
use super::track::TRACK_SCALE;

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Dark grey window background
    pub const BACKGROUND: Self = Self(25, 25, 25);
    /// Solid red
    pub const RED: Self = Self(255, 0, 0);
    /// Solid green
    pub const GREEN: Self = Self(0, 255, 0);

    /// RGBA bytes with full opacity
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }
}

/// Colours used to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas fill
    pub background: Rgb,
    /// Point markers
    pub marker: Rgb,
    /// Track lines and dot stamps
    pub track: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::BACKGROUND,
            marker: Rgb::RED,
            track: Rgb::GREEN,
        }
    }
}

/// Canvas size and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Colours
    pub palette: Palette,
}

impl RenderConfig {
    /// Unscaled reference window size
    pub const BASE_SIZE: (u32, u32) = (600, 375);

    /// Creates a render config of the given size with the default palette
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            palette: Palette::default(),
        }
    }

    /// Checks the canvas is drawable
    pub fn validate(&self) -> RevealResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RevealError::invalid_config(format!(
                "canvas size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        // GIF frames are limited to 16-bit dimensions
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(RevealError::invalid_config(format!(
                "canvas size {}x{} exceeds {}",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        let (w, h) = Self::BASE_SIZE;
        Self::new(
            (w as f32 * TRACK_SCALE) as u32,
            (h as f32 * TRACK_SCALE) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_scaled_base() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (900, 562));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.background, Rgb(25, 25, 25));
        assert_eq!(palette.marker, Rgb(255, 0, 0));
        assert_eq!(palette.track, Rgb(0, 255, 0));
    }

    #[test]
    fn test_zero_canvas_rejected() {
        assert!(RenderConfig::new(0, 10).validate().is_err());
        assert!(RenderConfig::new(70_000, 10).validate().is_err());
    }

    #[test]
    fn test_rgba_is_opaque() {
        assert_eq!(Rgb(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }
}
