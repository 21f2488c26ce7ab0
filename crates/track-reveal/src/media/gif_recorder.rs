//! Animated GIF recording of the frame pump's output.
//!
//! Frames are encoded as they are captured, so memory stays flat no matter
//! how long the animation runs.

use std::io::Write;

use gif::{Encoder, Frame, Repeat};
use serde::{Deserialize, Serialize};

use super::raster::RasterSurface;
use crate::core::{FrameDescription, Point, RenderConfig, RevealError, RevealResult, Rgb};
use crate::driver::Surface;

/// Configuration for GIF recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifConfig {
    /// Playback frames per second
    pub fps: u8,
    /// Capture one frame every `stride` ticks
    pub stride: u64,
    /// Quality level (1-100, affects palette quantization)
    pub quality: u8,
    /// Loop count (0 = infinite)
    pub loop_count: u16,
}

impl Default for GifConfig {
    fn default() -> Self {
        Self {
            fps: 25,
            stride: 20,
            quality: 80,
            loop_count: 0,
        }
    }
}

impl GifConfig {
    /// Set frames per second
    #[must_use]
    pub fn with_fps(mut self, fps: u8) -> Self {
        self.fps = fps.clamp(1, 100);
        self
    }

    /// Set the capture stride (at least 1)
    #[must_use]
    pub fn with_stride(mut self, stride: u64) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Set quality (1-100)
    #[must_use]
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    /// Set loop count (0 = infinite)
    #[must_use]
    pub fn with_loop_count(mut self, count: u16) -> Self {
        self.loop_count = count;
        self
    }

    /// Frame delay in centiseconds
    #[must_use]
    pub fn frame_delay_cs(&self) -> u16 {
        (100 / u16::from(self.fps.max(1))).max(1)
    }

    /// Quality (1-100) mapped to encoder speed (30-1)
    fn speed(&self) -> i32 {
        let normalized = i32::from(100 - self.quality.min(100));
        (normalized * 29 / 100 + 1).clamp(1, 30)
    }
}

/// Summary returned when a recording is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordingSummary {
    /// Ticks presented to the recorder
    pub ticks: u64,
    /// Frames written to the GIF
    pub frames: u64,
}

/// A [`Surface`] that rasterizes every tick and writes sampled frames to a GIF
pub struct GifRecorder<W: Write> {
    config: GifConfig,
    raster: RasterSurface,
    encoder: Encoder<W>,
    ticks: u64,
    frames: u64,
    pending: bool,
}

impl<W: Write> std::fmt::Debug for GifRecorder<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifRecorder")
            .field("config", &self.config)
            .field("width", &self.raster.width())
            .field("height", &self.raster.height())
            .field("ticks", &self.ticks)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl<W: Write> GifRecorder<W> {
    /// Starts a recording into `writer`
    pub fn new(writer: W, render: &RenderConfig, config: GifConfig) -> RevealResult<Self> {
        render.validate()?;
        let width = render.width as u16;
        let height = render.height as u16;

        let mut encoder = Encoder::new(writer, width, height, &[])
            .map_err(|e| RevealError::encode(format!("Failed to create GIF encoder: {e}")))?;

        let repeat = if config.loop_count == 0 {
            Repeat::Infinite
        } else {
            Repeat::Finite(config.loop_count)
        };
        encoder
            .set_repeat(repeat)
            .map_err(|e| RevealError::encode(format!("Failed to set GIF repeat: {e}")))?;

        Ok(Self {
            config: config.clone().with_stride(config.stride),
            raster: RasterSurface::from_config(render),
            encoder,
            ticks: 0,
            frames: 0,
            pending: false,
        })
    }

    /// Recording configuration
    #[must_use]
    pub fn config(&self) -> &GifConfig {
        &self.config
    }

    /// Frames written so far
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The raster the recorder draws into
    #[must_use]
    pub fn raster(&self) -> &RasterSurface {
        &self.raster
    }

    fn capture(&mut self) -> RevealResult<()> {
        let width = self.raster.width() as u16;
        let height = self.raster.height() as u16;
        let mut rgba = self.raster.as_rgba().to_vec();

        let mut frame = Frame::from_rgba_speed(width, height, &mut rgba, self.config.speed());
        frame.delay = self.config.frame_delay_cs();

        self.encoder
            .write_frame(&frame)
            .map_err(|e| RevealError::encode(format!("Failed to write GIF frame: {e}")))?;

        self.frames += 1;
        self.pending = false;
        Ok(())
    }

    /// Writes the last tick if it was skipped by the stride and closes the GIF
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::Encode`] when nothing was presented.
    pub fn finish(mut self) -> RevealResult<(W, RecordingSummary)> {
        if self.pending {
            self.capture()?;
        }
        if self.frames == 0 {
            return Err(RevealError::encode("No frames captured"));
        }

        let summary = RecordingSummary {
            ticks: self.ticks,
            frames: self.frames,
        };
        tracing::info!(ticks = summary.ticks, frames = summary.frames, "GIF recording finished");

        let writer = self
            .encoder
            .into_inner()
            .map_err(|e| RevealError::encode(format!("Failed to finish GIF: {e}")))?;
        Ok((writer, summary))
    }
}

impl<W: Write> Surface for GifRecorder<W> {
    fn clear(&mut self, color: Rgb) {
        self.raster.clear(color);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.raster.draw_circle(center, radius, color);
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Rgb) {
        self.raster.draw_line(start, end, width, color);
    }

    fn present(&mut self, description: &FrameDescription) -> RevealResult<()> {
        self.raster.present(description)?;
        let tick = self.ticks;
        self.ticks += 1;
        if tick % self.config.stride == 0 {
            self.capture()
        } else {
            self.pending = true;
            Ok(())
        }
    }
}
