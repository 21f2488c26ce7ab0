//! Headless rendering: raster frames, PNG snapshots and GIF recordings.

mod gif_recorder;
mod raster;

pub use gif_recorder::{GifConfig, GifRecorder, RecordingSummary};
pub use raster::RasterSurface;

use crate::core::{AnimationController, RenderConfig, RevealResult};
use crate::driver::{render_description, FrameBudget, FramePump};

/// Renders the state reached after `frames` ticks into a fresh raster
pub fn snapshot(
    controller: AnimationController,
    render: &RenderConfig,
    frames: u64,
) -> RevealResult<RasterSurface> {
    render.validate()?;
    let mut surface = RasterSurface::from_config(render);
    let mut pump = FramePump::new(controller, render.palette);
    pump.run(&mut surface, &mut FrameBudget::new(frames))?;
    if frames == 0 {
        // nothing ticked; still show the empty canvas
        let description = pump.controller().current_frame_description();
        render_description(&description, &render.palette, &mut surface);
    }
    Ok(surface)
}
