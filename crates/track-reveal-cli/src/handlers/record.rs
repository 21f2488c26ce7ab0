//! Record command handler

use std::fs::File;
use std::io::{BufWriter, Write};

use track_reveal::config::RevealConfig;
use track_reveal::driver::{FrameBudget, FramePump};
use track_reveal::media::{GifConfig, GifRecorder, RecordingSummary};

use super::reference_controller;
use crate::error::{CliError, CliResult};
use crate::RecordArgs;

/// Largest accepted `--stride`
pub const MAX_STRIDE: u64 = 10_000;

/// Execute the record command
pub fn execute_record(config: &RevealConfig, args: &RecordArgs) -> CliResult<()> {
    let gif = gif_config(args)?;
    let file = File::create(&args.output).map_err(|e| {
        CliError::recording(format!("cannot create {}: {e}", args.output.display()))
    })?;

    let (mut writer, summary) = record_to_writer(config, gif, args.frames, BufWriter::new(file))?;
    writer.flush()?;

    println!(
        "Recorded {} ticks as {} frames to {}",
        summary.ticks,
        summary.frames,
        args.output.display()
    );
    Ok(())
}

/// Validates the recording flags
pub fn gif_config(args: &RecordArgs) -> CliResult<GifConfig> {
    if args.stride == 0 || args.stride > MAX_STRIDE {
        return Err(CliError::invalid_argument(format!(
            "--stride must be between 1 and {MAX_STRIDE}"
        )));
    }
    if args.fps == 0 || args.fps > 100 {
        return Err(CliError::invalid_argument("--fps must be between 1 and 100"));
    }
    Ok(GifConfig::default()
        .with_stride(args.stride)
        .with_fps(args.fps)
        .with_quality(args.quality))
}

/// Ticks covering one second of GIF playback
pub fn hold_ticks(gif: &GifConfig) -> u64 {
    gif.stride.saturating_mul(u64::from(gif.fps))
}

/// Runs the animation into a GIF encoder
///
/// With `frames` unset the animation runs until the line stops growing, then
/// holds the final image for one second of playback.
pub fn record_to_writer<W: Write>(
    config: &RevealConfig,
    gif: GifConfig,
    frames: Option<u64>,
    writer: W,
) -> CliResult<(W, RecordingSummary)> {
    let hold = hold_ticks(&gif);
    let mut recorder = GifRecorder::new(writer, &config.render, gif)?;
    let mut pump = FramePump::new(reference_controller(config)?, config.render.palette);

    match frames {
        Some(frames) => {
            pump.run(&mut recorder, &mut FrameBudget::new(frames))?;
        }
        None => {
            while !pump.controller().is_settled() {
                pump.tick(&mut recorder)?;
            }
            tracing::debug!(frame = pump.controller().state().frame, "animation settled");
            pump.run(&mut recorder, &mut FrameBudget::new(hold))?;
        }
    }

    recorder
        .finish()
        .map_err(|e| CliError::recording(e.to_string()))
}
