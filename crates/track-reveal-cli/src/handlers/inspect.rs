//! Inspect command handler

use serde::Serialize;
use std::fmt::Write as _;
use track_reveal::config::RevealConfig;
use track_reveal::core::{AnimationController, AnimationState, FrameDescription};

use super::reference_controller;
use crate::error::CliResult;
use crate::{InspectArgs, InspectFormat};

/// State and frame description after a number of ticks
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    /// Points in the track
    pub total_points: usize,
    /// Whether the output can no longer change
    pub settled: bool,
    /// Counters
    pub state: AnimationState,
    /// What would be drawn
    pub description: FrameDescription,
}

impl InspectReport {
    /// Captures the controller as it is now
    pub fn capture(controller: &AnimationController) -> Self {
        Self {
            total_points: controller.track().len(),
            settled: controller.is_settled(),
            state: controller.state().clone(),
            description: controller.current_frame_description(),
        }
    }

    fn to_text(&self) -> String {
        let desc = &self.description;
        let mut out = String::new();
        let _ = writeln!(out, "frame:                {}", self.state.frame);
        let _ = writeln!(out, "phase:                {}", desc.phase);
        let _ = writeln!(
            out,
            "revealed:             {}/{}",
            self.state.reveal_index, self.total_points
        );
        let _ = writeln!(
            out,
            "post_complete_frames: {}",
            self.state.post_complete_frames
        );
        let _ = writeln!(out, "line_width:           {}", self.state.line_width);
        let _ = writeln!(out, "markers:              {}", desc.markers.len());
        let _ = writeln!(
            out,
            "segments:             {} ({} dots)",
            desc.segments.len(),
            desc.dot_count()
        );
        let _ = writeln!(out, "settled:              {}", self.settled);
        out
    }
}

/// Execute the inspect command
pub fn execute_inspect(config: &RevealConfig, args: &InspectArgs) -> CliResult<()> {
    let mut controller = reference_controller(config)?;
    controller.advance_frames(args.frame);
    print!("{}", render_inspect(&controller, args.format)?);
    Ok(())
}

/// Formats the controller state
pub fn render_inspect(controller: &AnimationController, format: InspectFormat) -> CliResult<String> {
    let report = InspectReport::capture(controller);
    match format {
        InspectFormat::Text => Ok(report.to_text()),
        InspectFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
    }
}
