//! Snapshot command handler

use track_reveal::config::RevealConfig;
use track_reveal::media::snapshot;

use super::reference_controller;
use crate::error::CliResult;
use crate::SnapshotArgs;

/// Execute the snapshot command
pub fn execute_snapshot(config: &RevealConfig, args: &SnapshotArgs) -> CliResult<()> {
    let controller = reference_controller(config)?;
    let surface = snapshot(controller, &config.render, args.frame)?;
    surface.save_png(&args.output)?;
    tracing::info!(
        frame = args.frame,
        output = %args.output.display(),
        "snapshot written"
    );
    println!("Saved frame {} to {}", args.frame, args.output.display());
    Ok(())
}
