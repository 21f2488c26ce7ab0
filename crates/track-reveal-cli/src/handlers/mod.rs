//! Command handlers - extracted from main.rs for testability

pub mod config;
pub mod inspect;
pub mod play;
pub mod record;
pub mod snapshot;

pub use config::{execute_config, render_config};
pub use inspect::{execute_inspect, render_inspect, InspectReport};
pub use play::{execute_play, AnyQuit};
pub use record::{execute_record, record_to_writer};
pub use snapshot::execute_snapshot;

use track_reveal::config::RevealConfig;
use track_reveal::core::{AnimationController, Track};

use crate::error::CliResult;

/// Controller for the built-in track with the configured timing
pub fn reference_controller(config: &RevealConfig) -> CliResult<AnimationController> {
    Ok(AnimationController::with_config(
        Track::reference(),
        config.animation.clone(),
    )?)
}
