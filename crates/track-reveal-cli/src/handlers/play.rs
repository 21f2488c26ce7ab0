//! Play command handler

use track_reveal::config::RevealConfig;
use track_reveal::driver::{FrameBudget, FramePump, QuitSignal};
use track_reveal::tui::{
    init_terminal, restore_terminal, FramePacer, TerminalQuitSignal, TerminalSurface,
};

use super::reference_controller;
use crate::error::{CliError, CliResult};
use crate::PlayArgs;

/// Quits when either signal does; `first` is polled first
#[derive(Debug)]
pub struct AnyQuit<A, B> {
    first: A,
    second: B,
}

impl<A: QuitSignal, B: QuitSignal> AnyQuit<A, B> {
    /// Combines two signals
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: QuitSignal, B: QuitSignal> QuitSignal for AnyQuit<A, B> {
    fn poll_quit(&mut self) -> bool {
        self.first.poll_quit() || self.second.poll_quit()
    }
}

/// Execute the play command
pub fn execute_play(config: &RevealConfig, args: &PlayArgs) -> CliResult<()> {
    if args.fps == 0 {
        return Err(CliError::invalid_argument("--fps must be at least 1"));
    }
    let controller = reference_controller(config)?;
    let total_points = controller.track().len();
    let mut pump = FramePump::new(controller, config.render.palette);

    let terminal = init_terminal()?;
    let mut surface = TerminalSurface::new(terminal, config.render, total_points)
        .with_pacer(FramePacer::new(args.fps));

    let mut quit = AnyQuit::new(
        TerminalQuitSignal::new(),
        FrameBudget::new(args.frames.unwrap_or(u64::MAX)),
    );
    let result = pump.run(&mut surface, &mut quit);

    // the terminal must come back even when a frame failed
    let mut terminal = surface.into_terminal();
    restore_terminal(&mut terminal)?;

    let report = result?;
    tracing::info!(
        frames = report.frames_rendered,
        reveal_index = report.final_state.reveal_index,
        line_width = report.final_state.line_width,
        "playback stopped"
    );
    Ok(())
}
