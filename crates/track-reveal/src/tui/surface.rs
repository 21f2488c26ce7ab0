//! Terminal surface: retains the draw calls of a tick and paints them on present.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use super::pacer::FramePacer;
use super::view::{TrackCanvas, TrackView};
use crate::core::{FrameDescription, Point, RenderConfig, RevealError, RevealResult, Rgb};
use crate::driver::{DrawList, Surface};

/// A [`Surface`] backed by a ratatui terminal
#[derive(Debug)]
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    commands: DrawList,
    render: RenderConfig,
    total_points: usize,
    pacer: Option<FramePacer>,
}

impl<B: Backend> TerminalSurface<B> {
    /// Wraps a terminal; `total_points` is shown in the status bar
    #[must_use]
    pub fn new(terminal: Terminal<B>, render: RenderConfig, total_points: usize) -> Self {
        Self {
            terminal,
            commands: DrawList::new(),
            render,
            total_points,
            pacer: None,
        }
    }

    /// Holds each presented frame until the pacer's next tick
    #[must_use]
    pub fn with_pacer(mut self, pacer: FramePacer) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// The terminal backend
    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Draw calls of the last tick
    #[must_use]
    pub fn commands(&self) -> &DrawList {
        &self.commands
    }

    /// Consumes the surface, returning the terminal
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear(color);
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.commands.draw_circle(center, radius, color);
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Rgb) {
        self.commands.draw_line(start, end, width, color);
    }

    fn present(&mut self, description: &FrameDescription) -> RevealResult<()> {
        let commands = self.commands.commands();
        let (width, height) = (self.render.width, self.render.height);
        let total_points = self.total_points;

        self.terminal
            .draw(|frame| {
                let canvas = TrackCanvas::new(commands, width, height);
                frame.render_widget(TrackView::new(canvas, description, total_points), frame.area());
            })
            .map_err(|e| RevealError::render(format!("terminal draw failed: {e}")))?;

        self.commands.present(description)?;
        if let Some(pacer) = self.pacer.as_mut() {
            pacer.wait();
        }
        Ok(())
    }
}

/// Puts the terminal in raw mode on the alternate screen
///
/// Raw mode is switched back off if any later setup step fails.
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    undo_raw_mode_on_error(enter_screen())
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn undo_raw_mode_on_error<T>(result: io::Result<T>) -> io::Result<T> {
    if result.is_err() {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "failed to leave raw mode after setup error");
        }
    }
    result
}

/// Leaves the alternate screen and restores cooked mode
pub fn restore_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
