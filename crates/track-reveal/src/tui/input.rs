//! Keyboard handling for terminal playback. Quitting is the only interaction.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::driver::QuitSignal;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Stop the animation
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        if event.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match event.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Quit signal fed by pending crossterm events; never blocks
#[derive(Debug, Default)]
pub struct TerminalQuitSignal {
    handler: InputHandler,
    quit: bool,
}

impl TerminalQuitSignal {
    /// Creates a signal that has not fired
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one event; returns whether the signal has fired
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event {
            if self.handler.handle_key(*key) == KeyAction::Quit {
                self.quit = true;
            }
        }
        self.quit
    }
}

impl QuitSignal for TerminalQuitSignal {
    fn poll_quit(&mut self) -> bool {
        while !self.quit {
            match event::poll(Duration::ZERO) {
                Ok(false) => break,
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        self.handle_event(&ev);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read terminal event, stopping");
                        self.quit = true;
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "failed to poll terminal events, stopping");
                    self.quit = true;
                }
            }
        }
        self.quit
    }
}
