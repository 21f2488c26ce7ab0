//! Terminal playback of the animation

mod input;
mod pacer;
mod surface;
mod view;

pub use input::{InputHandler, KeyAction, TerminalQuitSignal};
pub use pacer::FramePacer;
pub use surface::{init_terminal, restore_terminal, TerminalSurface};
pub use view::{status_line, TrackCanvas, TrackView};
