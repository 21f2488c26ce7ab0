//! Track Reveal - animated construction of a closed racing track
//!
//! Points of a fixed track appear one at a time, the closed outline is drawn
//! once every point is visible, and the outline then thickens until it hits
//! its maximum width. The whole timeline is a deterministic function of the
//! tick count.
//!
//! The crate is split the same way a game loop is:
//!
//! - [`core`]: the [`AnimationController`](core::AnimationController) state
//!   machine and the declarative [`FrameDescription`](core::FrameDescription)
//!   it produces. No drawing, no clocks.
//! - [`driver`]: the [`Surface`](driver::Surface) / [`QuitSignal`](driver::QuitSignal)
//!   capabilities and the [`FramePump`](driver::FramePump) that ties a
//!   controller to them.
//! - `tui` (feature `tui`): ratatui canvas playback with crossterm input.
//! - `media` (feature `media`): off-screen raster, PNG snapshots, GIF recording.
//!
//! # Example
//!
//! ```rust
//! use track_reveal::prelude::*;
//!
//! let mut controller = AnimationController::reference();
//!
//! // the first point shows up on the very first tick
//! controller.advance_frame();
//! assert_eq!(controller.state().reveal_index, 1);
//! assert!(controller.current_frame_description().segments.is_empty());
//!
//! // all nine points after frames 0, 300, ..., 2400
//! controller.advance_frames(2400);
//! let frame = controller.current_frame_description();
//! assert_eq!(frame.markers.len(), 9);
//! assert_eq!(frame.segments.len(), 9);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "media")]
pub mod media;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::RevealConfig;
    pub use crate::core::{
        AnimationConfig, AnimationController, AnimationState, DotSample, Edge, FrameDescription,
        InvalidTrackError, Marker, Palette, Phase, Point, RenderConfig, RevealError, RevealResult,
        Rgb, Segment, Track,
    };
    pub use crate::driver::{
        render_description, DrawCommand, DrawList, FrameBudget, FramePump, Never, PumpReport,
        QuitSignal, Surface,
    };

    #[cfg(feature = "media")]
    pub use crate::media::{GifConfig, GifRecorder, RasterSurface, RecordingSummary};

    #[cfg(feature = "tui")]
    pub use crate::tui::{FramePacer, TerminalQuitSignal, TerminalSurface};
}
