//! Animation core: track geometry, the reveal state machine and the
//! declarative frame description it produces.

pub mod animation;
mod error;
pub mod frame;
pub mod palette;
pub mod track;

pub use animation::{AnimationConfig, AnimationController, AnimationState};
pub use error::{InvalidTrackError, RevealError, RevealResult};
pub use frame::{DotSample, FrameDescription, Marker, Phase, Segment};
pub use palette::{Palette, RenderConfig, Rgb};
pub use track::{Edge, Point, Track};
