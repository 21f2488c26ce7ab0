//! Declarative description of a single rendered frame.
//!
//! The description says *what* is visible; surfaces decide *how* to draw it.

use serde::{Deserialize, Serialize};

use super::track::Point;

/// Animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Points are still appearing
    Revealing,
    /// Every point is visible and the track is drawn
    Complete,
}

impl Phase {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Revealing => "revealing",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A revealed track point, drawn as a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Circle center
    pub center: Point,
    /// Circle radius
    pub radius: f32,
}

/// One stamp of the dot-stamped thick line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotSample {
    /// Circle center
    pub center: Point,
    /// Circle radius (half the line width)
    pub radius: f32,
}

/// One edge of the completed track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Edge start
    pub start: Point,
    /// Edge end
    pub end: Point,
    /// Line width in pixels
    pub width: u32,
    /// Evenly spaced stamps from `start` (inclusive) towards `end` (exclusive)
    pub dots: Vec<DotSample>,
}

/// Everything that must be drawn for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDescription {
    /// Frame counter the description was taken at
    pub frame: u64,
    /// Phase at that frame
    pub phase: Phase,
    /// One marker per revealed point
    pub markers: Vec<Marker>,
    /// Track edges; empty until every point is revealed
    pub segments: Vec<Segment>,
}

impl FrameDescription {
    /// Whether the track outline is part of this frame
    #[must_use]
    pub fn has_segments(&self) -> bool {
        !self.segments.is_empty()
    }

    /// Total number of dot samples over all segments
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.segments.iter().map(|s| s.dots.len()).sum()
    }

    /// Line width of the track, if drawn
    #[must_use]
    pub fn line_width(&self) -> Option<u32> {
        self.segments.first().map(|s| s.width)
    }
}
