//! The reveal/grow animation state machine.
//!
//! Each tick runs, in order:
//! 1. reveal check on the *current* frame (fires at frame 0, 300, 600, ...)
//! 2. frame increment
//! 3. post-completion counter, once every point is visible
//! 4. width growth check on the *incremented* frame
//!
//! The mixed before/after ordering is observable and must not be reordered.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{RevealError, RevealResult};
use super::frame::{DotSample, FrameDescription, Marker, Phase, Segment};
use super::track::Track;

/// Frames between two point reveals
pub const REVEAL_INTERVAL_FRAMES: u64 = 300;
/// Post-completion frames before the track starts thickening
pub const GROWTH_THRESHOLD_FRAMES: u64 = 500;
/// Frames between width increments once growth has started
pub const GROWTH_INTERVAL_FRAMES: u64 = 5;
/// Starting line width
pub const INITIAL_LINE_WIDTH: u32 = 2;
/// Line width cap
pub const MAX_LINE_WIDTH: u32 = 50;
/// Radius of a point marker
pub const MARKER_RADIUS: f32 = 4.0;
/// Dot stamps per segment
pub const DOT_SAMPLES: usize = 20;

/// Timing and geometry parameters of the animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames between two point reveals
    pub reveal_interval_frames: u64,
    /// Post-completion frames before growth starts
    pub growth_threshold_frames: u64,
    /// Frames between width increments
    pub growth_interval_frames: u64,
    /// Starting line width
    pub initial_line_width: u32,
    /// Line width cap
    pub max_line_width: u32,
    /// Radius of a point marker
    pub marker_radius: f32,
    /// Dot stamps per segment
    pub dot_samples: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            reveal_interval_frames: REVEAL_INTERVAL_FRAMES,
            growth_threshold_frames: GROWTH_THRESHOLD_FRAMES,
            growth_interval_frames: GROWTH_INTERVAL_FRAMES,
            initial_line_width: INITIAL_LINE_WIDTH,
            max_line_width: MAX_LINE_WIDTH,
            marker_radius: MARKER_RADIUS,
            dot_samples: DOT_SAMPLES,
        }
    }
}

impl AnimationConfig {
    /// Set the reveal interval
    #[must_use]
    pub const fn with_reveal_interval(mut self, frames: u64) -> Self {
        self.reveal_interval_frames = frames;
        self
    }

    /// Set the growth threshold
    #[must_use]
    pub const fn with_growth_threshold(mut self, frames: u64) -> Self {
        self.growth_threshold_frames = frames;
        self
    }

    /// Set the growth interval
    #[must_use]
    pub const fn with_growth_interval(mut self, frames: u64) -> Self {
        self.growth_interval_frames = frames;
        self
    }

    /// Set the initial and maximum line width
    #[must_use]
    pub const fn with_line_widths(mut self, initial: u32, max: u32) -> Self {
        self.initial_line_width = initial;
        self.max_line_width = max;
        self
    }

    /// Set the number of dot stamps per segment
    #[must_use]
    pub const fn with_dot_samples(mut self, samples: usize) -> Self {
        self.dot_samples = samples;
        self
    }

    /// Checks that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::InvalidConfig`] for zero intervals, zero dot
    /// samples, a zero initial width or an initial width above the cap.
    pub fn validate(&self) -> RevealResult<()> {
        if self.reveal_interval_frames == 0 {
            return Err(RevealError::invalid_config(
                "reveal_interval_frames must be positive",
            ));
        }
        if self.growth_interval_frames == 0 {
            return Err(RevealError::invalid_config(
                "growth_interval_frames must be positive",
            ));
        }
        if self.dot_samples == 0 {
            return Err(RevealError::invalid_config("dot_samples must be positive"));
        }
        if self.initial_line_width == 0 {
            return Err(RevealError::invalid_config(
                "initial_line_width must be positive",
            ));
        }
        if self.initial_line_width > self.max_line_width {
            return Err(RevealError::invalid_config(format!(
                "initial_line_width {} exceeds max_line_width {}",
                self.initial_line_width, self.max_line_width
            )));
        }
        if !(self.marker_radius.is_finite() && self.marker_radius >= 0.0) {
            return Err(RevealError::invalid_config(
                "marker_radius must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Mutable counters of the animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Ticks elapsed
    pub frame: u64,
    /// Number of visible points, in `[0, N]`
    pub reveal_index: usize,
    /// Ticks elapsed since every point became visible
    pub post_complete_frames: u64,
    /// Current track line width
    pub line_width: u32,
}

impl AnimationState {
    /// Fresh state with the given starting width
    #[must_use]
    pub const fn new(initial_line_width: u32) -> Self {
        Self {
            frame: 0,
            reveal_index: 0,
            post_complete_frames: 0,
            line_width: initial_line_width,
        }
    }
}

/// Owns the track and the animation state and advances it one tick at a time
#[derive(Debug, Clone)]
pub struct AnimationController {
    track: Track,
    config: AnimationConfig,
    state: AnimationState,
}

impl AnimationController {
    /// Creates a controller with the default timing
    #[must_use]
    pub fn new(track: Track) -> Self {
        let config = AnimationConfig::default();
        Self {
            state: AnimationState::new(config.initial_line_width),
            track,
            config,
        }
    }

    /// Creates a controller with custom timing
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::InvalidConfig`] if the config does not validate.
    pub fn with_config(track: Track, config: AnimationConfig) -> RevealResult<Self> {
        config.validate()?;
        Ok(Self {
            state: AnimationState::new(config.initial_line_width),
            track,
            config,
        })
    }

    /// Controller over the built-in reference track
    #[must_use]
    pub fn reference() -> Self {
        Self::new(Track::reference())
    }

    /// Current counters
    #[must_use]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// The track being revealed
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The timing parameters
    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Whether every point is visible
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.reveal_index == self.track.len()
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            Phase::Complete
        } else {
            Phase::Revealing
        }
    }

    /// Whether the output can no longer change: complete and at full width
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.is_complete() && self.state.line_width >= self.config.max_line_width
    }

    /// Advances the animation by one tick
    pub fn advance_frame(&mut self) {
        let n = self.track.len();
        let state = &mut self.state;

        if state.frame % self.config.reveal_interval_frames == 0 && state.reveal_index < n {
            state.reveal_index += 1;
            debug!(
                frame = state.frame,
                reveal_index = state.reveal_index,
                "revealed track point"
            );
            if state.reveal_index == n {
                info!(frame = state.frame, points = n, "track fully revealed");
            }
        }

        state.frame += 1;

        if state.reveal_index == n {
            state.post_complete_frames += 1;
        }

        if state.post_complete_frames > self.config.growth_threshold_frames
            && state.frame % self.config.growth_interval_frames == 0
            && state.line_width < self.config.max_line_width
        {
            state.line_width += 1;
            if state.line_width == self.config.max_line_width {
                info!(
                    frame = state.frame,
                    line_width = state.line_width,
                    "track width settled"
                );
            }
        }
    }

    /// Advances the animation by `frames` ticks
    pub fn advance_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.advance_frame();
        }
    }

    /// Describes what must be drawn for the current state
    #[must_use]
    pub fn current_frame_description(&self) -> FrameDescription {
        let markers = self.track.points()[..self.state.reveal_index]
            .iter()
            .map(|&center| Marker {
                center,
                radius: self.config.marker_radius,
            })
            .collect();

        let segments = if self.is_complete() {
            self.segments()
        } else {
            Vec::new()
        };

        FrameDescription {
            frame: self.state.frame,
            phase: self.phase(),
            markers,
            segments,
        }
    }

    fn segments(&self) -> Vec<Segment> {
        let width = self.state.line_width;
        let radius = width as f32 / 2.0;
        let samples = self.config.dot_samples;

        self.track
            .edges()
            .map(|edge| Segment {
                start: edge.start,
                end: edge.end,
                width,
                dots: (0..samples)
                    .map(|step| DotSample {
                        center: edge.at(step as f32 / samples as f32),
                        radius,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::track::Point;

    fn square() -> Track {
        Track::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ])
        .unwrap()
    }

    /// Ticks needed to reveal all nine reference points
    const REVEAL_ALL: u64 = 2401;

    // ===== Config =====

    #[test]
    fn test_default_config_values() {
        let config = AnimationConfig::default();
        assert_eq!(config.reveal_interval_frames, 300);
        assert_eq!(config.growth_threshold_frames, 500);
        assert_eq!(config.growth_interval_frames, 5);
        assert_eq!(config.initial_line_width, 2);
        assert_eq!(config.max_line_width, 50);
        assert_eq!(config.marker_radius, 4.0);
        assert_eq!(config.dot_samples, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_reveal_interval_rejected() {
        let config = AnimationConfig::default().with_reveal_interval(0);
        let err = AnimationController::with_config(square(), config).unwrap_err();
        assert!(err.to_string().contains("reveal_interval_frames"));
    }

    #[test]
    fn test_zero_growth_interval_rejected() {
        let config = AnimationConfig::default().with_growth_interval(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_dot_samples_rejected() {
        let config = AnimationConfig::default().with_dot_samples(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_widths_rejected() {
        let config = AnimationConfig::default().with_line_widths(10, 5);
        assert!(matches!(
            config.validate(),
            Err(RevealError::InvalidConfig { .. })
        ));
        assert!(AnimationConfig::default()
            .with_line_widths(0, 5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_negative_marker_radius_rejected() {
        let mut config = AnimationConfig::default();
        config.marker_radius = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_partial_yaml_uses_defaults() {
        let config: AnimationConfig =
            serde_yaml_ng::from_str("reveal_interval_frames: 10\n").unwrap();
        assert_eq!(config.reveal_interval_frames, 10);
        assert_eq!(config.max_line_width, MAX_LINE_WIDTH);
    }

    // ===== Construction =====

    #[test]
    fn test_fresh_state() {
        let controller = AnimationController::reference();
        assert_eq!(controller.state(), &AnimationState::new(2));
        assert_eq!(controller.phase(), Phase::Revealing);
        assert!(!controller.is_complete());
        assert!(!controller.is_settled());
        let desc = controller.current_frame_description();
        assert!(desc.markers.is_empty());
        assert!(desc.segments.is_empty());
    }

    // ===== Reveal =====

    #[test]
    fn test_first_tick_reveals_first_point() {
        let mut controller = AnimationController::reference();
        controller.advance_frame();
        assert_eq!(controller.state().reveal_index, 1);
        assert_eq!(controller.state().frame, 1);
        let desc = controller.current_frame_description();
        assert_eq!(desc.markers.len(), 1);
        assert_eq!(desc.markers[0].center, controller.track().points()[0]);
        assert_eq!(desc.markers[0].radius, 4.0);
        assert!(desc.segments.is_empty());
    }

    #[test]
    fn test_second_point_waits_a_full_interval() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(300);
        assert_eq!(controller.state().reveal_index, 1);
        controller.advance_frame();
        assert_eq!(controller.state().reveal_index, 2);
    }

    #[test]
    fn test_reveal_all_reference_points() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(REVEAL_ALL - 1);
        assert_eq!(controller.state().reveal_index, 8);
        assert_eq!(controller.state().post_complete_frames, 0);

        controller.advance_frame();
        let state = controller.state();
        assert_eq!(state.reveal_index, 9);
        assert_eq!(state.frame, REVEAL_ALL);
        assert_eq!(state.post_complete_frames, 1);
        assert_eq!(state.line_width, 2);
        assert_eq!(controller.phase(), Phase::Complete);
    }

    #[test]
    fn test_reveal_index_caps_at_track_len() {
        let mut controller = AnimationController::new(square());
        controller.advance_frames(10_000);
        assert_eq!(controller.state().reveal_index, 4);
    }

    // ===== Description =====

    #[test]
    fn test_complete_description_has_closed_segments() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(REVEAL_ALL);
        let desc = controller.current_frame_description();
        assert_eq!(desc.markers.len(), 9);
        assert_eq!(desc.segments.len(), 9);
        assert!(desc.segments.iter().all(|s| s.dots.len() == 20));
        assert!(desc.segments.iter().all(|s| s.width == 2));

        let points = controller.track().points();
        let wrap = &desc.segments[8];
        assert_eq!(wrap.start, points[8]);
        assert_eq!(wrap.end, points[0]);
    }

    #[test]
    fn test_dot_samples_are_evenly_spaced() {
        let config = AnimationConfig::default().with_reveal_interval(1);
        let mut controller = AnimationController::with_config(square(), config).unwrap();
        controller.advance_frames(4);
        let desc = controller.current_frame_description();
        let first = &desc.segments[0];
        assert_eq!(first.dots[0].center, Point::new(0.0, 0.0));
        assert_eq!(first.dots[1].center, Point::new(5.0, 0.0));
        assert_eq!(first.dots[19].center, Point::new(95.0, 0.0));
        assert_eq!(first.dots[0].radius, 1.0);
    }

    // ===== Growth =====

    #[test]
    fn test_width_holds_until_threshold_passed() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(REVEAL_ALL + 499);
        assert_eq!(controller.state().post_complete_frames, 500);
        assert_eq!(controller.state().line_width, 2);

        // post_complete_frames 501 at frame 2901; first multiple of 5 is 2905
        controller.advance_frames(4);
        assert_eq!(controller.state().frame, 2904);
        assert_eq!(controller.state().line_width, 2);
        controller.advance_frame();
        assert_eq!(controller.state().line_width, 3);
    }

    #[test]
    fn test_width_grows_one_per_interval() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(2905);
        assert_eq!(controller.state().line_width, 3);
        controller.advance_frames(5);
        assert_eq!(controller.state().line_width, 4);
        controller.advance_frames(4);
        assert_eq!(controller.state().line_width, 4);
        controller.advance_frame();
        assert_eq!(controller.state().line_width, 5);
    }

    #[test]
    fn test_width_caps_at_max() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(REVEAL_ALL);
        while controller.state().post_complete_frames < 3000 {
            controller.advance_frame();
        }
        assert_eq!(controller.state().line_width, 50);
        assert!(controller.is_settled());

        controller.advance_frames(1_000);
        assert_eq!(controller.state().line_width, 50);
        let desc = controller.current_frame_description();
        assert_eq!(desc.line_width(), Some(50));
        assert_eq!(desc.segments[0].dots[0].radius, 25.0);
    }

    #[test]
    fn test_post_complete_frames_count_every_tick() {
        let mut controller = AnimationController::reference();
        controller.advance_frames(REVEAL_ALL);
        let before = controller.state().post_complete_frames;
        controller.advance_frames(17);
        assert_eq!(controller.state().post_complete_frames, before + 17);
    }

    #[test]
    fn test_state_serializes() {
        let mut controller = AnimationController::reference();
        controller.advance_frame();
        let json = serde_json::to_value(controller.state()).unwrap();
        assert_eq!(json["frame"], 1);
        assert_eq!(json["reveal_index"], 1);
        assert_eq!(json["line_width"], 2);
    }
}
