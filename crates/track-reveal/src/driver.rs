//! Frame pump and the drawing capabilities it consumes.
//!
//! The animation core never draws. A [`FramePump`] advances the controller
//! once per tick and replays the resulting [`FrameDescription`] against any
//! [`Surface`]: a terminal canvas, an off-screen raster, or a [`DrawList`]
//! for inspection in tests.

use serde::Serialize;

use crate::core::{
    AnimationController, AnimationState, FrameDescription, Palette, Point, RevealResult, Rgb,
};

/// Drawing capability provided by a rendering backend
pub trait Surface {
    /// Fills the whole surface
    fn clear(&mut self, color: Rgb);

    /// Draws a filled circle
    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgb);

    /// Draws a straight line of the given width
    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Rgb);

    /// Makes the frame visible (flush, swap, encode, ...)
    fn present(&mut self, description: &FrameDescription) -> RevealResult<()>;
}

/// Source of the per-frame "quit requested" signal
pub trait QuitSignal {
    /// Returns true once the pump should stop
    fn poll_quit(&mut self) -> bool;
}

/// Quit signal that never fires
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl QuitSignal for Never {
    fn poll_quit(&mut self) -> bool {
        false
    }
}

/// Quit signal that fires after a fixed number of polls
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    /// Allows `frames` ticks before quitting
    #[must_use]
    pub const fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    /// Ticks left in the budget
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl QuitSignal for FrameBudget {
    fn poll_quit(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Fill the surface
    Clear(Rgb),
    /// Filled circle
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f32,
        /// Fill colour
        color: Rgb,
    },
    /// Line segment
    Line {
        /// Start point
        start: Point,
        /// End point
        end: Point,
        /// Line width
        width: f32,
        /// Stroke colour
        color: Rgb,
    },
}

/// Surface that keeps the draw calls of the current frame in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    presented: u64,
}

impl DrawList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued since the last clear
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames presented so far
    #[must_use]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Number of circles in the current frame
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    /// Number of lines in the current frame
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Rgb) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            width,
            color,
        });
    }

    fn present(&mut self, _description: &FrameDescription) -> RevealResult<()> {
        self.presented += 1;
        Ok(())
    }
}

/// Replays a description onto a surface
///
/// Track segments go down first (native line, then dot stamps) and markers
/// are drawn on top of them.
pub fn render_description<S: Surface + ?Sized>(
    description: &FrameDescription,
    palette: &Palette,
    surface: &mut S,
) {
    surface.clear(palette.background);

    for segment in &description.segments {
        surface.draw_line(
            segment.start,
            segment.end,
            segment.width as f32,
            palette.track,
        );
        for dot in &segment.dots {
            surface.draw_circle(dot.center, dot.radius, palette.track);
        }
    }

    for marker in &description.markers {
        surface.draw_circle(marker.center, marker.radius, palette.marker);
    }
}

/// Outcome of [`FramePump::run`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PumpReport {
    /// Ticks rendered during the run
    pub frames_rendered: u64,
    /// Animation state when the run ended
    pub final_state: AnimationState,
}

/// Drives an [`AnimationController`]: one advance and one render per tick
#[derive(Debug, Clone)]
pub struct FramePump {
    controller: AnimationController,
    palette: Palette,
}

impl FramePump {
    /// Creates a pump drawing with `palette`
    #[must_use]
    pub fn new(controller: AnimationController, palette: Palette) -> Self {
        Self {
            controller,
            palette,
        }
    }

    /// The driven controller
    #[must_use]
    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    /// Consumes the pump, returning the controller
    #[must_use]
    pub fn into_controller(self) -> AnimationController {
        self.controller
    }

    /// Runs a single tick: advance, describe, render, present
    pub fn tick<S>(&mut self, surface: &mut S) -> RevealResult<FrameDescription>
    where
        S: Surface + ?Sized,
    {
        self.controller.advance_frame();
        let description = self.controller.current_frame_description();
        render_description(&description, &self.palette, surface);
        surface.present(&description)?;
        Ok(description)
    }

    /// Ticks until the quit signal fires
    ///
    /// The signal is polled before every tick, so a signal that fires
    /// immediately renders nothing.
    pub fn run<S, Q>(&mut self, surface: &mut S, quit: &mut Q) -> RevealResult<PumpReport>
    where
        S: Surface + ?Sized,
        Q: QuitSignal + ?Sized,
    {
        let mut frames_rendered = 0;
        while !quit.poll_quit() {
            self.tick(surface)?;
            frames_rendered += 1;
        }

        tracing::debug!(frames_rendered, "frame pump stopped");

        Ok(PumpReport {
            frames_rendered,
            final_state: self.controller.state().clone(),
        })
    }
}
