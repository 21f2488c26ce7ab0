//! Terminal rendering of a retained draw list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, Paragraph, Widget,
    },
};

use crate::core::{FrameDescription, Phase, Rgb};
use crate::driver::DrawCommand;

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Braille canvas replaying draw commands in canvas coordinates
///
/// Screen space has y growing downwards; the canvas flips it.
#[derive(Debug)]
pub struct TrackCanvas<'a> {
    commands: &'a [DrawCommand],
    width: f64,
    height: f64,
}

impl<'a> TrackCanvas<'a> {
    /// Creates a canvas covering `width` x `height` pixels of track space
    #[must_use]
    pub fn new(commands: &'a [DrawCommand], width: u32, height: u32) -> Self {
        Self {
            commands,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    fn flip(&self, y: f32) -> f64 {
        self.height - f64::from(y)
    }
}

impl Widget for TrackCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = self
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Clear(rgb) => Some(to_color(*rgb)),
                _ => None,
            })
            .unwrap_or(Color::Reset);

        Canvas::default()
            .block(
                Block::default()
                    .title(" Track ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .background_color(background)
            .marker(Marker::Braille)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(|ctx| {
                for command in self.commands {
                    match *command {
                        DrawCommand::Clear(_) => {}
                        DrawCommand::Circle {
                            center,
                            radius,
                            color,
                        } => {
                            let (x, y) = (f64::from(center.x), self.flip(center.y));
                            ctx.draw(&Circle {
                                x,
                                y,
                                radius: f64::from(radius),
                                color: to_color(color),
                            });
                            ctx.draw(&Points {
                                coords: &[(x, y)],
                                color: to_color(color),
                            });
                        }
                        DrawCommand::Line {
                            start, end, color, ..
                        } => {
                            ctx.draw(&CanvasLine {
                                x1: f64::from(start.x),
                                y1: self.flip(start.y),
                                x2: f64::from(end.x),
                                y2: self.flip(end.y),
                                color: to_color(color),
                            });
                        }
                    }
                }
            })
            .render(area, buf);
    }
}

/// One-line summary of the animation state
#[must_use]
pub fn status_line(description: &FrameDescription, total_points: usize) -> Line<'static> {
    let phase_color = match description.phase {
        Phase::Revealing => Color::Yellow,
        Phase::Complete => Color::Green,
    };
    let width = description
        .line_width()
        .map_or_else(|| "-".to_string(), |w| w.to_string());

    Line::from(vec![
        Span::styled(
            format!(" frame {} ", description.frame),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("| {} ", description.phase),
            Style::default().fg(phase_color),
        ),
        Span::raw(format!(
            "| points {}/{} | width {} ",
            description.markers.len(),
            total_points,
            width
        )),
        Span::styled("| q to quit", Style::default().fg(Color::DarkGray)),
    ])
}

/// Full-screen view: canvas on top, status bar below
#[derive(Debug)]
pub struct TrackView<'a> {
    canvas: TrackCanvas<'a>,
    description: &'a FrameDescription,
    total_points: usize,
}

impl<'a> TrackView<'a> {
    /// Creates the view for one frame
    #[must_use]
    pub fn new(
        canvas: TrackCanvas<'a>,
        description: &'a FrameDescription,
        total_points: usize,
    ) -> Self {
        Self {
            canvas,
            description,
            total_points,
        }
    }
}

impl Widget for TrackView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        self.canvas.render(chunks[0], buf);
        Paragraph::new(status_line(self.description, self.total_points)).render(chunks[1], buf);
    }
}
