// File: crates/chart-core/src/render.rs
// Summary: Renderer-agnostic draw contract consumed by chart components, plus a recorder.

use crate::geometry::{PointF, RectF};
use crate::palette::Color;

/// Text appearance for labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { size: 30.0, color: Color::BLACK }
    }
}

/// Backend that turns chart geometry into pixels.
///
/// Arc angles are degrees, 0 at 3 o'clock, sweeping clockwise in screen space.
pub trait Renderer {
    /// Stroke an arc along the ellipse inscribed in `rect`.
    fn draw_arc(&mut self, rect: RectF, start_angle: f32, sweep_angle: f32, color: Color, stroke_width: f32);
    fn draw_line_segment(&mut self, from: PointF, to: PointF, color: Color, stroke_width: f32);
    fn draw_point(&mut self, at: PointF, radius: f32, color: Color);
    /// Draw `text` with its baseline-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle);
    /// Axis line in the backend's axis style.
    fn draw_axis_line(&mut self, from: PointF, to: PointF);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Arc { rect: RectF, start_angle: f32, sweep_angle: f32, color: Color, stroke_width: f32 },
    LineSegment { from: PointF, to: PointF, color: Color, stroke_width: f32 },
    Point { at: PointF, radius: f32, color: Color },
    Text { text: String, at: PointF, style: TextStyle },
    AxisLine { from: PointF, to: PointF },
}

/// Renderer that records commands instead of drawing; used by tests and for inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self { Self::default() }

    pub fn arcs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Arc { .. }))
    }
    pub fn segments(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::LineSegment { .. }))
    }
    pub fn points(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Point { .. }))
    }
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw_arc(&mut self, rect: RectF, start_angle: f32, sweep_angle: f32, color: Color, stroke_width: f32) {
        self.commands.push(DrawCommand::Arc { rect, start_angle, sweep_angle, color, stroke_width });
    }
    fn draw_line_segment(&mut self, from: PointF, to: PointF, color: Color, stroke_width: f32) {
        self.commands.push(DrawCommand::LineSegment { from, to, color, stroke_width });
    }
    fn draw_point(&mut self, at: PointF, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Point { at, radius, color });
    }
    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
    fn draw_axis_line(&mut self, from: PointF, to: PointF) {
        self.commands.push(DrawCommand::AxisLine { from, to });
    }
}
