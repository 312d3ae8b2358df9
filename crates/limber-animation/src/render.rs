//! Rendering contract
//!
//! Coordinates are world units with y pointing up. Backends flip to screen
//! space themselves.

use limber_core::{Color, Vec2};
use serde::Serialize;

/// The drawing primitives the figure and world need
pub trait Renderer {
    /// Start a new frame. Backends that accumulate state reset it here.
    fn clear(&mut self) {}

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f64, color: Color);

    /// Filled axis-aligned rectangle with its lower-left corner at `(x, y)`
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color);

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f64,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f64,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

/// Renderer that stores every call, for tests and headless export
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Renderer for CommandRecorder {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f64, color: Color) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            color,
        });
    }
}
