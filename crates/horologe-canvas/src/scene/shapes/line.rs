use crate::coords::{Rgba, Vec2};
use crate::scene::{DrawCmd, Layer};

/// Stroked segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Rgba,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Rgba) -> Self {
        Self { from, to, width, color }
    }
}

impl Layer {
    /// Records a stroked segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}
