use crate::coords::{Rgba, Vec2};
use crate::scene::{DrawCmd, Layer};

/// Circle outline draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Rgba,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, width: f32, color: Rgba) -> Self {
        Self { center, radius, width, color }
    }
}

impl Layer {
    /// Records a circle outline.
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, width, color)));
    }
}
