use crate::coords::{Rgba, Vec2};
use crate::scene::{DrawCmd, Layer};
use crate::text::FontId;

/// Text draw payload.
///
/// Text is drawn center-aligned: `center` is the midpoint of the rendered
/// block, which is what dial digit labels need.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Rgba,
    pub center: Vec2,
}

impl Layer {
    /// Records a center-aligned text label.
    pub fn push_text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Rgba,
        center: Vec2,
    ) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            center,
        }));
    }
}
