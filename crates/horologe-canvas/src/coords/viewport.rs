use super::Vec2;

/// Viewport size in logical pixels.
///
/// Carries the dial-space → pixel-space mapping: dial space is centered on the
/// viewport with +Y up, pixel space is top-left with +Y down.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a dial-space point to pixel space.
    #[inline]
    pub fn to_pixel(self, p: Vec2) -> Vec2 {
        Vec2::new(self.width * 0.5 + p.x, self.height * 0.5 - p.y)
    }
}
