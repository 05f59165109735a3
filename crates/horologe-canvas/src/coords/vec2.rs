use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `len` along a heading in mathematical degrees
    /// (counter-clockwise from the positive x-axis).
    #[inline]
    pub fn from_polar(heading_deg: f32, len: f32) -> Self {
        let (sin, cos) = heading_deg.to_radians().sin_cos();
        Self::new(len * cos, len * sin)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn from_polar_cardinal_headings() {
        assert!(close(Vec2::from_polar(0.0, 10.0), Vec2::new(10.0, 0.0)));
        assert!(close(Vec2::from_polar(90.0, 10.0), Vec2::new(0.0, 10.0)));
        assert!(close(Vec2::from_polar(180.0, 10.0), Vec2::new(-10.0, 0.0)));
        assert!(close(Vec2::from_polar(270.0, 10.0), Vec2::new(0.0, -10.0)));
    }

    #[test]
    fn from_polar_preserves_length() {
        for deg in [13.0, 97.5, 212.0, 359.0] {
            let v = Vec2::from_polar(deg, 42.0);
            assert!((v.length() - 42.0).abs() < 1e-3);
        }
    }
}
