//! Static dial geometry and rendering.
//!
//! The face is laid out once at setup and drawn onto its own layer; the
//! update loop never touches it again.

use std::fmt;

use horologe_canvas::coords::Vec2;
use horologe_canvas::scene::Layer;
use horologe_canvas::text::FontId;

use crate::theme::Theme;

/// Digit centers sit on a ring at this fraction of the radius.
const DIGIT_RING: f32 = 0.85;
/// Tick marks run from this fraction of the radius out to the rim.
const TICK_INNER: f32 = 0.9;
/// Label size at digit scale 1.0, logical px.
const DIGIT_FONT_PX: f32 = 20.0;
/// Stroke width of the rim circle and tick marks.
const STROKE_WIDTH: f32 = 2.0;

/// One hour label on the dial. Created at setup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Digit {
    /// 1–12.
    pub value: u8,
    /// Center of the label in dial space.
    pub position: Vec2,
    /// Relative size scale applied to the label font.
    pub size: f32,
}

/// Error for a degenerate dial radius.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceError {
    pub radius: f32,
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clock face radius must be positive and finite, got {}", self.radius)
    }
}

impl std::error::Error for FaceError {}

/// Dial geometry: rim circle, 12 tick marks, and 12 digits on an inner ring.
#[derive(Debug)]
pub struct ClockFace {
    radius: f32,
    center: Vec2,
    digits: Vec<Digit>,
}

impl ClockFace {
    /// Fails on a non-positive or non-finite radius; a degenerate dial can
    /// never render, so this surfaces at construction.
    pub fn new(radius: f32, center: Vec2) -> Result<Self, FaceError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(FaceError { radius });
        }

        Ok(Self {
            radius,
            center,
            digits: Vec::new(),
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Digits in hour order 1..=12 (render order is irrelevant).
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Computes the 12 digit positions.
    ///
    /// Deterministic and idempotent: calling it again rebuilds the exact same
    /// layout, overwriting any prior digits.
    pub fn layout(&mut self) {
        self.digits.clear();

        for value in 1..=12u8 {
            // Hour h sits at 30°·(3 − h) in math convention: 12 at the top,
            // 3 on the right, counting clockwise.
            let angle = 30.0 * (3.0 - f32::from(value));
            let position = self.center + Vec2::from_polar(angle, DIGIT_RING * self.radius);
            self.digits.push(Digit { value, position, size: 1.0 });
        }
    }

    /// Draws the static dial onto `layer`: rim circle, 12 radial tick marks
    /// at 30° intervals, and one centered label per digit.
    pub fn draw(&self, layer: &mut Layer, theme: &Theme, font: FontId) {
        layer.clear();

        layer.push_circle(self.center, self.radius, STROKE_WIDTH, theme.face);

        for i in 0..12u8 {
            let dir = Vec2::from_polar(f32::from(i) * 30.0, 1.0);
            layer.push_line(
                self.center + dir * (TICK_INNER * self.radius),
                self.center + dir * self.radius,
                STROKE_WIDTH,
                theme.face,
            );
        }

        for digit in &self.digits {
            layer.push_text(
                digit.value.to_string(),
                font,
                DIGIT_FONT_PX * digit.size,
                theme.digit,
                digit.position,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_canvas::scene::{DrawCmd, Scene, ZIndex};

    const TOL: f32 = 1e-3;

    fn face(radius: f32) -> ClockFace {
        let mut face = ClockFace::new(radius, Vec2::zero()).unwrap();
        face.layout();
        face
    }

    fn digit(face: &ClockFace, value: u8) -> &Digit {
        face.digits().iter().find(|d| d.value == value).unwrap()
    }

    #[test]
    fn rejects_degenerate_radius() {
        for r in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(ClockFace::new(r, Vec2::zero()).is_err(), "accepted radius {r}");
        }
    }

    #[test]
    fn twelve_sits_at_the_top() {
        let f = face(100.0);
        let d = digit(&f, 12);
        assert!((d.position.x - 0.0).abs() < TOL);
        assert!((d.position.y - 85.0).abs() < TOL);
    }

    #[test]
    fn three_sits_on_the_right() {
        let f = face(100.0);
        let d = digit(&f, 3);
        assert!((d.position.x - 85.0).abs() < TOL);
        assert!((d.position.y - 0.0).abs() < TOL);
    }

    #[test]
    fn six_and_nine_complete_the_cardinals() {
        let f = face(100.0);
        let six = digit(&f, 6);
        assert!((six.position.x - 0.0).abs() < TOL && (six.position.y + 85.0).abs() < TOL);
        let nine = digit(&f, 9);
        assert!((nine.position.x + 85.0).abs() < TOL && (nine.position.y - 0.0).abs() < TOL);
    }

    #[test]
    fn layout_respects_a_non_origin_center() {
        let mut f = ClockFace::new(100.0, Vec2::new(50.0, -20.0)).unwrap();
        f.layout();
        let d = digit(&f, 12);
        assert!((d.position.x - 50.0).abs() < TOL);
        assert!((d.position.y - 65.0).abs() < TOL);
    }

    #[test]
    fn all_digits_lie_on_the_digit_ring() {
        let f = face(140.0);
        assert_eq!(f.digits().len(), 12);
        for d in f.digits() {
            let dist = (d.position - f.center()).length();
            assert!((dist - 0.85 * 140.0).abs() < 1e-2, "digit {} off ring: {dist}", d.value);
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let mut f = ClockFace::new(120.0, Vec2::zero()).unwrap();
        f.layout();
        let first: Vec<Digit> = f.digits().to_vec();
        f.layout();
        assert_eq!(f.digits(), &first[..]);
    }

    #[test]
    fn draw_emits_rim_ticks_and_labels() {
        let f = face(100.0);
        let mut scene = Scene::new();
        let id = scene.create_layer("face", ZIndex::new(0));
        f.draw(scene.layer_mut(id), &Theme::classic(), FontId::default());

        let cmds = scene.layer(id).cmds();
        let circles = cmds.iter().filter(|c| matches!(c, DrawCmd::Circle(_))).count();
        let lines = cmds.iter().filter(|c| matches!(c, DrawCmd::Line(_))).count();
        let texts = cmds.iter().filter(|c| matches!(c, DrawCmd::Text(_))).count();
        assert_eq!((circles, lines, texts), (1, 12, 12));
    }

    #[test]
    fn ticks_span_the_outer_tenth() {
        let f = face(100.0);
        let mut scene = Scene::new();
        let id = scene.create_layer("face", ZIndex::new(0));
        f.draw(scene.layer_mut(id), &Theme::classic(), FontId::default());

        for cmd in scene.layer(id).cmds() {
            if let DrawCmd::Line(l) = cmd {
                assert!((l.from.length() - 90.0).abs() < TOL);
                assert!((l.to.length() - 100.0).abs() < TOL);
            }
        }
    }
}
