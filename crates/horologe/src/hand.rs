//! A single clock hand.

use horologe_canvas::coords::{Rgba, Vec2};
use horologe_canvas::scene::{LayerId, Scene};

/// One hand of the watch.
///
/// Length, width, color, and origin are fixed at construction; the current
/// angle is the only mutable state. Each hand owns its scene layer, so
/// redrawing one hand never disturbs the face or the other hands.
#[derive(Debug)]
pub struct Hand {
    length: f32,
    width: f32,
    color: Rgba,
    /// Dial center the hand pivots around.
    origin: Vec2,
    /// Current clock angle, degrees clockwise from 12, in `[0, 360)`.
    angle: f32,
    layer: LayerId,
}

impl Hand {
    pub fn new(length: f32, width: f32, color: Rgba, origin: Vec2, layer: LayerId) -> Self {
        Self {
            length,
            width,
            color,
            origin,
            angle: 0.0,
            layer,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Points the hand at `angle` (degrees clockwise from 12 o'clock) and
    /// redraws it: one clear of this hand's layer, one stroke from the dial
    /// center outward. Repeating the same angle leaves exactly one segment
    /// on the layer.
    pub fn update(&mut self, angle: f32, scene: &mut Scene) {
        self.angle = angle.rem_euclid(360.0);

        // Clock angle → math heading: 12 o'clock is 90°, growing clockwise.
        let tip = self.origin + Vec2::from_polar(90.0 - self.angle, self.length);

        let layer = scene.layer_mut(self.layer);
        layer.clear();
        layer.push_line(self.origin, tip, self.width, self.color);
    }
}
