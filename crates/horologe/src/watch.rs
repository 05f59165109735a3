//! Watch controller and frame loop.

use std::time::Duration;

use anyhow::Result;

use horologe_canvas::coords::Vec2;
use horologe_canvas::scene::{LayerId, Scene, ZIndex};
use horologe_canvas::surface::Surface;
use horologe_canvas::text::FontId;
use horologe_canvas::time::{CancelToken, Ticker};

use crate::angles::{TimeSample, hand_angles};
use crate::face::{ClockFace, FaceError};
use crate::hand::Hand;
use crate::theme::Theme;

/// Contract for a watch style.
///
/// Two hooks: one-time static rendering, then one frame's worth of dynamic
/// rendering per tick. [`AnalogWatch`] is the only variant here; a digital or
/// minimal face would implement the same pair.
pub trait Watch {
    /// Builds and draws the static parts of the dial.
    fn setup(&mut self, scene: &mut Scene) -> Result<()>;

    /// Renders one frame's worth of dynamic state.
    fn update(&mut self, scene: &mut Scene) -> Result<()>;
}

/// Hand proportions: (length as a fraction of the radius, stroke width).
const HOUR_HAND: (f32, f32) = (0.5, 6.0);
const MINUTE_HAND: (f32, f32) = (0.7, 4.0);
const SECOND_HAND: (f32, f32) = (0.9, 2.0);

/// Conventional three-hand analog watch.
///
/// Owns one face and exactly three hands, each on its own layer above the
/// face so a hand redraw never erases anything else.
pub struct AnalogWatch {
    theme: Theme,
    font: FontId,
    face: ClockFace,
    face_layer: LayerId,
    hour: Hand,
    minute: Hand,
    second: Hand,
}

impl AnalogWatch {
    /// Builds the face and hands and claims their scene layers.
    ///
    /// Fails on a non-positive radius.
    pub fn new(theme: Theme, radius: f32, font: FontId, scene: &mut Scene) -> Result<Self, FaceError> {
        let center = Vec2::zero();
        let face = ClockFace::new(radius, center)?;

        let face_layer = scene.create_layer("face", ZIndex::new(0));
        let hand = |scene: &mut Scene, name: &str, z, (frac, width): (f32, f32), color| {
            let layer = scene.create_layer(name, ZIndex::new(z));
            Hand::new(frac * radius, width, color, center, layer)
        };

        let hour = hand(scene, "hour-hand", 1, HOUR_HAND, theme.hour_hand);
        let minute = hand(scene, "minute-hand", 2, MINUTE_HAND, theme.minute_hand);
        let second = hand(scene, "second-hand", 3, SECOND_HAND, theme.second_hand);

        Ok(Self {
            theme,
            font,
            face,
            face_layer,
            hour,
            minute,
            second,
        })
    }

    /// Deterministic frame step: `update` with an explicit sample instead of
    /// the current wall clock.
    pub fn update_at(&mut self, sample: TimeSample, scene: &mut Scene) {
        let angles = hand_angles(sample);
        self.hour.update(angles.hour, scene);
        self.minute.update(angles.minute, scene);
        self.second.update(angles.second, scene);
    }
}

impl Watch for AnalogWatch {
    fn setup(&mut self, scene: &mut Scene) -> Result<()> {
        scene.set_background(self.theme.background);
        self.face.layout();
        self.face.draw(scene.layer_mut(self.face_layer), &self.theme, self.font);
        Ok(())
    }

    fn update(&mut self, scene: &mut Scene) -> Result<()> {
        self.update_at(TimeSample::now(), scene);
        Ok(())
    }
}

/// Owns the watch, its scene, and the draw surface; drives the frame loop.
///
/// Lifecycle: construct → [`run`](Self::run) (setup, then tick until
/// cancelled) → drop (surface released). There is no way back into the loop
/// after it exits.
pub struct WatchRunner<W, S> {
    watch: W,
    surface: S,
    scene: Scene,
}

impl<W: Watch, S: Surface> WatchRunner<W, S> {
    pub fn new(watch: W, surface: S, scene: Scene) -> Self {
        Self { watch, surface, scene }
    }

    /// Runs the loop: sample → compute → redraw hands → present → wait.
    ///
    /// `interval` is a minimum inter-frame delay. Cancellation is checked
    /// once per completed frame, never mid-frame, and exits the loop cleanly
    /// rather than surfacing as an error. Surface failures propagate: nothing
    /// can render once the backend is gone.
    pub fn run(mut self, interval: Duration, cancel: &CancelToken) -> Result<()> {
        self.watch.setup(&mut self.scene)?;

        let mut ticker = Ticker::new(interval);
        let mut frames: u64 = 0;

        while !cancel.is_cancelled() {
            self.watch.update(&mut self.scene)?;
            self.surface.present(&mut self.scene)?;
            frames += 1;
            ticker.wait();
        }

        log::info!("cancelled after {frames} frames");
        Ok(())
    }
}
