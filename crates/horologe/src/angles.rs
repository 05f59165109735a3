//! Wall-clock to hand-angle mapping.
//!
//! Pure functions: a time sample in, three clock angles out. A clock angle is
//! measured in degrees clockwise from the 12-o'clock position (0° = 12,
//! 90° = 3 o'clock) and is always in `[0, 360)`.

use chrono::{Local, Timelike};

/// Wall-clock reading taken at the start of a tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TimeSample {
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    /// 0–59.
    pub second: u8,
}

impl TimeSample {
    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }

    /// Samples the current local time. Sub-second precision is not needed;
    /// the dial only moves in whole-second steps.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}

/// Hand angles for one frame, degrees clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Maps a wall-clock sample to the three hand angles.
///
/// The minute hand creeps 0.1° per second and the hour hand 0.5° per minute,
/// so both move continuously between their ticks; the second hand jumps in
/// whole 6° steps. Total over all valid samples, no error cases.
pub fn hand_angles(t: TimeSample) -> HandAngles {
    let second = f32::from(t.second) * 6.0;
    let minute = f32::from(t.minute) * 6.0 + f32::from(t.second) * 0.1;
    let hour = f32::from(t.hour % 12) * 30.0 + f32::from(t.minute) * 0.5;

    HandAngles {
        hour: hour % 360.0,
        minute: minute % 360.0,
        second: second % 360.0,
    }
}
