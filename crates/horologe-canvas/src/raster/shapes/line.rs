use crate::coords::{Rgba, Vec2};
use crate::raster::PixelFrame;

/// Draws an anti-aliased thick segment in pixel space.
///
/// Coverage falls off over one pixel past the half-width, computed from the
/// point-to-segment distance; a zero-length segment degenerates to a dot.
pub(crate) fn draw(frame: &mut PixelFrame<'_>, from: Vec2, to: Vec2, width: f32, color: Rgba) {
    let half = width.max(1.0) * 0.5;
    let pad = half.ceil() as i32 + 1;

    let min_x = from.x.min(to.x).floor() as i32 - pad;
    let max_x = from.x.max(to.x).ceil() as i32 + pad;
    let min_y = from.y.min(to.y).floor() as i32 - pad;
    let max_y = from.y.max(to.y).ceil() as i32 + pad;

    let d = to - from;
    let len_sq = d.x * d.x + d.y * d.y;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32, y as f32);
            let t = if len_sq > 0.0 {
                let q = p - from;
                ((q.x * d.x + q.y * d.y) / len_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };

            let dist = (p - (from + d * t)).length();
            let coverage = 1.0 - (dist - half).clamp(0.0, 1.0);
            if coverage > 0.01 {
                frame.blend_px(x, y, color, coverage);
            }
        }
    }
}
