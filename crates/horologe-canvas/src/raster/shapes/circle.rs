use crate::coords::{Rgba, Vec2};
use crate::raster::PixelFrame;

/// Draws an anti-aliased circle outline (ring stroke) in pixel space.
pub(crate) fn draw(frame: &mut PixelFrame<'_>, center: Vec2, radius: f32, width: f32, color: Rgba) {
    let half = width.max(1.0) * 0.5;
    let reach = radius + half + 1.0;

    let min_x = (center.x - reach).floor() as i32;
    let max_x = (center.x + reach).ceil() as i32;
    let min_y = (center.y - reach).floor() as i32;
    let max_y = (center.y + reach).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dist = (Vec2::new(x as f32, y as f32) - center).length();
            let coverage = 1.0 - ((dist - radius).abs() - half).clamp(0.0, 1.0);
            if coverage > 0.01 {
                frame.blend_px(x, y, color, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_covers_rim_and_skips_center() {
        let mut data = vec![0u8; 32 * 32 * 4];
        let mut frame = PixelFrame::new(&mut data, 32, 32);
        draw(&mut frame, Vec2::new(16.0, 16.0), 10.0, 2.0, Rgba::white());

        // All four cardinal rim points.
        for (x, y) in [(26, 16), (6, 16), (16, 26), (16, 6)] {
            assert_eq!(frame.px(x, y), Some([0xff; 4]), "rim at ({x}, {y})");
        }
        assert_eq!(frame.px(16, 16), Some([0, 0, 0, 0]));
    }
}
