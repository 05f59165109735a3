use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::{Rgba, Vec2};
use crate::raster::PixelFrame;
use crate::text::{FontId, FontSystem};

/// Draws a text label centered at `center` in pixel space.
///
/// Glyphs are laid out at the requested pixel size, the block extents are
/// measured, and the whole block is offset so its midpoint lands on `center`.
/// Glyph coverage is alpha-blended like every other shape.
pub(crate) fn draw(
    frame: &mut PixelFrame<'_>,
    fonts: &FontSystem,
    id: FontId,
    text: &str,
    size: f32,
    color: Rgba,
    center: Vec2,
) {
    let Some(font) = fonts.get(id) else {
        log::warn!("text command references unloaded font {id:?}");
        return;
    };

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, size, 0));

    let glyphs = layout.glyphs();
    if glyphs.is_empty() {
        return;
    }

    let block_w = glyphs.iter().map(|g| g.x + g.width as f32).fold(0.0, f32::max);
    let block_h = glyphs.iter().map(|g| g.y + g.height as f32).fold(0.0, f32::max);
    let origin_x = center.x - block_w * 0.5;
    let origin_y = center.y - block_h * 0.5;

    for glyph in glyphs {
        let (metrics, bitmap) = font.rasterize_config(glyph.key);
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = f32::from(bitmap[row * metrics.width + col]) / 255.0;
                if coverage > 0.0 {
                    frame.blend_px(
                        (origin_x + glyph.x) as i32 + col as i32,
                        (origin_y + glyph.y) as i32 + row as i32,
                        color,
                        coverage,
                    );
                }
            }
        }
    }
}
