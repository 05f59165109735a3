//! Software rasterizer.
//!
//! Replays `scene` layers into an RGBA8 framebuffer. Each scene shape has a
//! matching rasterizer under `raster::shapes`, one file per shape.
//!
//! Convention: scene geometry is dial space (centered, +Y up);
//! [`Viewport::to_pixel`] maps it to the framebuffer's top-left +Y-down space
//! here and nowhere else.

mod frame;
mod shapes;

pub use frame::PixelFrame;

use crate::coords::Viewport;
use crate::scene::{DrawCmd, Scene};
use crate::text::FontSystem;

/// Clears `frame` to the scene background and replays all layers back-to-front.
pub fn render_scene(
    scene: &mut Scene,
    fonts: &FontSystem,
    viewport: Viewport,
    frame: &mut PixelFrame<'_>,
) {
    frame.fill(scene.background());

    for layer in scene.iter_in_paint_order() {
        for cmd in layer.cmds() {
            match cmd {
                DrawCmd::Line(l) => shapes::line::draw(
                    frame,
                    viewport.to_pixel(l.from),
                    viewport.to_pixel(l.to),
                    l.width,
                    l.color,
                ),
                DrawCmd::Circle(c) => shapes::circle::draw(
                    frame,
                    viewport.to_pixel(c.center),
                    c.radius,
                    c.width,
                    c.color,
                ),
                DrawCmd::Text(t) => shapes::text::draw(
                    frame,
                    fonts,
                    t.font,
                    &t.text,
                    t.size,
                    t.color,
                    viewport.to_pixel(t.center),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rgba, Vec2};
    use crate::scene::ZIndex;

    fn rendered(scene: &mut Scene, w: usize, h: usize) -> Vec<u8> {
        let mut data = vec![0u8; w * h * 4];
        let mut frame = PixelFrame::new(&mut data, w, h);
        let fonts = FontSystem::new();
        render_scene(scene, &fonts, Viewport::new(w as f32, h as f32), &mut frame);
        data
    }

    fn px(data: &[u8], w: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * w + x) * 4;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn background_fills_untouched_pixels() {
        let mut scene = Scene::new();
        scene.set_background(Rgba::rgb(10, 20, 30));

        let data = rendered(&mut scene, 8, 8);
        assert_eq!(px(&data, 8, 0, 0), [10, 20, 30, 0xff]);
        assert_eq!(px(&data, 8, 7, 7), [10, 20, 30, 0xff]);
    }

    #[test]
    fn higher_z_layer_paints_over_lower() {
        let mut scene = Scene::new();
        let below = scene.create_layer("below", ZIndex::new(0));
        let above = scene.create_layer("above", ZIndex::new(1));

        // Same horizontal segment through the center, two colors.
        let (from, to) = (Vec2::new(-8.0, 0.0), Vec2::new(8.0, 0.0));
        scene.layer_mut(below).push_line(from, to, 3.0, Rgba::rgb(0xff, 0, 0));
        scene.layer_mut(above).push_line(from, to, 3.0, Rgba::rgb(0, 0xff, 0));

        let data = rendered(&mut scene, 24, 24);
        let center = px(&data, 24, 12, 12);
        assert_eq!(center[1], 0xff, "top layer should win: {center:?}");
        assert_eq!(center[0], 0x00);
    }

    #[test]
    fn line_covers_its_span_only() {
        let mut scene = Scene::new();
        let layer = scene.create_layer("l", ZIndex::new(0));
        scene
            .layer_mut(layer)
            .push_line(Vec2::new(-6.0, 0.0), Vec2::new(6.0, 0.0), 2.0, Rgba::white());

        let data = rendered(&mut scene, 24, 24);
        assert_eq!(px(&data, 24, 12, 12), [0xff; 4]);
        assert_eq!(px(&data, 24, 12, 2), [0, 0, 0, 0xff]);
    }

    #[test]
    fn circle_strokes_rim_not_interior() {
        let mut scene = Scene::new();
        let layer = scene.create_layer("l", ZIndex::new(0));
        scene
            .layer_mut(layer)
            .push_circle(Vec2::zero(), 8.0, 2.0, Rgba::white());

        let data = rendered(&mut scene, 32, 32);
        // On the rim (center is at pixel (16, 16)).
        assert_eq!(px(&data, 32, 24, 16), [0xff; 4]);
        // Dial interior stays background.
        assert_eq!(px(&data, 32, 16, 16), [0, 0, 0, 0xff]);
    }
}
