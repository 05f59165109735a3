use crate::coords::Rgba;

/// Mutable view over an RGBA8 framebuffer (row-major, 4 bytes per pixel).
pub struct PixelFrame<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelFrame<'a> {
    /// Wraps `data` as a `width × height` RGBA8 buffer.
    ///
    /// # Panics
    /// Panics (debug only) if `data` is not exactly `width * height * 4` bytes.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height * 4, "framebuffer size mismatch");
        Self { data, width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fills the whole buffer with an opaque color.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Source-over blends `color` into the pixel at `(x, y)`.
    ///
    /// `coverage` in `[0, 1]` scales the color's alpha (anti-aliasing weight).
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_px(&mut self, x: i32, y: i32, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }

        let a = (f32::from(color.a) / 255.0 * coverage).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }

        let i = (y as usize * self.width + x as usize) * 4;
        let blend = |src: u8, dst: u8| -> u8 {
            (f32::from(src) * a + f32::from(dst) * (1.0 - a)).round() as u8
        };

        self.data[i] = blend(color.r, self.data[i]);
        self.data[i + 1] = blend(color.g, self.data[i + 1]);
        self.data[i + 2] = blend(color.b, self.data[i + 2]);
        self.data[i + 3] = 0xff;
    }

    /// Reads back a pixel, if in bounds.
    pub fn px(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let mut frame = PixelFrame::new(&mut data, 4, 4);
        frame.blend_px(1, 2, Rgba::rgb(0xff, 0x00, 0x80), 1.0);
        assert_eq!(frame.px(1, 2), Some([0xff, 0x00, 0x80, 0xff]));
    }

    #[test]
    fn blend_half_coverage_mixes_with_destination() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let mut frame = PixelFrame::new(&mut data, 4, 4);
        frame.fill(Rgba::black());
        frame.blend_px(0, 0, Rgba::white(), 0.5);
        let [r, ..] = frame.px(0, 0).unwrap();
        assert!((126..=129).contains(&r), "got {r}");
    }

    #[test]
    fn blend_out_of_bounds_is_ignored() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let mut frame = PixelFrame::new(&mut data, 4, 4);
        frame.blend_px(-1, 0, Rgba::white(), 1.0);
        frame.blend_px(4, 0, Rgba::white(), 1.0);
        frame.blend_px(0, 99, Rgba::white(), 1.0);
        assert!(data.iter().all(|&b| b == 0));
    }
}
