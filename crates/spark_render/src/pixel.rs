//! CPU canvas backed by an RGBA pixel buffer

use glam::Vec2;
use spark_core::ColorToken;

use crate::canvas::{Canvas, SurfaceSize};
use crate::color::{ColorCache, Rgba};
use crate::error::RenderError;

/// Software rasterizer for headless rendering and snapshots.
///
/// Pixels are straight-alpha RGBA, row-major, top-left origin. Circles
/// cover every pixel whose center lies inside the radius and are composited
/// source-over.
#[derive(Debug)]
pub struct PixelCanvas {
    size: SurfaceSize,
    pixels: Vec<[u8; 4]>,
    global_alpha: f32,
    colors: ColorCache,
    frames_presented: u64,
}

impl PixelCanvas {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![[0; 4]; size.area()],
            global_alpha: 1.0,
            colors: ColorCache::new(),
            frames_presented: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// Raw RGBA bytes, 4 per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels with any coverage
    pub fn covered(&self) -> usize {
        self.pixels.iter().filter(|p| p[3] > 0).count()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn blend(&mut self, index: usize, src: [f32; 4]) {
        let dst = self.pixels[index];
        let sa = src[3];
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }

        let mut out = [0u8; 4];
        for c in 0..3 {
            let d = dst[c] as f32 / 255.0;
            let v = (src[c] * sa + d * da * (1.0 - sa)) / out_a;
            out[c] = (v * 255.0).round() as u8;
        }
        out[3] = (out_a * 255.0).round() as u8;
        self.pixels[index] = out;
    }
}

impl Canvas for PixelCanvas {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        // resizing a canvas element wipes its contents as well
        self.pixels = vec![[0; 4]; size.area()];
    }

    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ColorToken) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 || self.size.is_empty() {
            return;
        }

        let mut src = self.colors.resolve(color).to_f32();
        src[3] *= self.global_alpha;
        if src[3] <= 0.0 {
            return;
        }

        let max_x = self.size.width as f32 - 1.0;
        let max_y = self.size.height as f32 - 1.0;
        let x0 = (center.x - radius).floor().clamp(0.0, max_x) as u32;
        let x1 = (center.x + radius).ceil().clamp(0.0, max_x) as u32;
        let y0 = (center.y - radius).floor().clamp(0.0, max_y) as u32;
        let y1 = (center.y + radius).ceil().clamp(0.0, max_y) as u32;
        let r2 = radius * radius;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    let index = y as usize * self.size.width as usize + x as usize;
                    self.blend(index, src);
                }
            }
        }
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorToken {
        ColorToken::from("#ff0000")
    }

    #[test]
    fn circle_covers_its_center_with_global_alpha() {
        let mut canvas = PixelCanvas::new(SurfaceSize::new(32, 32));
        canvas.set_global_alpha(0.5);
        canvas.fill_circle(Vec2::new(10.5, 10.5), 3.0, &red());

        assert_eq!(canvas.pixel(10, 10), Some([255, 0, 0, 128]));
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 0]));
        // roughly pi * r^2
        let covered = canvas.covered();
        assert!((25..=33).contains(&covered), "covered {covered}");
    }

    #[test]
    fn overlapping_draws_composite_source_over() {
        let mut canvas = PixelCanvas::new(SurfaceSize::new(8, 8));
        canvas.set_global_alpha(0.5);
        canvas.fill_circle(Vec2::new(4.0, 4.0), 2.0, &red());
        canvas.fill_circle(Vec2::new(4.0, 4.0), 2.0, &ColorToken::from("#0000ff"));

        let [r, g, b, a] = canvas.pixel(4, 4).expect("in bounds");
        // 0.5 + 0.5 * (1 - 0.5) of coverage, give or take rounding
        assert!((191..=192).contains(&a));
        assert_eq!(g, 0);
        assert!(b > r);
    }

    #[test]
    fn clipped_and_invalid_circles() {
        let mut canvas = PixelCanvas::new(SurfaceSize::new(10, 10));
        canvas.fill_circle(Vec2::new(-50.0, -50.0), 5.0, &red());
        canvas.fill_circle(Vec2::new(f32::NAN, 2.0), 5.0, &red());
        canvas.fill_circle(Vec2::new(5.0, 5.0), 0.0, &red());
        assert_eq!(canvas.covered(), 0);

        canvas.fill_circle(Vec2::new(0.0, 0.0), 2.0, &red());
        assert_eq!(canvas.pixel(0, 0), Some([255, 0, 0, 255]));
    }

    #[test]
    fn resize_and_clear() {
        let mut canvas = PixelCanvas::new(SurfaceSize::new(4, 4));
        canvas.fill_circle(Vec2::new(2.0, 2.0), 2.0, &red());
        assert!(canvas.covered() > 0);

        canvas.clear();
        assert_eq!(canvas.covered(), 0);

        canvas.resize(SurfaceSize::new(6, 3));
        assert_eq!(canvas.size(), SurfaceSize::new(6, 3));
        assert_eq!(canvas.as_bytes().len(), 6 * 3 * 4);
        assert_eq!(canvas.pixel(5, 2), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(6, 0), None);
    }
}
