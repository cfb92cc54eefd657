//! CPU raster surface - a headless stand-in for the capture canvas.

use crate::constants::{BACKGROUND_COLOR, INK_COLOR};
use crate::surface::DrawSurface;
use crate::types::FillStyle;

/// RGBA raster surface backing capture and replay when real pixels are
/// wanted (export, visual comparison). Pixels are `[r, g, b, a]` floats
/// in row-major order.
///
/// Path semantics follow the 2D canvas model the doodle widget was
/// captured against: `stroke` renders every segment of the current
/// subpath (restroking with opaque ink is idempotent), `fill` treats the
/// subpath as a closed polygon.
pub struct RasterSurface {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[f32; 4]>,
    /// Points of the current subpath, in insertion order.
    path: Vec<(i32, i32)>,
}

impl RasterSurface {
    /// Create a surface cleared to the background color.
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; pixel_count],
            path: Vec::new(),
        }
    }

    /// Get a pixel, or `None` outside the surface.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Blend a color onto a pixel: `out = src * a + dst * (1 - a)`.
    /// Does nothing outside the surface.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, color: [f32; 4]) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];
        let alpha = color[3];
        let inv = 1.0 - alpha;
        self.pixels[index] = [
            color[0] * alpha + dst[0] * inv,
            color[1] * alpha + dst[1] * inv,
            color[2] * alpha + dst[2] * inv,
            alpha + dst[3] * inv,
        ];
    }

    /// Draw a 1 px line segment with the given color (Bresenham).
    fn draw_segment(&mut self, from: (i32, i32), to: (i32, i32), color: [f32; 4]) {
        let (mut x, mut y) = from;
        let (x1, y1) = to;
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Even-odd scanline fill of the current subpath, implicitly closed.
    fn fill_path(&mut self, color: [f32; 4]) {
        if self.path.len() < 3 {
            return;
        }
        let points = self.path.clone();
        let y_min = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let y_max = points
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(self.height as i32 - 1);

        for y in y_min..=y_max {
            // Sample at the pixel-row center to sidestep vertex hits.
            let yc = y as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();
            for i in 0..points.len() {
                let (px, py) = points[i];
                let (qx, qy) = points[(i + 1) % points.len()];
                if py == qy {
                    continue;
                }
                let (py, qy) = (py as f64, qy as f64);
                if (py <= yc && yc < qy) || (qy <= yc && yc < py) {
                    let t = (yc - py) / (qy - py);
                    crossings.push(px as f64 + t * (qx as f64 - px as f64));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].ceil() as i32;
                let end = pair[1].ceil() as i32;
                for x in start..end {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Raw pixel bytes for upload or inspection.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}

impl DrawSurface for RasterSurface {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.path.clear();
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        // A line without a current point starts the subpath, as on the
        // canvas this models.
        self.path.push((x, y));
    }

    fn stroke(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        let segments: Vec<((i32, i32), (i32, i32))> = self
            .path
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        for (from, to) in segments {
            self.draw_segment(from, to, INK_COLOR);
        }
    }

    fn fill(&mut self, style: FillStyle) {
        if let Some(color) = style.color() {
            self.fill_path(color);
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(BACKGROUND_COLOR);
        self.path.clear();
    }
}
