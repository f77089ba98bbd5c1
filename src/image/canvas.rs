//! Owned RGBA pixel buffer in row-major layout (stride == width).
//!
//! A freshly allocated canvas is fully transparent. It is the target of one
//! render call and is consumed when written to disk.
use super::surface::{draw_line_bresenham, Surface};
use super::traits::{ImageView, ImageViewMut};
use crate::color::Rgba;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Rgba>,
}

impl Canvas {
    /// Construct a fully transparent canvas of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Rgba::TRANSPARENT)
    }

    pub fn filled(w: usize, h: usize, color: Rgba) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![color; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: Rgba) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Interleaved `r, g, b, a` bytes, row by row.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        if let Some(pixels) = self.as_slice() {
            return pixels.iter().flat_map(|px| px.channels()).collect();
        }
        let mut out = Vec::with_capacity(self.w * self.h * 4);
        for row in self.rows() {
            for px in row {
                out.extend_from_slice(&px.channels());
            }
        }
        out
    }

    /// Write `color` over `[x0, x1]` on row `y`, clipped. Returns pixels written.
    fn fill_span(&mut self, y: isize, x0: isize, x1: isize, color: Rgba) -> usize {
        if y < 0 || y as usize >= self.h || self.w == 0 {
            return 0;
        }
        let lo = x0.min(x1).max(0);
        let hi = x0.max(x1).min(self.w as isize - 1);
        if lo > hi {
            return 0;
        }
        let row = self.row_mut(y as usize);
        row[lo as usize..=hi as usize].fill(color);
        (hi - lo + 1) as usize
    }
}

impl ImageView for Canvas {
    type Pixel = Rgba;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl ImageViewMut for Canvas {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

impl Surface for Canvas {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }

    fn get_pixel(&self, x: isize, y: isize) -> Option<Rgba> {
        self.contains(x, y).then(|| self.get(x as usize, y as usize))
    }

    fn set_pixel(&mut self, x: isize, y: isize, color: Rgba) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.set(x as usize, y as usize, color);
        true
    }

    fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: Rgba) -> usize {
        // Horizontal rules dominate grid rendering; write them as row slices.
        if y0 == y1 {
            return self.fill_span(y0, x0, x1, color);
        }
        draw_line_bresenham(self, x0, y0, x1, y1, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(3, 2);
        assert_eq!(canvas.data.len(), 6);
        assert!(canvas.data.iter().all(|&px| px == Rgba::TRANSPARENT));
        assert!(canvas.is_contiguous());
    }

    #[test]
    fn horizontal_span_is_clipped() {
        let blue = Rgba::rgb(0, 0, 255);
        let mut canvas = Canvas::new(4, 3);
        assert_eq!(canvas.draw_line(6, 1, -2, 1, blue), 4);
        assert_eq!(canvas.draw_line(0, 5, 3, 5, blue), 0);
        assert_eq!(canvas.count_pixels(|px| px == blue), 4);
        assert!(canvas.row(1).iter().all(|&px| px == blue));
    }

    #[test]
    fn rgba_bytes_are_interleaved_row_major() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set(1, 0, Rgba::rgba(1, 2, 3, 4));
        assert_eq!(canvas.to_rgba_bytes(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn padded_rows_are_skipped_in_rgba_bytes() {
        let red = Rgba::rgb(255, 0, 0);
        let canvas = Canvas {
            w: 1,
            h: 2,
            stride: 2,
            data: vec![red, Rgba::TRANSPARENT, red, Rgba::TRANSPARENT],
        };
        assert!(canvas.as_slice().is_none());
        assert_eq!(canvas.to_rgba_bytes(), vec![255, 0, 0, 255, 255, 0, 0, 255]);
    }
}
