//! Drawing primitives the renderer relies on.
//!
//! A [`Surface`] only has to provide pixel access; lines and rectangle
//! outlines come with default implementations built on `set_pixel`.
//! Coordinates are signed so callers can pass points outside the surface;
//! such pixels are clipped, never wrapped.
use crate::color::Rgba;

pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Pixel at (x, y), `None` outside the surface.
    fn get_pixel(&self, x: isize, y: isize) -> Option<Rgba>;

    /// Overwrite the pixel at (x, y). Returns `false` when the point is clipped.
    fn set_pixel(&mut self, x: isize, y: isize, color: Rgba) -> bool;

    #[inline]
    fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Straight 1-pixel line between both end points (inclusive).
    ///
    /// Returns the number of pixels written.
    fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: Rgba) -> usize {
        draw_line_bresenham(self, x0, y0, x1, y1, color)
    }

    /// Unfilled rectangle outline with corners (x0, y0) and (x1, y1), inclusive.
    ///
    /// Corner pixels are shared by two edges and written twice; the returned
    /// count reflects every write.
    fn draw_rect_outline(
        &mut self,
        x0: isize,
        y0: isize,
        x1: isize,
        y1: isize,
        color: Rgba,
    ) -> usize {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.draw_line(left, top, right, top, color)
            + self.draw_line(right, top, right, bottom, color)
            + self.draw_line(right, bottom, left, bottom, color)
            + self.draw_line(left, bottom, left, top, color)
    }
}

/// Bresenham walk between both end points (inclusive), writing through
/// `set_pixel`. Returns the number of pixels written.
pub fn draw_line_bresenham<S: Surface + ?Sized>(
    surface: &mut S,
    x0: isize,
    y0: isize,
    x1: isize,
    y1: isize,
    color: Rgba,
) -> usize {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;
    let mut written = 0;
    loop {
        if surface.set_pixel(x, y, color) {
            written += 1;
        }
        if x == x1 && y == y1 {
            return written;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Canvas;

    const RED: Rgba = Rgba::rgb(255, 0, 0);

    #[test]
    fn diagonal_line_hits_every_step() {
        let mut canvas = Canvas::new(5, 5);
        let written = canvas.draw_line(0, 0, 4, 4, RED);
        assert_eq!(written, 5);
        for i in 0..5 {
            assert_eq!(canvas.get_pixel(i, i), Some(RED));
        }
        assert_eq!(canvas.get_pixel(1, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn shallow_line_covers_both_end_points() {
        let mut canvas = Canvas::new(10, 4);
        canvas.draw_line(9, 3, 0, 0, RED);
        assert_eq!(canvas.get_pixel(0, 0), Some(RED));
        assert_eq!(canvas.get_pixel(9, 3), Some(RED));
        let per_column = (0..10)
            .filter(|&x| (0..4).any(|y| canvas.get_pixel(x, y) == Some(RED)))
            .count();
        assert_eq!(per_column, 10);
    }

    #[test]
    fn lines_are_clipped_to_the_surface() {
        let mut canvas = Canvas::new(4, 4);
        let written = canvas.draw_line(-3, 1, 10, 1, RED);
        assert_eq!(written, 4);
        assert_eq!(canvas.get_pixel(-1, 1), None);
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut canvas = Canvas::new(6, 5);
        canvas.draw_rect_outline(5, 4, 0, 0, RED);
        for y in 0..5isize {
            for x in 0..6isize {
                let edge = x == 0 || y == 0 || x == 5 || y == 4;
                let expected = if edge { RED } else { Rgba::TRANSPARENT };
                assert_eq!(canvas.get_pixel(x, y), Some(expected), "at ({x}, {y})");
            }
        }
    }
}
