//! Raster canvas backed by the `image` crate.
//!
//! Strokes thick segments with a distance test against the segment,
//! which gives round caps and joints for free. Plenty fast for one
//! overlay line per frame.

use crate::{Canvas, Color};
use image::{Rgba, RgbaImage};

/// Owned RGBA surface implementing [`Canvas`].
///
/// Strokes are fully opaque. Geometry outside the image is clipped,
/// never a panic.
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Blank opaque-black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255])) }
    }

    /// Canvas drawing over an existing frame.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Finish drawing and hand the surface back.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    fn stroke_segment(&mut self, a: (f32, f32), b: (f32, f32), color: Color, width: f32) {
        if self.image.width() == 0 || self.image.height() == 0 {
            return;
        }
        let half = (width / 2.0).max(0.5);
        let max_x = (self.image.width() - 1) as f32;
        let max_y = (self.image.height() - 1) as f32;

        // Scan only the bounding box of the thickened segment, clipped
        // to the image.
        let x0 = (a.0.min(b.0) - half).floor().clamp(0.0, max_x) as u32;
        let x1 = (a.0.max(b.0) + half).ceil().clamp(0.0, max_x) as u32;
        let y0 = (a.1.min(b.1) - half).floor().clamp(0.0, max_y) as u32;
        let y1 = (a.1.max(b.1) + half).ceil().clamp(0.0, max_y) as u32;

        let pixel = Rgba([color.r, color.g, color.b, 255]);
        for y in y0..=y1 {
            for x in x0..=x1 {
                // Test against the pixel center
                let p = (x as f32 + 0.5, y as f32 + 0.5);
                if point_segment_distance(p, a, b) <= half {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn stroke_path(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], color, width);
        }
    }
}

/// Distance from point `p` to the closed segment `a`..`b`.
fn point_segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (px, py) = (p.0 - a.0, p.1 - a.1);
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f32::EPSILON {
        // Degenerate segment, distance to the point a
        return (px * px + py * py).sqrt();
    }
    let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
    let (cx, cy) = (a.0 + t * dx - p.0, a.1 + t * dy - p.1);
    (cx * cx + cy * cy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_colored(image: &RgbaImage, x: u32, y: u32, color: Color) -> bool {
        *image.get_pixel(x, y) == Rgba([color.r, color.g, color.b, 255])
    }

    #[test]
    fn test_point_segment_distance() {
        let a = (0.0, 0.0);
        let b = (10.0, 0.0);
        assert!((point_segment_distance((5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        // Beyond the endpoint the distance is to the endpoint itself
        assert!((point_segment_distance((13.0, 4.0), a, b) - 5.0).abs() < 1e-6);
        // Degenerate segment
        assert!((point_segment_distance((3.0, 4.0), a, a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_dimensions_follow_the_backing_image() {
        let canvas = RasterCanvas::new(100, 50);
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 50);
        let canvas = RasterCanvas::from_image(RgbaImage::new(7, 9));
        assert_eq!(canvas.width(), 7);
        assert_eq!(canvas.height(), 9);
    }

    #[test]
    fn test_horizontal_stroke_covers_width() {
        let mut canvas = RasterCanvas::new(100, 50);
        canvas.stroke_path(&[(10.0, 25.0), (90.0, 25.0)], Color::RED, 5.0);
        let image = canvas.into_image();

        assert!(is_colored(&image, 50, 25, Color::RED));
        // 5 px wide: two pixels above and below the midline are inside
        assert!(is_colored(&image, 50, 23, Color::RED));
        assert!(is_colored(&image, 50, 27, Color::RED));
        // Well off the line stays background
        assert!(!is_colored(&image, 50, 35, Color::RED));
        assert!(!is_colored(&image, 2, 25, Color::RED));
    }

    #[test]
    fn test_stroke_clips_offscreen_geometry() {
        let mut canvas = RasterCanvas::new(64, 64);
        canvas.stroke_path(&[(-50.0, 32.0), (200.0, 32.0)], Color::GREEN, 5.0);
        let image = canvas.into_image();
        assert!(is_colored(&image, 0, 32, Color::GREEN));
        assert!(is_colored(&image, 63, 32, Color::GREEN));
    }

    #[test]
    fn test_fully_offscreen_stroke_paints_nothing() {
        let mut canvas = RasterCanvas::new(32, 32);
        canvas.stroke_path(&[(-100.0, -100.0), (-50.0, -80.0)], Color::RED, 5.0);
        let image = canvas.into_image();
        for (_, _, px) in image.enumerate_pixels() {
            assert_eq!(*px, Rgba([0, 0, 0, 255]));
        }
    }

    #[test]
    fn test_degenerate_segment_paints_a_dot() {
        let mut canvas = RasterCanvas::new(32, 32);
        canvas.stroke_path(&[(16.0, 16.0), (16.0, 16.0)], Color::RED, 5.0);
        let image = canvas.into_image();
        assert!(is_colored(&image, 16, 16, Color::RED));
        assert!(!is_colored(&image, 16, 25, Color::RED));
    }

    #[test]
    fn test_single_point_path_strokes_nothing() {
        let mut canvas = RasterCanvas::new(32, 32);
        canvas.stroke_path(&[(16.0, 16.0)], Color::RED, 5.0);
        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(16, 16), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_from_image_preserves_untouched_pixels() {
        let base = RgbaImage::from_pixel(16, 16, Rgba([9, 9, 9, 255]));
        let mut canvas = RasterCanvas::from_image(base);
        canvas.stroke_path(&[(0.0, 0.0), (4.0, 0.0)], Color::RED, 2.0);
        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(15, 15), Rgba([9, 9, 9, 255]));
        assert!(is_colored(&image, 1, 0, Color::RED));
    }
}
