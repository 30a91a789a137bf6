//! regard-overlay — Debug drawing for face orientation tracking.
//!
//! Everything in this crate is presentation. The tracking logic lives in
//! `regard-core`; here it gets painted: a single line from the center of
//! the face box along the orientation vector, in whatever color the
//! caller picked. [`Canvas`] is the seam to the caller's drawing surface
//! and [`RasterCanvas`] a self-contained raster implementation for
//! drawing over captured frames.

pub mod color;
pub mod raster;

use regard_core::{FaceBox, FocusOffset, Vector3};

pub use color::{Color, ColorParseError};
pub use raster::RasterCanvas;

/// Stroke width of the orientation line, in canvas pixels.
pub const ORIENTATION_LINE_WIDTH: f32 = 5.0;

/// A 2-D surface the overlay strokes paths onto.
pub trait Canvas {
    /// Stroke a polyline through `points` with the given color and width.
    fn stroke_path(&mut self, points: &[(f32, f32)], color: Color, width: f32);
}

/// Draw the orientation line for one face: a segment from the center of
/// the face box to `center + orientation`, projected onto the drawing
/// plane. z does not shift the line.
pub fn draw_orientation_overlay(
    canvas: &mut dyn Canvas,
    face: &FaceBox,
    orientation: Vector3,
    color: Color,
) {
    let (cx, cy) = face.center();
    let (dx, dy) = orientation.xy();
    canvas.stroke_path(&[(cx, cy), (cx + dx, cy + dy)], color, ORIENTATION_LINE_WIDTH);
}

/// Draw the orientation line colored by proximity to a region-of-interest
/// orientation: green strictly inside `margin` on both axes, red
/// otherwise.
#[deprecated(
    since = "0.2.0",
    note = "pick the color from `AttentionTracker::is_focused` and call `draw_orientation_overlay`"
)]
pub fn draw_orientation_with_roi(
    canvas: &mut dyn Canvas,
    face: &FaceBox,
    orientation: Vector3,
    roi: Vector3,
    margin: f32,
) {
    let offset = FocusOffset {
        x: (orientation.x - roi.x).abs(),
        y: (orientation.y - roi.y).abs(),
    };
    let color = if offset.within_margin(margin) { Color::GREEN } else { Color::RED };
    draw_orientation_overlay(canvas, face, orientation, color);
}
