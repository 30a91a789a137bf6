use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 3-D point or direction in keypoint space.
///
/// Carries whatever units the landmark detector produced (typically pixels
/// for x/y). Nothing in this crate normalizes or rescales these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise average of two vectors.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Projection onto the drawing plane, dropping z.
    pub fn xy(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// Axis-aligned face bounding box, as reported by the landmark detector.
///
/// Serializes with camelCase field names (`xMin`, `xMax`, ...) to match
/// the detector's own JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceBox {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl FaceBox {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Center of the box on the drawing plane.
    pub fn center(&self) -> (f32, f32) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }
}

/// Per-axis absolute offset between a measured orientation and the
/// calibrated reference. z never enters the focus metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusOffset {
    pub x: f32,
    pub y: f32,
}

impl FocusOffset {
    /// True iff both offsets are strictly inside the margin.
    /// An offset exactly equal to the margin counts as outside.
    pub fn within_margin(&self, margin: f32) -> bool {
        self.x < margin && self.y < margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_sub() {
        let d = Vector3::new(3.0, 2.0, 1.0) - Vector3::new(1.0, 1.0, 1.0);
        assert!((d.x - 2.0).abs() < 1e-6);
        assert!((d.y - 1.0).abs() < 1e-6);
        assert!(d.z.abs() < 1e-6);
    }

    #[test]
    fn test_vector_add() {
        let s = Vector3::new(1.0, -2.0, 3.0) + Vector3::new(2.0, 2.0, -1.0);
        assert!((s.x - 3.0).abs() < 1e-6);
        assert!(s.y.abs() < 1e-6);
        assert!((s.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_xy_drops_z() {
        let (x, y) = Vector3::new(6.0, -4.0, 123.0).xy();
        assert!((x - 6.0).abs() < 1e-6);
        assert!((y + 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_midpoint() {
        let m = Vector3::new(2.0, -4.0, 6.0).midpoint(Vector3::new(4.0, 4.0, -6.0));
        assert!((m.x - 3.0).abs() < 1e-6);
        assert!(m.y.abs() < 1e-6);
        assert!(m.z.abs() < 1e-6);
    }

    #[test]
    fn test_face_box_center() {
        let face = FaceBox::new(180.0, 420.0, 90.0, 330.0);
        let (cx, cy) = face.center();
        assert!((cx - 300.0).abs() < 1e-6);
        assert!((cy - 210.0).abs() < 1e-6);
    }

    #[test]
    fn test_within_margin_strict_boundary() {
        let offset = FocusOffset { x: 20.0, y: 0.0 };
        assert!(!offset.within_margin(20.0));
        let offset = FocusOffset { x: 19.999, y: 19.999 };
        assert!(offset.within_margin(20.0));
    }

    #[test]
    fn test_face_box_camel_case_json() {
        let face: FaceBox =
            serde_json::from_str(r#"{"xMin":1.0,"xMax":2.0,"yMin":3.0,"yMax":4.0}"#).unwrap();
        assert_eq!(face, FaceBox::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vector_json_object_form() {
        let v: Vector3 = serde_json::from_str(r#"{"x":310.2,"y":201.8,"z":-14.1}"#).unwrap();
        assert!((v.x - 310.2).abs() < 1e-6);
        assert!((v.z + 14.1).abs() < 1e-6);
    }
}
