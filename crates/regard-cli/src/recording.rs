//! Recorded keypoint streams.
//!
//! A recording is the per-frame JSON a landmark detector dumps, collected
//! into one file:
//!
//! ```json
//! {
//!   "frames": [
//!     {
//!       "keypoints": [{ "x": 310.2, "y": 201.8, "z": -14.1 }, ...],
//!       "faceBox": { "xMin": 180.0, "xMax": 420.0, "yMin": 90.0, "yMax": 330.0 }
//!     }
//!   ]
//! }
//! ```
//!
//! `faceBox` is optional and only needed for rendering overlays. Unknown
//! fields (such as per-keypoint `name` annotations) are ignored.

use anyhow::{Context, Result};
use regard_core::{FaceBox, Vector3};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Recording {
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub keypoints: Vec<Vector3>,
    #[serde(default)]
    pub face_box: Option<FaceBox>,
}

pub fn load(path: &Path) -> Result<Recording> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read recording {}", path.display()))?;
    let recording: Recording = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse recording {}", path.display()))?;
    Ok(recording)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_with_face_box() {
        let json = r#"{
            "frames": [{
                "keypoints": [
                    {"x": 1.0, "y": 2.0, "z": 3.0},
                    {"x": 4.0, "y": 5.0, "z": 6.0, "name": "noseBridge"}
                ],
                "faceBox": {"xMin": 0.0, "xMax": 10.0, "yMin": 0.0, "yMax": 20.0}
            }]
        }"#;
        let recording: Recording = serde_json::from_str(json).unwrap();
        assert_eq!(recording.frames.len(), 1);
        let frame = &recording.frames[0];
        assert_eq!(frame.keypoints.len(), 2);
        assert!((frame.keypoints[1].y - 5.0).abs() < 1e-6);
        let face = frame.face_box.unwrap();
        assert_eq!(face, FaceBox::new(0.0, 10.0, 0.0, 20.0));
    }

    #[test]
    fn test_face_box_is_optional() {
        let json = r#"{"frames": [{"keypoints": [{"x": 0.0, "y": 0.0, "z": 0.0}]}]}"#;
        let recording: Recording = serde_json::from_str(json).unwrap();
        assert!(recording.frames[0].face_box.is_none());
    }

    #[test]
    fn test_empty_recording_parses() {
        let recording: Recording = serde_json::from_str(r#"{"frames": []}"#).unwrap();
        assert!(recording.frames.is_empty());
    }
}
