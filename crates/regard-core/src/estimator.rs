//! Face orientation estimation from landmark keypoints.
//!
//! The orientation vector is the average of the two cheek-to-nose
//! vectors. For a face looking straight into the camera the x component
//! sits near zero; turning the head swings the vector toward the cheek
//! that is rotating away.

use crate::profile::LandmarkProfile;
use crate::types::Vector3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("keypoint index {index} out of range: frame has {len} points")]
    OutOfRange { index: usize, len: usize },
}

/// Compute the face orientation vector from one frame of keypoints.
///
/// `keypoints` must hold a valid entry at every index the profile names;
/// a complete frame has at least [`LandmarkProfile::min_points`] entries.
/// A short frame is an [`EstimatorError::OutOfRange`], never a partial
/// result. The output stays in keypoint space, unnormalized.
pub fn estimate_orientation(
    keypoints: &[Vector3],
    profile: &LandmarkProfile,
) -> Result<Vector3, EstimatorError> {
    let nose = keypoint_at(keypoints, profile.landmarks.nose)?;
    let left_cheek = keypoint_at(keypoints, profile.landmarks.left_cheek)?;
    let right_cheek = keypoint_at(keypoints, profile.landmarks.right_cheek)?;

    let left = nose - left_cheek;
    let right = nose - right_cheek;
    Ok(left.midpoint(right))
}

fn keypoint_at(keypoints: &[Vector3], index: usize) -> Result<Vector3, EstimatorError> {
    keypoints
        .get(index)
        .copied()
        .ok_or(EstimatorError::OutOfRange { index, len: keypoints.len() })
}
