//! regard-core — Face orientation estimation and attention tracking.
//!
//! Turns facial landmark keypoints into a 3-D orientation vector and
//! compares it against a calibrated reference to decide whether the
//! subject is still looking at the point of interest. The landmark
//! detector and the capture pipeline live outside this crate.

pub mod estimator;
pub mod profile;
pub mod tracker;
pub mod types;

pub use estimator::{estimate_orientation, EstimatorError};
pub use profile::{
    default_profile, list_profiles, lookup_profile, LandmarkProfile, DEFAULT_PROFILE_NAME,
};
pub use tracker::{AttentionTracker, DEFAULT_FOCUS_MARGIN};
pub use types::{FaceBox, FocusOffset, Vector3};
