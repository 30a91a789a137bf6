//! Landmark profile database.
//!
//! Maps the semantic landmarks the estimator needs (nose bridge and the
//! two outer cheek edges) to the fixed indices of a concrete landmark
//! model topology. Profiles are embedded at compile time from
//! `contrib/profiles/*.toml`.

use serde::Deserialize;
use std::sync::OnceLock;

/// Compile-time embedded profile for the 468-point MediaPipe Face Mesh.
const PROFILE_FACEMESH: &str = include_str!("../../../contrib/profiles/mediapipe-facemesh.toml");

/// Face Mesh with iris refinement: 10 extra points, same base indices.
const PROFILE_FACEMESH_IRIS: &str =
    include_str!("../../../contrib/profiles/mediapipe-facemesh-iris.toml");

/// Profile used when the caller does not name one.
pub const DEFAULT_PROFILE_NAME: &str = "mediapipe-facemesh";

static PROFILE_DB: OnceLock<Vec<ProfileFile>> = OnceLock::new();

/// Top-level profile file structure (one per `contrib/profiles/*.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileFile {
    pub profile: ProfileInfo,
    pub landmarks: LandmarkIndices,
}

/// Model identification fields from the `[profile]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInfo {
    pub name: String,
    /// Nominal number of keypoints the model emits per face.
    pub points: usize,
}

/// Keypoint indices from the `[landmarks]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LandmarkIndices {
    pub nose: usize,
    pub left_cheek: usize,
    pub right_cheek: usize,
}

/// Public alias used by the estimator and tracker.
pub type LandmarkProfile = ProfileFile;

impl ProfileFile {
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Smallest keypoint count that satisfies every index this profile
    /// names (largest index plus one).
    pub fn min_points(&self) -> usize {
        self.landmarks
            .nose
            .max(self.landmarks.left_cheek)
            .max(self.landmarks.right_cheek)
            + 1
    }
}

fn profile_db() -> &'static Vec<ProfileFile> {
    PROFILE_DB.get_or_init(|| {
        let mut db = Vec::new();
        for src in [PROFILE_FACEMESH, PROFILE_FACEMESH_IRIS] {
            match toml::from_str::<ProfileFile>(src) {
                Ok(p) => db.push(p),
                Err(e) => tracing::warn!(error = %e, "bad profile TOML, skipping"),
            }
        }
        db
    })
}

/// Look up a profile by model name.
/// Returns a `'static` reference into the embedded database.
pub fn lookup_profile(name: &str) -> Option<&'static LandmarkProfile> {
    profile_db().iter().find(|p| p.profile.name == name)
}

/// List all embedded profiles.
pub fn list_profiles() -> &'static [LandmarkProfile] {
    profile_db()
}

/// The default profile, the 468-point Face Mesh.
pub fn default_profile() -> &'static LandmarkProfile {
    lookup_profile(DEFAULT_PROFILE_NAME).expect("embedded default landmark profile must parse")
}
