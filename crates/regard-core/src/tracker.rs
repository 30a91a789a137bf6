//! Attention tracking against a calibrated reference orientation.
//!
//! One tracker follows one face. The capture loop feeds it a keypoint
//! frame per tick via [`AttentionTracker::refresh`]; the application
//! calls [`AttentionTracker::set_reference`] at the moment the subject
//! confirms they are looking at the point of interest. From then on
//! [`AttentionTracker::is_focused`] answers whether they still are.

use crate::estimator::{estimate_orientation, EstimatorError};
use crate::profile::{default_profile, LandmarkProfile};
use crate::types::{FocusOffset, Vector3};

/// Focus margin applied when none is configured, in keypoint-space units.
pub const DEFAULT_FOCUS_MARGIN: f32 = 20.0;

/// Tracks whether a face is still oriented toward a calibrated reference.
pub struct AttentionTracker {
    current: Option<Vector3>,
    reference: Option<Vector3>,
    focus_margin: f32,
    profile: LandmarkProfile,
}

impl AttentionTracker {
    /// Tracker with the default margin and the default landmark profile.
    pub fn new() -> Self {
        Self::with_margin(DEFAULT_FOCUS_MARGIN)
    }

    /// Tracker with a custom focus margin.
    /// The margin is fixed for the tracker's lifetime.
    pub fn with_margin(focus_margin: f32) -> Self {
        Self::with_profile(default_profile().clone(), focus_margin)
    }

    /// Tracker bound to a specific landmark profile.
    pub fn with_profile(profile: LandmarkProfile, focus_margin: f32) -> Self {
        Self { current: None, reference: None, focus_margin, profile }
    }

    /// Recompute the current orientation from a fresh keypoint frame.
    ///
    /// Overwrites the previous reading. On a short frame the error
    /// propagates and the previous reading is kept.
    pub fn refresh(&mut self, keypoints: &[Vector3]) -> Result<(), EstimatorError> {
        let orientation = estimate_orientation(keypoints, &self.profile)?;
        tracing::trace!(x = orientation.x, y = orientation.y, z = orientation.z, "refreshed");
        self.current = Some(orientation);
        Ok(())
    }

    /// Snapshot the current orientation as the reference, by value.
    /// Later refreshes do not move a reference taken earlier.
    ///
    /// Before any successful refresh there is nothing to snapshot and the
    /// reference becomes absent.
    pub fn set_reference(&mut self) {
        self.reference = self.current;
        match self.reference {
            Some(r) => tracing::debug!(x = r.x, y = r.y, z = r.z, "reference calibrated"),
            None => tracing::debug!("reference cleared, no orientation measured yet"),
        }
    }

    /// Most recent orientation, absent until a frame has been processed.
    pub fn orientation(&self) -> Option<Vector3> {
        self.current
    }

    /// Calibrated reference orientation, absent until calibration.
    pub fn reference(&self) -> Option<Vector3> {
        self.reference
    }

    pub fn focus_margin(&self) -> f32 {
        self.focus_margin
    }

    /// Landmark profile this tracker reads keypoint frames with.
    pub fn profile(&self) -> &LandmarkProfile {
        &self.profile
    }

    /// Per-axis absolute offset from the reference.
    ///
    /// Absent until both a reading and a reference exist. Only x and y
    /// participate; z is excluded from the focus metric.
    pub fn distance_to_reference(&self) -> Option<FocusOffset> {
        let current = self.current?;
        let reference = self.reference?;
        Some(FocusOffset {
            x: (current.x - reference.x).abs(),
            y: (current.y - reference.y).abs(),
        })
    }

    /// True iff the current orientation sits strictly inside the focus
    /// margin on both axes. Without a reading or a reference this is
    /// false, never an error.
    pub fn is_focused(&self) -> bool {
        match self.distance_to_reference() {
            Some(offset) => offset.within_margin(self.focus_margin),
            None => false,
        }
    }
}

impl Default for AttentionTracker {
    fn default() -> Self {
        Self::new()
    }
}
