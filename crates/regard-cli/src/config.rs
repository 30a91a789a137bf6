//! CLI configuration from `REGARD_*` environment variables.
//!
//! Command-line flags win over the environment, the environment over the
//! built-in defaults.

use anyhow::{bail, Result};
use regard_core::{default_profile, lookup_profile, LandmarkProfile, DEFAULT_FOCUS_MARGIN};

/// Focus margin: `--margin` flag, else `REGARD_FOCUS_MARGIN`, else the
/// default of 20 keypoint units.
pub fn resolve_margin(flag: Option<f32>) -> f32 {
    flag.unwrap_or_else(|| env_f32("REGARD_FOCUS_MARGIN", DEFAULT_FOCUS_MARGIN))
}

/// Landmark profile: `--profile` flag, else `REGARD_PROFILE`, else the
/// embedded default. Unknown names are an error, not a silent fallback.
pub fn resolve_profile(flag: Option<&str>) -> Result<&'static LandmarkProfile> {
    let name = match flag {
        Some(name) => name.to_string(),
        None => match std::env::var("REGARD_PROFILE") {
            Ok(name) => name,
            Err(_) => return Ok(default_profile()),
        },
    };
    match lookup_profile(&name) {
        Some(profile) => Ok(profile),
        None => bail!("unknown landmark profile {name:?} (see `regard profiles`)"),
    }
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
