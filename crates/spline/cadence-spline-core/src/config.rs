//! Configuration for interpolation engines and baking.

use serde::{Deserialize, Serialize};

/// Spline shape parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    /// Cardinal spline tension. 0.0 gives Catmull-Rom tangents, 1.0 flattens
    /// every tangent to zero.
    pub tension: f64,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self { tension: 0.0 }
    }
}

/// Sampling parameters for [`crate::baking::bake`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakingConfig {
    /// Number of evenly spaced samples over the whole domain (first and last included).
    pub sample_count: usize,
    /// Also record the tangent at each sample.
    pub include_tangents: bool,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            sample_count: 60,
            include_tangents: false,
        }
    }
}
