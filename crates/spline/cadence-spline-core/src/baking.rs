//! Baking: sample an interpolation engine at evenly spaced fractions of its domain.

use serde::{Deserialize, Serialize};

use crate::config::BakingConfig;
use crate::error::SplineError;
use crate::interp::Interpolation;
use crate::interval::Interval;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedSample<V> {
    pub position: f64,
    pub value: V,
    /// Present when [`BakingConfig::include_tangents`] is set.
    pub tangent: Option<V>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedCurve<V> {
    pub domain: Interval<f64>,
    pub samples: Vec<BakedSample<V>>,
}

/// Bake `engine` using `cfg`. The first and last samples land exactly on the
/// domain bounds.
pub fn bake<I: Interpolation>(
    engine: &I,
    cfg: &BakingConfig,
) -> Result<BakedCurve<I::Value>, SplineError> {
    let domain = engine.domain()?;
    let mut samples = Vec::with_capacity(cfg.sample_count);
    for i in 0..cfg.sample_count {
        let fraction = if cfg.sample_count == 1 {
            0.0
        } else {
            i as f64 / (cfg.sample_count - 1) as f64
        };
        let position = engine.position_for(fraction)?;
        let value = engine.value_at(position)?;
        let tangent = if cfg.include_tangents {
            Some(engine.tangent_at(position)?)
        } else {
            None
        };
        samples.push(BakedSample {
            position,
            value,
            tangent,
        });
    }
    Ok(BakedCurve { domain, samples })
}
