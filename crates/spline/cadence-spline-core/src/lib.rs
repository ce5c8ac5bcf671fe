//! Cadence spline core
//!
//! Generic key point interpolation. A [`TypeProvider`] projects any value type
//! onto scalar dimensions; key point collections keep (position, value) samples
//! sorted; the engines ([`CardinalSpline`], [`LinearInterpolation`]) evaluate
//! values and tangents at absolute positions or at fractions of the domain.

pub mod baking;
pub mod config;
pub mod error;
pub mod interp;
pub mod interval;
pub mod keypoint;
pub mod provider;
pub mod search;
pub mod stored;
pub mod value;

pub use baking::{bake, BakedCurve, BakedSample};
pub use config::{BakingConfig, SplineConfig};
pub use error::SplineError;
pub use interp::{CardinalSpline, Interpolation, LinearInterpolation};
pub use interval::{Interval, IntervalBound, SplitOption};
pub use keypoint::{AbsoluteKeyPoints, CumulativeKeyPoints, KeyPoint, KeyPoints};
pub use provider::{ArrayProvider, ScalarProvider, TypeProvider, Vector2Provider, Vector3Provider};
pub use search::{binary_search, search_sorted, SearchOutcome};
pub use stored::{parse_key_points_json, to_key_points_json};
pub use value::{Vector2, Vector3};

/// Result type for spline operations
pub type Result<T> = core::result::Result<T, SplineError>;
