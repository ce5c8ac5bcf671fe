//! Type providers: project a value type onto scalar dimensions and back.
//!
//! Interpolation engines never look at the concrete value type. They read each
//! dimension through a provider, blend the scalars, and ask the provider to
//! rebuild a value from the blended components.

use crate::error::SplineError;
use crate::value::{Vector2, Vector3};

/// Dimensional view of a value type.
pub trait TypeProvider {
    type Value;

    /// Number of scalar dimensions of [`Self::Value`].
    fn dimension_count(&self) -> usize;

    /// Scalar component `dimension` of `value`.
    fn dimension_value(&self, value: &Self::Value, dimension: usize) -> Result<f64, SplineError>;

    /// Distance between two values. Must be symmetric and non-negative.
    fn relative_position(&self, from: &Self::Value, to: &Self::Value) -> f64;

    /// Build a value from one scalar per dimension.
    fn create_instance(&self, dimensions: &[f64]) -> Result<Self::Value, SplineError>;

    /// All dimensions of `value`, in order.
    fn dimensions(&self, value: &Self::Value) -> Result<Vec<f64>, SplineError> {
        (0..self.dimension_count())
            .map(|d| self.dimension_value(value, d))
            .collect()
    }
}

fn expect_len<V>(dimensions: &[f64], expected: usize) -> Result<(), SplineError> {
    if dimensions.len() != expected {
        return Err(SplineError::dimension_mismatch::<V>(
            expected,
            dimensions.len(),
        ));
    }
    Ok(())
}

/// Provider for plain `f64` values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarProvider;

impl TypeProvider for ScalarProvider {
    type Value = f64;

    fn dimension_count(&self) -> usize {
        1
    }

    fn dimension_value(&self, value: &f64, dimension: usize) -> Result<f64, SplineError> {
        match dimension {
            0 => Ok(*value),
            _ => Err(SplineError::unsupported_dimension::<f64>(dimension)),
        }
    }

    fn relative_position(&self, from: &f64, to: &f64) -> f64 {
        (to - from).abs()
    }

    fn create_instance(&self, dimensions: &[f64]) -> Result<f64, SplineError> {
        expect_len::<f64>(dimensions, 1)?;
        Ok(dimensions[0])
    }
}

/// Provider for [`Vector2`] with Euclidean distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2Provider;

impl TypeProvider for Vector2Provider {
    type Value = Vector2;

    fn dimension_count(&self) -> usize {
        2
    }

    fn dimension_value(&self, value: &Vector2, dimension: usize) -> Result<f64, SplineError> {
        match dimension {
            0 => Ok(value.x),
            1 => Ok(value.y),
            _ => Err(SplineError::unsupported_dimension::<Vector2>(dimension)),
        }
    }

    fn relative_position(&self, from: &Vector2, to: &Vector2) -> f64 {
        from.distance_to(to)
    }

    fn create_instance(&self, dimensions: &[f64]) -> Result<Vector2, SplineError> {
        expect_len::<Vector2>(dimensions, 2)?;
        Ok(Vector2::new(dimensions[0], dimensions[1]))
    }
}

/// Provider for [`Vector3`] with Euclidean distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3Provider;

impl TypeProvider for Vector3Provider {
    type Value = Vector3;

    fn dimension_count(&self) -> usize {
        3
    }

    fn dimension_value(&self, value: &Vector3, dimension: usize) -> Result<f64, SplineError> {
        match dimension {
            0 => Ok(value.x),
            1 => Ok(value.y),
            2 => Ok(value.z),
            _ => Err(SplineError::unsupported_dimension::<Vector3>(dimension)),
        }
    }

    fn relative_position(&self, from: &Vector3, to: &Vector3) -> f64 {
        from.distance_to(to)
    }

    fn create_instance(&self, dimensions: &[f64]) -> Result<Vector3, SplineError> {
        expect_len::<Vector3>(dimensions, 3)?;
        Ok(Vector3::new(dimensions[0], dimensions[1], dimensions[2]))
    }
}

/// Provider for fixed-size `[f64; N]` arrays with Euclidean distance.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayProvider<const N: usize>;

impl<const N: usize> TypeProvider for ArrayProvider<N> {
    type Value = [f64; N];

    fn dimension_count(&self) -> usize {
        N
    }

    fn dimension_value(&self, value: &[f64; N], dimension: usize) -> Result<f64, SplineError> {
        value
            .get(dimension)
            .copied()
            .ok_or_else(|| SplineError::unsupported_dimension::<[f64; N]>(dimension))
    }

    fn relative_position(&self, from: &[f64; N], to: &[f64; N]) -> f64 {
        from.iter()
            .zip(to.iter())
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f64>()
            .sqrt()
    }

    fn create_instance(&self, dimensions: &[f64]) -> Result<[f64; N], SplineError> {
        expect_len::<[f64; N]>(dimensions, N)?;
        let mut out = [0.0; N];
        out.copy_from_slice(dimensions);
        Ok(out)
    }
}
