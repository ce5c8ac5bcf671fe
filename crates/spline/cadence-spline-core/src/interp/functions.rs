//! Cubic Hermite and Catmull-Rom helpers.
//!
//! Generic over any `T` supporting addition and scaling by `f64`; the engines use
//! them per dimension with `T = f64`.
use std::ops::{Add, Mul, Sub};

//------------------------------------------------------------------------------
// Hermite basis functions and their derivatives
fn hermite_basis_h00(t: f64) -> f64 {
    2.0 * t.powi(3) - 3.0 * t.powi(2) + 1.0
}
fn hermite_basis_h10(t: f64) -> f64 {
    t.powi(3) - 2.0 * t.powi(2) + t
}
fn hermite_basis_h01(t: f64) -> f64 {
    -2.0 * t.powi(3) + 3.0 * t.powi(2)
}
fn hermite_basis_h11(t: f64) -> f64 {
    t.powi(3) - t.powi(2)
}

fn hermite_basis_dh00(t: f64) -> f64 {
    6.0 * t.powi(2) - 6.0 * t
}
fn hermite_basis_dh10(t: f64) -> f64 {
    3.0 * t.powi(2) - 4.0 * t + 1.0
}
fn hermite_basis_dh01(t: f64) -> f64 {
    -6.0 * t.powi(2) + 6.0 * t
}
fn hermite_basis_dh11(t: f64) -> f64 {
    3.0 * t.powi(2) - 2.0 * t
}

/// Point on a cubic Hermite segment at parameter `t` in [0, 1].
///
/// H(t) = h00(t) * P0 + h10(t) * M0 + h01(t) * P1 + h11(t) * M1
pub fn hermite_spline<T>(
    point_start: T,
    point_end: T,
    tangent_start: T,
    tangent_end: T,
    t: f64,
) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    point_start * hermite_basis_h00(t)
        + tangent_start * hermite_basis_h10(t)
        + point_end * hermite_basis_h01(t)
        + tangent_end * hermite_basis_h11(t)
}

/// Derivative dH/dt of [`hermite_spline`].
pub fn hermite_derivative<T>(
    point_start: T,
    point_end: T,
    tangent_start: T,
    tangent_end: T,
    t: f64,
) -> T
where
    T: Copy + Add<Output = T> + Mul<f64, Output = T>,
{
    point_start * hermite_basis_dh00(t)
        + tangent_start * hermite_basis_dh10(t)
        + point_end * hermite_basis_dh01(t)
        + tangent_end * hermite_basis_dh11(t)
}

/// Cardinal tangent at a point from its neighbours: `(1 - tension) * (next - prev) / 2`.
/// Tension 0 gives Catmull-Rom.
#[inline]
pub fn cardinal_tangent<T>(prev_point: T, next_point: T, tension: f64) -> T
where
    T: Copy + Sub<Output = T> + Mul<f64, Output = T>,
{
    (next_point - prev_point) * ((1.0 - tension) * 0.5)
}

/// Point on a Catmull-Rom segment between `current_point` (t = 0) and `next_point` (t = 1).
pub fn catmull_rom_spline<T>(
    prev_point: T,
    current_point: T,
    next_point: T,
    next_next_point: T,
    t: f64,
) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>,
{
    let tangent_start = cardinal_tangent(prev_point, next_point, 0.0);
    let tangent_end = cardinal_tangent(current_point, next_next_point, 0.0);
    hermite_spline(current_point, next_point, tangent_start, tangent_end, t)
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
