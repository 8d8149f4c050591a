//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use holder::{
    Solid,
    aabb::Aabb,
    float_types::Real,
};
use nalgebra::Vector3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Compare two boxes corner by corner.
pub fn aabb_approx_eq(a: &Aabb, b: &Aabb, eps: Real) -> bool {
    (a.mins - b.mins).amax() < eps && (a.maxs - b.maxs).amax() < eps
}

/// Sharp-edged box of the given size centered at the origin.
pub fn cube(x: Real, y: Real, z: Real) -> Solid {
    Solid::cuboid(Vector3::new(x, y, z), 0.0).expect("positive box dimensions")
}
