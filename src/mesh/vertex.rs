//! Struct for the `Vertex`s a triangle mesh is composed of.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex, holding position and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `position` – the position in model space
    /// * `normal`   – facet normal; it is **copied verbatim** into STL output
    pub const fn new(position: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { position, normal }
    }
}
