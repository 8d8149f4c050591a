//! Traits defining SDF meshing operations for dependency inversion

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use nalgebra::Point3;

/// Core SDF meshing operations trait
pub trait SdfOps {
    /// Create a mesh from an SDF sampled on `resolution` points per axis
    /// spanning `min_pt..=max_pt`; the surface is the `iso_value` level set.
    ///
    /// Fails with [`ValidationError::InvalidResolution`] when the lattice does
    /// not fit the 32-bit grid indices of the mesher.
    fn mesh<F>(
        &self,
        sdf: F,
        resolution: (usize, usize, usize),
        min_pt: Point3<Real>,
        max_pt: Point3<Real>,
        iso_value: Real,
    ) -> Result<TriMesh, ValidationError>
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send;
}
