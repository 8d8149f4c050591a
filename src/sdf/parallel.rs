//! Parallel implementation of SDF meshing

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use crate::sdf::grid::{Lattice, extract, sample};
use crate::sdf::traits::SdfOps;
use nalgebra::Point3;
use rayon::prelude::*;

/// Parallel implementation of SDF meshing; only field sampling is split across threads.
pub struct ParallelSdfOps;

impl ParallelSdfOps {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ParallelSdfOps {
    fn default() -> Self {
        Self::new()
    }
}

impl SdfOps for ParallelSdfOps {
    fn mesh<F>(
        &self,
        sdf: F,
        resolution: (usize, usize, usize),
        min_pt: Point3<Real>,
        max_pt: Point3<Real>,
        iso_value: Real,
    ) -> Result<TriMesh, ValidationError>
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send,
    {
        let lattice = Lattice::new(resolution, min_pt, max_pt)?;

        let mut field_values = vec![0.0_f32; lattice.sample_count()];
        field_values.par_iter_mut().enumerate().for_each(|(i, value)| {
            *value = sample(&sdf, &lattice.point(i), iso_value);
        });

        Ok(extract(&field_values, &lattice))
    }
}
