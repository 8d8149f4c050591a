//! Grid shape definition for surface nets

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::TriMesh;
use fast_surface_nets::{SurfaceNetsBuffer, surface_nets};
use nalgebra::{Point3, Vector3};
use tracing::{debug, warn};

/// The shape describing our discrete grid for Surface Nets:
#[derive(Clone, Copy, Debug)]
pub struct GridShape {
    pub nx: u32,
    pub ny: u32,
    pub nz: u32,
}

impl fast_surface_nets::ndshape::Shape<3> for GridShape {
    type Coord = u32;

    #[inline]
    fn as_array(&self) -> [Self::Coord; 3] {
        [self.nx, self.ny, self.nz]
    }

    fn size(&self) -> Self::Coord {
        self.nx * self.ny * self.nz
    }

    fn usize(&self) -> usize {
        (self.nx * self.ny * self.nz) as usize
    }

    fn linearize(&self, coords: [Self::Coord; 3]) -> u32 {
        let [x, y, z] = coords;
        (z * self.ny + y) * self.nx + x
    }

    fn delinearize(&self, i: u32) -> [Self::Coord; 3] {
        let x = i % self.nx;
        let yz = i / self.nx;
        let y = yz % self.ny;
        let z = yz / self.ny;
        [x, y, z]
    }
}

/// Sample points of a field: `shape` points per axis from `min` with spacing `step`.
#[derive(Clone, Copy, Debug)]
pub struct Lattice {
    pub shape: GridShape,
    pub min: Point3<Real>,
    pub step: Vector3<Real>,
}

impl Lattice {
    /// Lattice with `resolution` points per axis spanning `min_pt..=max_pt`.
    /// Each axis gets at least two points; the total must fit in `u32`.
    pub fn new(
        resolution: (usize, usize, usize),
        min_pt: Point3<Real>,
        max_pt: Point3<Real>,
    ) -> Result<Self, ValidationError> {
        let axis = |n: usize| {
            u32::try_from(n.max(2)).map_err(|_| ValidationError::InvalidResolution(n))
        };
        let (nx, ny, nz) = (axis(resolution.0)?, axis(resolution.1)?, axis(resolution.2)?);
        nx.checked_mul(ny)
            .and_then(|nxy| nxy.checked_mul(nz))
            .ok_or(ValidationError::InvalidResolution(
                resolution.0.max(resolution.1).max(resolution.2),
            ))?;

        let step = Vector3::new(
            (max_pt.x - min_pt.x) / (nx as Real - 1.0),
            (max_pt.y - min_pt.y) / (ny as Real - 1.0),
            (max_pt.z - min_pt.z) / (nz as Real - 1.0),
        );

        Ok(Lattice {
            shape: GridShape { nx, ny, nz },
            min: min_pt,
            step,
        })
    }

    /// Total number of samples.
    #[inline]
    pub const fn sample_count(&self) -> usize {
        self.shape.nx as usize * self.shape.ny as usize * self.shape.nz as usize
    }

    /// World position of the `i`-th sample in linear order.
    #[inline]
    pub fn point(&self, i: usize) -> Point3<Real> {
        let GridShape { nx, ny, .. } = self.shape;
        let iz = i / (nx * ny) as usize;
        let remainder = i % (nx * ny) as usize;
        let iy = remainder / nx as usize;
        let ix = remainder % nx as usize;

        Point3::new(
            self.min.x + ix as Real * self.step.x,
            self.min.y + iy as Real * self.step.y,
            self.min.z + iz as Real * self.step.z,
        )
    }

    #[inline]
    fn to_world(&self, p: [f32; 3]) -> Point3<Real> {
        Point3::new(
            self.min.x + p[0] as Real * self.step.x,
            self.min.y + p[1] as Real * self.step.y,
            self.min.z + p[2] as Real * self.step.z,
        )
    }

    /// Field gradient in grid units converted to world units.
    #[inline]
    fn to_world_gradient(&self, n: [f32; 3]) -> Vector3<Real> {
        Vector3::new(
            n[0] as Real / self.step.x,
            n[1] as Real / self.step.y,
            n[2] as Real / self.step.z,
        )
    }
}

/// Field value stored for one sample. Non-finite distances count as far outside.
#[inline]
pub(crate) fn sample<F>(sdf: &F, p: &Point3<Real>, iso_value: Real) -> f32
where
    F: Fn(&Point3<Real>) -> Real,
{
    let sdf_val = sdf(p);
    if sdf_val.is_finite() {
        (sdf_val - iso_value) as f32
    } else {
        1e10_f32
    }
}

/// Run surface nets over a sampled field and turn the quads into world-space triangles.
///
/// Winding is flipped where needed so every facet normal agrees with the
/// field gradient, i.e. points out of the solid. Zero-area triangles are kept
/// with the gradient as their normal so the surface stays closed.
pub(crate) fn extract(field: &[f32], lattice: &Lattice) -> TriMesh {
    let shape = lattice.shape;
    let mut sn_buffer = SurfaceNetsBuffer::default();
    surface_nets(
        field,
        &shape,
        [0, 0, 0],
        [shape.nx - 1, shape.ny - 1, shape.nz - 1],
        &mut sn_buffer,
    );

    let facets = sn_buffer.indices.chunks_exact(3).map(|tri| {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let p0 = lattice.to_world(sn_buffer.positions[i0]);
        let p1 = lattice.to_world(sn_buffer.positions[i1]);
        let p2 = lattice.to_world(sn_buffer.positions[i2]);

        let gradient = lattice.to_world_gradient(sn_buffer.normals[i0])
            + lattice.to_world_gradient(sn_buffer.normals[i1])
            + lattice.to_world_gradient(sn_buffer.normals[i2]);
        let facet = (p1 - p0).cross(&(p2 - p0));

        let corners = if facet.dot(&gradient) < 0.0 {
            [p0, p2, p1]
        } else {
            [p0, p1, p2]
        };
        (corners, gradient)
    });
    let mesh = TriMesh::from_facets(facets);

    let produced = sn_buffer.indices.len() / 3;
    debug!(
        nx = shape.nx,
        ny = shape.ny,
        nz = shape.nz,
        triangles = mesh.len(),
        "surface nets finished"
    );
    if mesh.len() < produced {
        warn!(
            dropped = produced - mesh.len(),
            "dropped triangles with no usable normal from surface nets output"
        );
    }
    mesh
}
