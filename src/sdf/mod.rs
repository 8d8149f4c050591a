//! Signed Distance Field (SDF) solids and their meshing
//!
//! A [`Solid`] is an immutable tree of primitives, transforms and boolean
//! nodes. Evaluating the tree at a point yields the signed distance to its
//! surface (negative inside). Meshing samples that field on a grid and
//! extracts the surface with [fast-surface-nets](https://crates.io/crates/fast-surface-nets),
//! with dependency inversion allowing for different sampling implementations
//! (serial/parallel).
//!
//! # Centering contract
//!
//! Every primitive constructor returns a solid centered at the origin on all
//! three axes, and its bounding box equals the requested size exactly.
//! Placement code relies on this: lifting a primitive onto the build plate is
//! `translate(0, 0, size.z / 2)`, which is what [`CSGOps::float`] does.

pub mod grid;
pub(crate) mod node;
pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use grid::GridShape;
pub use traits::SdfOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSdfOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSdfOps;

use crate::aabb::{self, Aabb};
use crate::errors::{ValidationError, non_negative, positive};
use crate::float_types::Real;
use crate::float_types::parry3d::bounding_volume::BoundingVolume;
use crate::mesh::TriMesh;
use crate::sketch::Profile;
use crate::traits::CSGOps;
use nalgebra::{Isometry3, Matrix4, Point3, Vector3};
use node::Node;
use std::sync::Arc;
use tracing::debug;

/// An immutable solid described by its signed distance function.
///
/// Cloning is cheap: the node tree is shared, never mutated.
#[derive(Clone, Debug)]
pub struct Solid {
    node: Arc<Node>,
    bounding_box: Aabb,
}

impl Solid {
    fn from_node(node: Node, bounding_box: Aabb) -> Self {
        Solid {
            node: Arc::new(node),
            bounding_box,
        }
    }

    /// Rectangular prism of `size`, centered at the origin, with edges rounded by
    /// `rounding_radius` (0 for sharp edges).
    ///
    /// The radius is clamped to half the smallest side so the outer size never changes.
    pub fn cuboid(size: Vector3<Real>, rounding_radius: Real) -> Result<Self, ValidationError> {
        positive("box width", size.x)?;
        positive("box length", size.y)?;
        positive("box height", size.z)?;
        non_negative("box rounding radius", rounding_radius)?;

        let half = size * 0.5;
        let round = rounding_radius.min(half.min());
        Ok(Self::from_node(Node::Cuboid { half, round }, aabb::centered(size)))
    }

    /// Cylinder along Z, centered at the origin.
    pub fn cylinder(
        height: Real,
        radius: Real,
        rounding_radius: Real,
    ) -> Result<Self, ValidationError> {
        positive("cylinder height", height)?;
        positive("cylinder radius", radius)?;
        non_negative("cylinder rounding radius", rounding_radius)?;

        let half_height = height * 0.5;
        let round = rounding_radius.min(radius).min(half_height);
        Ok(Self::from_node(
            Node::Cylinder {
                half_height,
                radius,
                round,
            },
            aabb::centered(Vector3::new(2.0 * radius, 2.0 * radius, height)),
        ))
    }

    /// Prism of `height` along Z over a validated polygon profile, centered on Z.
    ///
    /// X and Y keep the profile's own coordinates.
    pub fn extrude(profile: &Profile, height: Real) -> Result<Self, ValidationError> {
        positive("extrusion height", height)?;

        let half_height = height * 0.5;
        let (lo, hi) = profile.bounds();
        let bounding_box = Aabb::new(
            Point3::new(lo.x, lo.y, -half_height),
            Point3::new(hi.x, hi.y, half_height),
        );
        Ok(Self::from_node(
            Node::Extrusion {
                profile: profile.clone(),
                half_height,
            },
            bounding_box,
        ))
    }

    /// Uniformly scale about the origin.
    pub fn scale_uniform(self, factor: Real) -> Result<Self, ValidationError> {
        positive("scale factor", factor)?;
        let bounding_box = self.bounding_box.scaled(&Vector3::repeat(factor));
        Ok(Self::from_node(
            Node::Scale {
                factor,
                inner: self,
            },
            bounding_box,
        ))
    }

    /// Signed distance from `p` to the surface, negative inside.
    #[inline]
    pub fn distance(&self, p: &Point3<Real>) -> Real {
        self.node.distance(p)
    }

    /// True if `p` is inside or on the surface.
    #[inline]
    pub fn contains(&self, p: &Point3<Real>) -> bool {
        self.distance(p) <= 0.0
    }

    /// Mesh the surface with `cells` grid cells along the longest bounding-box axis.
    ///
    /// Cells are cubes; the grid is padded by one cell on every side so the
    /// surface closes. A solid with an empty bounding box meshes to nothing.
    pub fn mesh(&self, cells: usize) -> Result<TriMesh, ValidationError> {
        if cells == 0 {
            return Err(ValidationError::InvalidResolution(cells));
        }

        let size = self.bounding_box.extents();
        let longest = size.x.max(size.y).max(size.z);
        if !(longest.is_finite() && longest > 0.0) {
            return Ok(TriMesh::new());
        }

        let step = longest / cells as Real;
        let too_fine = || ValidationError::InvalidResolution(cells);
        // grid points per axis: one cell of padding on each side, plus the closing point
        let points = |extent: Real| {
            let n = (extent / step).ceil() + 3.0;
            if n.is_finite() && n <= u32::MAX as Real {
                Ok(n as usize)
            } else {
                Err(too_fine())
            }
        };
        let (px, py, pz) = (points(size.x)?, points(size.y)?, points(size.z)?);
        (px as u64)
            .checked_mul(py as u64)
            .and_then(|n| n.checked_mul(pz as u64))
            .filter(|&n| n <= u32::MAX as u64)
            .ok_or_else(too_fine)?;
        let (nx, ny, nz) = (px - 1, py - 1, pz - 1);
        let half = Vector3::new(nx as Real, ny as Real, nz as Real) * (step * 0.5);
        let center = self.bounding_box.center();
        debug!(step, nx, ny, nz, "meshing solid");

        #[cfg(not(feature = "parallel"))]
        let ops = SerialSdfOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelSdfOps::new();

        ops.mesh(
            |p: &Point3<Real>| self.distance(p),
            (px, py, pz),
            center - half,
            center + half,
            0.0,
        )
    }
}

impl CSGOps for Solid {
    fn union(self, other: Self) -> Self {
        let bounding_box = self.bounding_box.merged(&other.bounding_box);
        Self::from_node(Node::Union(self, other), bounding_box)
    }

    /// The result never grows past `self`, so its box is `self`'s box.
    fn difference(self, other: Self) -> Self {
        let bounding_box = self.bounding_box;
        Self::from_node(Node::Difference(self, other), bounding_box)
    }

    fn intersection(self, other: Self) -> Self {
        let bounding_box = aabb::overlap(&self.bounding_box, &other.bounding_box);
        Self::from_node(Node::Intersection(self, other), bounding_box)
    }

    fn isometry(self, isometry: &Isometry3<Real>) -> Self {
        let bounding_box = self.bounding_box.transform_by(isometry);
        Self::from_node(
            Node::Isometry {
                isometry: *isometry,
                inner: self,
            },
            bounding_box,
        )
    }

    /// Distances through a non-rigid matrix are only a bound, not exact.
    fn transform(self, matrix: &Matrix4<Real>) -> Result<Self, ValidationError> {
        if !matrix.iter().all(|v| v.is_finite()) {
            return Err(ValidationError::SingularTransform);
        }
        let inverse = matrix
            .try_inverse()
            .ok_or(ValidationError::SingularTransform)?;
        let bounding_box = aabb::transformed(&self.bounding_box, matrix);
        Ok(Self::from_node(
            Node::Affine {
                inverse,
                inner: self,
            },
            bounding_box,
        ))
    }

    fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translated_box_moves_its_field() {
        let b = Solid::cuboid(Vector3::new(2.0, 2.0, 2.0), 0.0)
            .unwrap()
            .translate(10.0, 0.0, 0.0);
        assert!(b.contains(&Point3::new(10.0, 0.0, 0.0)));
        assert!(!b.contains(&Point3::origin()));
        assert_eq!(b.bounding_box().mins.x, 9.0);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let b = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), 0.0).unwrap();
        let flat = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(
            b.transform(&flat).unwrap_err(),
            ValidationError::SingularTransform
        );
    }

    #[test]
    fn zero_cells_is_rejected() {
        let b = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), 0.0).unwrap();
        assert_eq!(b.mesh(0).unwrap_err(), ValidationError::InvalidResolution(0));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let b = Solid::cuboid(Vector3::new(1.0, 1.0, 1.0), 0.0).unwrap();
        // an axis that does not fit 32-bit grid indices
        let wide = (1_usize << 32) + 4;
        assert_eq!(b.mesh(wide).unwrap_err(), ValidationError::InvalidResolution(wide));
        assert_eq!(
            b.mesh(usize::MAX).unwrap_err(),
            ValidationError::InvalidResolution(usize::MAX)
        );
        // every axis fits but the sample count does not
        assert_eq!(
            b.mesh(2000).unwrap_err(),
            ValidationError::InvalidResolution(2000)
        );
    }

    #[test]
    fn rounding_is_clamped() {
        let b = Solid::cuboid(Vector3::new(1.0, 4.0, 4.0), 3.0).unwrap();
        assert_eq!(b.bounding_box().extents(), Vector3::new(1.0, 4.0, 4.0));
        assert!(b.contains(&Point3::origin()));
    }
}
