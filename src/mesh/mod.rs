//! `TriMesh`: the triangle soup produced by meshing a signed distance field.

use crate::aabb::{self, Aabb};
use crate::float_types::{Real, tolerance};
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};

pub mod vertex;

pub use vertex::Vertex;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriMesh {
    /// Triangles wound counter-clockwise seen from outside, facet normal on every vertex.
    pub triangles: Vec<[Vertex; 3]>,
}

impl TriMesh {
    pub const fn new() -> Self {
        TriMesh {
            triangles: Vec::new(),
        }
    }

    /// Build a mesh from corner triples, computing facet normals from the winding.
    ///
    /// A (near) zero-area triangle has no winding normal; it keeps its slot in
    /// the surface and takes the normalized `hint` instead. Triangles with a
    /// non-finite corner, or degenerate with no usable hint, are dropped.
    pub fn from_facets<I>(facets: I) -> Self
    where
        I: IntoIterator<Item = ([Point3<Real>; 3], Vector3<Real>)>,
    {
        let eps = tolerance();
        let triangles = facets
            .into_iter()
            .filter_map(|([a, b, c], hint)| {
                if ![a, b, c].iter().all(|p| p.coords.iter().all(|v| v.is_finite())) {
                    return None;
                }
                let cross: Vector3<Real> = (b - a).cross(&(c - a));
                let n = cross
                    .try_normalize(eps)
                    .or_else(|| hint.try_normalize(eps))?;
                Some([Vertex::new(a, n), Vertex::new(b, n), Vertex::new(c, n)])
            })
            .collect();
        TriMesh { triangles }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounds of every vertex, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        aabb::from_points(self.triangles.iter().flatten().map(|v| &v.position))
    }
}

impl Triangulated3D for TriMesh {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for tri in &self.triangles {
            f(*tri);
        }
    }

    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
