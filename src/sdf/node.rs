//! Distance functions for every node kind of a [`Solid`](super::Solid) tree.

use super::Solid;
use crate::float_types::Real;
use crate::sketch::Profile;
use nalgebra::{Isometry3, Matrix4, Point2, Point3, Vector2, Vector3};

#[derive(Debug)]
pub(crate) enum Node {
    /// Box centered at the origin; `round` never exceeds the smallest half extent.
    Cuboid { half: Vector3<Real>, round: Real },
    /// Cylinder along Z centered at the origin.
    Cylinder {
        half_height: Real,
        radius: Real,
        round: Real,
    },
    /// Polygon prism along Z spanning `[-half_height, half_height]`.
    Extrusion { profile: Profile, half_height: Real },
    Isometry {
        isometry: Isometry3<Real>,
        inner: Solid,
    },
    /// General matrix; only the inverse is needed to evaluate.
    Affine { inverse: Matrix4<Real>, inner: Solid },
    Scale { factor: Real, inner: Solid },
    Union(Solid, Solid),
    Difference(Solid, Solid),
    Intersection(Solid, Solid),
}

impl Node {
    pub(crate) fn distance(&self, p: &Point3<Real>) -> Real {
        match self {
            Node::Cuboid { half, round } => cuboid(p, half, *round),
            Node::Cylinder {
                half_height,
                radius,
                round,
            } => cylinder(p, *half_height, *radius, *round),
            Node::Extrusion {
                profile,
                half_height,
            } => {
                let d = profile.distance(&Point2::new(p.x, p.y));
                extrude(d, p.z.abs() - half_height)
            },
            Node::Isometry { isometry, inner } => {
                inner.distance(&isometry.inverse_transform_point(p))
            },
            Node::Affine { inverse, inner } => inner.distance(&inverse.transform_point(p)),
            Node::Scale { factor, inner } => factor * inner.distance(&(p / *factor)),
            Node::Union(a, b) => a.distance(p).min(b.distance(p)),
            Node::Difference(a, b) => a.distance(p).max(-b.distance(p)),
            Node::Intersection(a, b) => a.distance(p).max(b.distance(p)),
        }
    }
}

/// Rounded box: `round` is carved out of the half extents so the outer size is preserved.
fn cuboid(p: &Point3<Real>, half: &Vector3<Real>, round: Real) -> Real {
    let q = p.coords.abs() - half.add_scalar(-round);
    let outside = q.map(|v| v.max(0.0)).norm();
    let inside = q.x.max(q.y).max(q.z).min(0.0);
    outside + inside - round
}

fn cylinder(p: &Point3<Real>, half_height: Real, radius: Real, round: Real) -> Real {
    let d = Vector2::new(
        Vector2::new(p.x, p.y).norm() - (radius - round),
        p.z.abs() - (half_height - round),
    );
    d.x.max(d.y).min(0.0) + d.map(|v| v.max(0.0)).norm() - round
}

/// Combine a 2D cross-section distance with the distance to the extrusion caps.
fn extrude(d: Real, w: Real) -> Real {
    d.max(w).min(0.0) + Vector2::new(d.max(0.0), w.max(0.0)).norm()
}
