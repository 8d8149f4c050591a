//! Bounding boxes are parry's [`Aabb`]; these helpers cover what parry does not.

pub use crate::float_types::parry3d::bounding_volume::Aabb;

use crate::float_types::Real;
use nalgebra::{Matrix4, Point3, Vector3};

/// Box of the given size centered at the origin.
#[inline]
pub fn centered(size: Vector3<Real>) -> Aabb {
    let half = size * 0.5;
    Aabb::new(Point3::from(-half), Point3::from(half))
}

/// Smallest box holding every point; `None` for an empty iterator.
pub fn from_points<'a, I>(points: I) -> Option<Aabb>
where
    I: IntoIterator<Item = &'a Point3<Real>>,
{
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    let (mins, maxs) = iter.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    Some(Aabb::new(mins, maxs))
}

/// Overlap of two boxes. Disjoint boxes collapse to a zero-size box midway
/// between them instead of an inverted one.
pub fn overlap(a: &Aabb, b: &Aabb) -> Aabb {
    a.intersection(b).unwrap_or_else(|| {
        let mins = a.mins.sup(&b.mins);
        let maxs = a.maxs.inf(&b.maxs);
        let mid = nalgebra::center(&mins, &maxs);
        let pick = |lo: Real, hi: Real, m: Real| if lo <= hi { (lo, hi) } else { (m, m) };
        let (x0, x1) = pick(mins.x, maxs.x, mid.x);
        let (y0, y1) = pick(mins.y, maxs.y, mid.y);
        let (z0, z1) = pick(mins.z, maxs.z, mid.z);
        Aabb::new(Point3::new(x0, y0, z0), Point3::new(x1, y1, z1))
    })
}

/// Box enclosing the eight corners of `bb` mapped through a homogeneous matrix.
pub fn transformed(bb: &Aabb, matrix: &Matrix4<Real>) -> Aabb {
    let corners = bb.vertices().map(|c| matrix.transform_point(&c));
    // eight corners are never empty
    from_points(corners.iter()).unwrap_or(*bb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::parry3d::bounding_volume::BoundingVolume;

    #[test]
    fn centered_box_has_requested_size() {
        let bb = centered(Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(bb.extents(), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(bb.center(), Point3::origin());
    }

    #[test]
    fn merged_holds_both() {
        let a = centered(Vector3::new(2.0, 2.0, 2.0));
        let b = Aabb::new(Point3::new(2.0, -1.0, -1.0), Point3::new(4.0, 1.0, 1.0));
        let u = a.merged(&b);
        assert!(u.contains(&a));
        assert!(u.contains(&b));
        assert_eq!(u.extents().x, 5.0);
    }

    #[test]
    fn disjoint_overlap_is_empty() {
        let a = centered(Vector3::new(2.0, 2.0, 2.0));
        let b = Aabb::new(Point3::new(9.0, -1.0, -1.0), Point3::new(11.0, 1.0, 1.0));
        assert!(!a.intersects(&b));
        let i = overlap(&a, &b);
        assert_eq!(i.extents().x, 0.0);
        assert_eq!(i.mins.x, 5.0);
        assert_eq!(i.extents().y, 2.0);
    }

    #[test]
    fn rotated_box_swaps_axes() {
        let bb = centered(Vector3::new(2.0, 4.0, 6.0));
        let rot = nalgebra::Rotation3::from_axis_angle(&Vector3::x_axis(), 90.0_f64.to_radians() as Real)
            .to_homogeneous();
        let size = transformed(&bb, &rot).extents();
        assert!((size.y - 6.0).abs() < 1e-9);
        assert!((size.z - 4.0).abs() < 1e-9);
    }
}
