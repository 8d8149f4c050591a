use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Isometry3, Matrix4, Translation3, UnitQuaternion, Vector3};

/// Boolean operations + transformations
///
/// Every operation consumes its operands and returns a new value; nothing is
/// mutated in place.
pub trait CSGOps: Sized + Clone {
    fn union(self, other: Self) -> Self;
    fn difference(self, other: Self) -> Self;
    fn intersection(self, other: Self) -> Self;
    /// Apply a rigid motion. Always invertible, so it cannot fail.
    fn isometry(self, isometry: &Isometry3<Real>) -> Self;
    /// Apply a general homogeneous matrix, which must be invertible.
    fn transform(self, matrix: &Matrix4<Real>) -> Result<Self, ValidationError>;
    fn bounding_box(&self) -> Aabb;

    /// Returns a new Self translated by vector.
    fn translate_vector(self, vector: Vector3<Real>) -> Self {
        self.isometry(&Isometry3::from_parts(
            Translation3::from(vector),
            UnitQuaternion::identity(),
        ))
    }

    /// Returns a new Self translated by x, y, and z.
    fn translate(self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }

    /// Returns a new Self translated so that its bounding-box center is at the origin (0,0,0).
    fn center(self) -> Self {
        let center = self.bounding_box().center();
        self.translate(-center.x, -center.y, -center.z)
    }

    /// Translates the object so that its bottommost point(s) sit exactly at z=0.
    fn float(self) -> Self {
        let min_z = self.bounding_box().mins.z;
        self.translate(0.0, 0.0, -min_z)
    }

    /// Rotates by x_degrees, y_degrees, z_degrees (X first, then Y, then Z)
    fn rotate(self, x_deg: Real, y_deg: Real, z_deg: Real) -> Self {
        let rot = UnitQuaternion::from_euler_angles(
            x_deg.to_radians(),
            y_deg.to_radians(),
            z_deg.to_radians(),
        );
        self.isometry(&Isometry3::from_parts(Translation3::identity(), rot))
    }

    /// Rotates about the X axis.
    fn rotate_x(self, deg: Real) -> Self {
        self.rotate(deg, 0.0, 0.0)
    }
}
