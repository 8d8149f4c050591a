//! Construction errors

use crate::float_types::Real;
use crate::io::IoError;
use nalgebra::Point2;

/// All the possible validation issues we might encounter while building a solid
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A size, height or radius is non-positive or not finite
    #[error("(InvalidDimension) {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: Real },
    /// A ring has fewer than three distinct points
    #[error("(TooFewPoints) A polygon needs at least 3 vertices, got {0}")]
    TooFewPoints(usize),
    /// Two consecutive coords are identical
    #[error("(RepeatedPoint) Two consecutive coords are identical at: {0}")]
    RepeatedPoint(Point2<Real>),
    /// The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point2<Real>),
    /// The ring encloses no area
    #[error("(DegeneratePolygon) The polygon encloses zero area")]
    DegeneratePolygon,
    /// A polygon self-intersects
    #[error("(SelfIntersection) A polygon self-intersects at: {0}")]
    SelfIntersection(Point2<Real>),
    /// A transform cannot be inverted, so points cannot be mapped back into the operand
    #[error("(SingularTransform) The transform matrix is not invertible")]
    SingularTransform,
    /// Mesh resolution is zero or too fine for the mesher's grid
    #[error("(InvalidResolution) Mesh resolution must be at least 1 cell and fit 32-bit grid indices, got {0}")]
    InvalidResolution(usize),
    /// An assembly was finished without any positive volume
    #[error("(EmptyAssembly) An assembly needs at least one part before cutouts")]
    EmptyAssembly,
}

/// Any failure of the build-and-export pipeline.
#[derive(Debug, thiserror::Error)]
pub enum HolderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Fails with [`ValidationError::InvalidDimension`] unless `value` is positive and finite.
pub(crate) fn positive(name: &'static str, value: Real) -> Result<Real, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidDimension { name, value })
    }
}

/// Fails with [`ValidationError::InvalidDimension`] unless `value` is zero or positive and finite.
pub(crate) fn non_negative(name: &'static str, value: Real) -> Result<Real, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidDimension { name, value })
    }
}
