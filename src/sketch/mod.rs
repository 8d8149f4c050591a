//! 2D cross-sections used by extrusions.

pub mod polygon;

pub use polygon::{Polygon2, Profile};
