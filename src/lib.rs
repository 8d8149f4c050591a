//! A parametric, 3D-printable **holder** for a controller board and an audio
//! jack, modeled with signed distance fields.
//!
//! Primitive solids (boxes, cylinders, extruded polygons) are placed with
//! rigid transforms and combined with boolean *union* and *difference*. The
//! finished solid is pre-scaled for material shrinkage, meshed with
//! [surface nets](https://crates.io/crates/fast-surface-nets) and written as
//! [STL](https://en.wikipedia.org/wiki/STL_(file_format)).
//!
//! ```no_run
//! use holder::design::{HolderParams, OUTPUT_FILE, export_holder};
//!
//! let report = export_holder(&HolderParams::full(), OUTPUT_FILE)?;
//! println!("{} triangles", report.triangles);
//! # Ok::<(), holder::errors::HolderError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to sample the distance field

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod design;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod sdf;
pub mod sketch;
pub mod traits;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use sdf::Solid;
pub use traits::CSGOps;
