//! Shrink compensation, meshing and STL output.

use super::assembly::holder;
use super::params::HolderParams;
use crate::aabb::Aabb;
use crate::errors::HolderError;
use crate::io::{IoError, write_stl_file};
use crate::mesh::TriMesh;
use crate::sdf::Solid;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output file, written to the working directory.
pub const OUTPUT_FILE: &str = "holder.stl";

/// What an export produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub triangles: usize,
    /// Bounds of the written mesh.
    pub bounding_box: Aabb,
}

/// Mesh `solid` at `resolution` cells along its longest axis.
///
/// An empty result is an error: there is nothing to print.
pub fn render(solid: &Solid, resolution: usize) -> Result<TriMesh, HolderError> {
    let mesh = solid.mesh(resolution)?;
    if mesh.is_empty() {
        return Err(IoError::EmptyMesh.into());
    }
    info!(resolution, triangles = mesh.len(), "meshed solid");
    Ok(mesh)
}

/// Mesh `solid` and write it to `path` as binary STL.
pub fn render_stl(
    solid: &Solid,
    resolution: usize,
    path: &Path,
) -> Result<ExportReport, HolderError> {
    let mesh = render(solid, resolution)?;
    let bounding_box = mesh.bounding_box().ok_or(IoError::EmptyMesh)?;
    write_stl_file(&mesh, path)?;
    Ok(ExportReport {
        path: path.to_path_buf(),
        triangles: mesh.len(),
        bounding_box,
    })
}

/// The holder with the shrink compensation of `params` applied.
pub fn scaled_holder(params: &HolderParams) -> Result<Solid, HolderError> {
    Ok(holder(params)?.scale_uniform(params.shrink)?)
}

/// Build, scale, mesh and write the holder.
pub fn export_holder(
    params: &HolderParams,
    path: impl AsRef<Path>,
) -> Result<ExportReport, HolderError> {
    let solid = scaled_holder(params)?;
    render_stl(&solid, params.resolution, path.as_ref())
}
