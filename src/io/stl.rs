use crate::io::IoError;
use crate::triangulated::Triangulated3D;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::info;

/// Export to ASCII STL
/// Convert a triangulated shape to an **ASCII STL** string with the given `name`.
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.position;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The 80-byte header is left blank by `stl_io`, so `_name` is not stored.
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::with_capacity(shape.triangle_count());

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.position;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

/// Serialize `shape` as binary STL and write it to `path`.
///
/// The whole file is encoded in memory first, so nothing is created on disk
/// when the shape is empty or encoding fails. The bytes go to a sibling
/// `.partial` file that is renamed over `path` once complete, so a failed
/// write never leaves a truncated STL behind.
pub fn write_stl_file<T: Triangulated3D>(shape: &T, path: &Path) -> Result<(), IoError> {
    if shape.triangle_count() == 0 {
        return Err(IoError::EmptyMesh);
    }
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IoError::MalformedPath(path.display().to_string()))?;

    let bytes = to_stl_binary(shape, name)?;
    let partial = partial_path(path);
    if let Err(err) = fs::write(&partial, &bytes).and_then(|()| fs::rename(&partial, path)) {
        let _ = fs::remove_file(&partial);
        return Err(err.into());
    }
    info!(path = %path.display(), bytes = bytes.len(), "wrote STL");
    Ok(())
}

/// `holder.stl` -> `holder.stl.partial`, in the same directory.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}
