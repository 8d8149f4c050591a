//! Mesh file export.

pub mod stl;

pub use stl::{to_stl_ascii, to_stl_binary, write_stl_file};

/// Generic I/O and export errors.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    MalformedPath(String),
    /// Meshing produced no triangles, so there is nothing to print.
    EmptyMesh,
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            EmptyMesh => write!(f, "The mesh has no triangles; refusing to write an empty STL"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            _ => None,
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}
