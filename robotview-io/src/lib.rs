//! I/O operations for robotview
//!
//! This crate provides the file-facing collaborators of the robot renderer:
//! wavefront model loading, the TOML parameter store and the viewer
//! preference file.

pub mod error;
pub mod obj;
pub mod params;
pub mod preferences;

pub use error::*;
pub use params::TomlParams;
pub use preferences::KeyFile;

use robotview_core::{Result, TriangleMesh};

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<std::path::Path>>(path: P) -> Result<TriangleMesh>;
}

/// Auto-detect format and read mesh
pub fn read_mesh<P: AsRef<std::path::Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("obj") => obj::ObjReader::read_mesh(path),
        _ => Err(robotview_core::Error::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}
