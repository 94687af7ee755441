//! Robot model asset

use std::path::Path;

use robotview_core::{Bounded, Error, Extrema, ParamSource, Result, TriangleMesh};

use crate::draw::{DrawCommand, Primitive};

/// A loaded robot mesh and its bounding extrema
#[derive(Debug, Clone)]
pub struct ModelAsset {
    name: String,
    mesh: TriangleMesh,
    extrema: Extrema,
}

impl ModelAsset {
    pub fn from_mesh(name: impl Into<String>, mesh: TriangleMesh) -> Self {
        let extrema = mesh.extrema();
        Self {
            name: name.into(),
            mesh,
            extrema,
        }
    }

    /// Load a wavefront model file
    pub fn load(path: &Path) -> Result<Self> {
        let mesh = robotview_io::read_mesh(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::from_mesh(name, mesh))
    }

    /// Load the model named by `<prefix>.wavefront_model`, relative to `models_dir`.
    ///
    /// Both a missing key and a file that fails to load yield
    /// [`Error::MissingAsset`].
    pub fn from_params(params: &dyn ParamSource, prefix: &str, models_dir: &Path) -> Result<Self> {
        let key = format!("{}.wavefront_model", prefix);
        let model_name = params
            .get_str(&key)
            .ok_or_else(|| Error::MissingAsset(format!("no model configured under {}", key)))?;

        let path = models_dir.join(&model_name);
        let asset = Self::load(&path)
            .map_err(|err| Error::MissingAsset(format!("{}: {}", path.display(), err)))?;

        let span = asset.extrema.span();
        tracing::info!(
            model = %path.display(),
            vertices = asset.mesh.vertex_count(),
            faces = asset.mesh.face_count(),
            span_x = span.x,
            span_y = span.y,
            span_z = span.z,
            "loaded robot model"
        );
        Ok(asset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    pub fn max_span(&self) -> f32 {
        self.extrema.max_span()
    }

    /// Append the mesh draw calls to a program being compiled
    pub fn append_draw_commands(&self, out: &mut Vec<DrawCommand>) {
        let normals = self.mesh.normals.as_deref();

        out.push(DrawCommand::Begin(Primitive::Triangles));
        for face in &self.mesh.faces {
            for &index in face {
                if let Some(n) = normals.and_then(|normals| normals.get(index)) {
                    out.push(DrawCommand::Normal([n.x as f64, n.y as f64, n.z as f64]));
                }
                let v = self.mesh.vertices[index];
                out.push(DrawCommand::Vertex3([v.x as f64, v.y as f64, v.z as f64]));
            }
        }
        out.push(DrawCommand::End);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use robotview_core::Point3f;
    use robotview_io::TomlParams;
    use std::fs;

    pub(crate) fn triangle() -> ModelAsset {
        let mut mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(2.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.5),
            ],
            vec![[0, 1, 2]],
        );
        mesh.compute_vertex_normals();
        ModelAsset::from_mesh("triangle", mesh)
    }

    #[test]
    fn test_draw_commands() {
        let asset = triangle();
        let mut commands = Vec::new();
        asset.append_draw_commands(&mut commands);

        // begin + 3 x (normal, vertex) + end
        assert_eq!(commands.len(), 8);
        assert_eq!(commands[0], DrawCommand::Begin(Primitive::Triangles));
        assert_eq!(commands[4], DrawCommand::Vertex3([2.0, 0.0, 0.0]));
        assert_eq!(commands.last(), Some(&DrawCommand::End));
        assert_eq!(asset.max_span(), 2.0);
    }

    #[test]
    fn test_missing_key_is_missing_asset() {
        let params = TomlParams::from_toml_str("[models.robot]\nscale = 1.0\n").unwrap();
        let result = ModelAsset::from_params(&params, "models.robot", Path::new("/tmp"));
        assert!(matches!(result, Err(Error::MissingAsset(_))));
    }

    #[test]
    fn test_unloadable_file_is_missing_asset() {
        let params =
            TomlParams::from_toml_str("[models.robot]\nwavefront_model = \"nope.obj\"\n").unwrap();
        let result =
            ModelAsset::from_params(&params, "models.robot", Path::new("/nonexistent/models"));
        assert!(matches!(result, Err(Error::MissingAsset(_))));
    }

    #[test]
    fn test_load_from_models_dir() {
        let dir = std::env::temp_dir().join("robotview_model_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("box.obj"), "v 0 0 0\nv 1 0 0\nv 1 3 0\nf 1 2 3\n").unwrap();

        let params =
            TomlParams::from_toml_str("[models.robot]\nwavefront_model = \"box.obj\"\n").unwrap();
        let asset = ModelAsset::from_params(&params, "models.robot", &dir).unwrap();
        assert_eq!(asset.name(), "box.obj");
        assert_eq!(asset.mesh().face_count(), 1);
        assert_eq!(asset.max_span(), 3.0);

        let _ = fs::remove_dir_all(&dir);
    }
}
