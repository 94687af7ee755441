//! Wavefront OBJ model support

use crate::error::IoError;
use crate::MeshReader;
use obj::{IndexTuple, ObjData};
use robotview_core::{Error, Point3f, Result, TriangleMesh, Vector3f};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct ObjReader;

impl ObjReader {
    /// Parse OBJ text from any reader
    pub fn read_mesh_from<R: Read>(input: R, origin: &str) -> Result<TriangleMesh> {
        let data = ObjData::load_buf(input).map_err(|e| IoError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        mesh_from_obj_data(&data)
    }
}

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => IoError::Io(e),
        })?;
        Self::read_mesh_from(BufReader::new(file), &path.display().to_string())
    }
}

fn mesh_from_obj_data(data: &ObjData) -> Result<TriangleMesh> {
    let vertices: Vec<Point3f> = data
        .position
        .iter()
        .map(|p| Point3f::new(p[0], p[1], p[2]))
        .collect();

    let mut faces = Vec::new();
    let mut normals = vec![None; vertices.len()];

    let polygons = data
        .objects
        .iter()
        .flat_map(|object| object.groups.iter())
        .flat_map(|group| group.polys.iter());

    for polygon in polygons {
        let corners = &polygon.0;
        for &IndexTuple(position, _, normal) in corners {
            if position >= vertices.len() {
                return Err(Error::InvalidData(format!(
                    "face references vertex {} of {}",
                    position,
                    vertices.len()
                )));
            }
            if let Some(n) = normal.and_then(|index| data.normal.get(index)) {
                normals[position] = Some(Vector3f::new(n[0], n[1], n[2]));
            }
        }

        // Fan triangulation; lines and points carry no surface.
        if corners.len() < 3 {
            continue;
        }
        for i in 1..corners.len() - 1 {
            faces.push([corners[0].0, corners[i].0, corners[i + 1].0]);
        }
    }

    let mut mesh = TriangleMesh::from_vertices_and_faces(vertices, faces);
    match normals.into_iter().collect::<Option<Vec<_>>>() {
        Some(normals) => mesh.set_normals(normals),
        None => mesh.compute_vertex_normals(),
    }
    Ok(mesh)
}
