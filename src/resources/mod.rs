//! Loading geometry from external files and handing meshes to the GPU.

use std::io::{BufReader, Cursor};

use anyhow::{Context, bail};
use cgmath::{Point3, Vector3};

use crate::data_structures::geometry::{self, Geometry};

pub mod mesh;

/// Parses Wavefront OBJ text into one indexed [`Geometry`] per object.
///
/// Faces are triangulated. Normals are kept when the file provides one per
/// position; material libraries are ignored.
pub fn load_geometry_obj(source: &str) -> anyhow::Result<Vec<Geometry>> {
    let mut reader = BufReader::new(Cursor::new(source));
    let (models, _) = tobj::load_obj_buf(
        &mut reader,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )?;

    models
        .into_iter()
        .map(|model| {
            let mesh = &model.mesh;
            if mesh.indices.len() % 3 != 0 {
                bail!(
                    "object {} has {} indices, which is not a multiple of 3",
                    model.name,
                    mesh.indices.len()
                );
            }
            let positions: Vec<Point3<f32>> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| Point3::new(p[0], p[1], p[2]))
                .collect();
            let faces: Vec<[u32; 3]> = mesh
                .indices
                .chunks_exact(3)
                .map(|f| [f[0], f[1], f[2]])
                .collect();

            let geometry = if mesh.normals.len() == mesh.positions.len() && !mesh.normals.is_empty() {
                let vertices: Vec<_> = positions
                    .into_iter()
                    .zip(mesh.normals.chunks_exact(3))
                    .map(|(point, n)| (point, Vector3::new(n[0], n[1], n[2])))
                    .collect();
                geometry::indexed_triangles_with_normals(&vertices, &faces)
            } else {
                geometry::indexed_triangles(&positions, &faces)
            };
            geometry
                .mesh()
                .validate()
                .with_context(|| format!("object {} has invalid faces", model.name))?;
            Ok(geometry)
        })
        .collect()
}

/// Reads an OBJ file from `./assets/` and parses it with [`load_geometry_obj`].
pub fn load_geometry_file(file_name: &str) -> anyhow::Result<Vec<Geometry>> {
    let path = std::path::Path::new("./").join("assets").join(file_name);
    let txt = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path.display()))?;
    load_geometry_obj(&txt)
}
