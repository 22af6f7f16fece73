//! Geometry construction: immutable meshes paired with their bounding box.
//!
//! There is one constructor per input shape. All of them are pure and accept
//! any input; degenerate primitives pass through unchanged. The bounding box
//! is `None` exactly when the input is empty.
//!
//! Bounding boxes are not all computed the same way. Triangle and segment
//! lists take the hull of every primitive's own [`Bounded`] box. Point sets,
//! fans and indexed meshes take the containing box of the raw vertex list.

use std::sync::Arc;

use cgmath::{Point3, Vector3};
use log::warn;

use crate::data_structures::{
    bounds::{Bounded, BoundingBox},
    model::{Mesh, NormalVertex, PositionVertex, Topology, Vertices},
    primitives::{LineSegment, Polyline, Triangle},
};

/// A mesh together with its bounding box. Cheap to clone; the mesh is shared.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometry {
    bounds: Option<BoundingBox>,
    mesh: Arc<Mesh>,
}

impl Geometry {
    pub fn new(bounds: Option<BoundingBox>, mesh: Mesh) -> Self {
        Self {
            bounds,
            mesh: Arc::new(mesh),
        }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds
    }

    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }
}

fn position(point: Point3<f32>) -> PositionVertex {
    PositionVertex {
        position: point.into(),
    }
}

fn with_normal(point: Point3<f32>, normal: Vector3<f32>) -> NormalVertex {
    NormalVertex {
        position: point.into(),
        normal: normal.into(),
    }
}

fn flatten_faces(faces: &[[u32; 3]]) -> Vec<u32> {
    faces.iter().flatten().copied().collect()
}

/// Unindexed triangle list with positions only.
pub fn triangles(triangles: &[Triangle]) -> Geometry {
    let vertices = triangles
        .iter()
        .flat_map(Triangle::vertices)
        .map(position)
        .collect();
    Geometry::new(
        BoundingBox::hull(triangles.iter().map(Bounded::bounding_box)),
        Mesh::new(Vertices::Positions(vertices), None, Topology::TriangleList),
    )
}

/// Unindexed triangle list with flat shading: every corner of a triangle
/// carries that triangle's face normal.
pub fn triangles_with_normals(triangles: &[Triangle]) -> Geometry {
    let vertices = triangles
        .iter()
        .flat_map(|triangle| {
            let normal = triangle.normal();
            triangle
                .vertices()
                .map(|corner| with_normal(corner, normal))
        })
        .collect();
    Geometry::new(
        BoundingBox::hull(triangles.iter().map(Bounded::bounding_box)),
        Mesh::new(
            Vertices::PositionsNormals(vertices),
            None,
            Topology::TriangleList,
        ),
    )
}

/// Shared vertex list plus one index triple per face.
///
/// The indices are not checked; see [`Mesh::validate`].
pub fn indexed_triangles(vertices: &[Point3<f32>], faces: &[[u32; 3]]) -> Geometry {
    Geometry::new(
        BoundingBox::from_points(vertices.iter().copied()),
        Mesh::new(
            Vertices::Positions(vertices.iter().copied().map(position).collect()),
            Some(flatten_faces(faces)),
            Topology::TriangleList,
        ),
    )
}

pub fn indexed_triangles_with_normals(
    vertices: &[(Point3<f32>, Vector3<f32>)],
    faces: &[[u32; 3]],
) -> Geometry {
    Geometry::new(
        BoundingBox::from_points(vertices.iter().map(|(point, _)| *point)),
        Mesh::new(
            Vertices::PositionsNormals(
                vertices
                    .iter()
                    .map(|(point, normal)| with_normal(*point, *normal))
                    .collect(),
            ),
            Some(flatten_faces(faces)),
            Topology::TriangleList,
        ),
    )
}

/// A fan around `points[0]`, expanded into an indexed triangle list.
pub fn triangle_fan(points: &[Point3<f32>]) -> Geometry {
    if !points.is_empty() && points.len() < 3 {
        warn!(
            "A triangle fan needs at least 3 points but got {}. It will not produce any triangles.",
            points.len()
        );
    }
    let indices = (1..points.len().saturating_sub(1) as u32)
        .flat_map(|i| [0, i, i + 1])
        .collect();
    Geometry::new(
        BoundingBox::from_points(points.iter().copied()),
        Mesh::new(
            Vertices::Positions(points.iter().copied().map(position).collect()),
            Some(indices),
            Topology::TriangleList,
        ),
    )
}

/// Disconnected line segments.
pub fn lines(segments: &[LineSegment]) -> Geometry {
    let vertices = segments
        .iter()
        .flat_map(|segment| [position(segment.start), position(segment.end)])
        .collect();
    Geometry::new(
        BoundingBox::hull(segments.iter().map(Bounded::bounding_box)),
        Mesh::new(Vertices::Positions(vertices), None, Topology::LineList),
    )
}

/// One connected line strip.
pub fn polyline(polyline: &Polyline) -> Geometry {
    if polyline.points.len() == 1 {
        warn!("A polyline with a single point does not produce any segments.");
    }
    Geometry::new(
        polyline.bounding_box(),
        Mesh::new(
            Vertices::Positions(polyline.points.iter().copied().map(position).collect()),
            None,
            Topology::LineStrip,
        ),
    )
}

/// Unconnected point cloud.
pub fn points(points: &[Point3<f32>]) -> Geometry {
    Geometry::new(
        BoundingBox::from_points(points.iter().copied()),
        Mesh::new(
            Vertices::Positions(points.iter().copied().map(position).collect()),
            None,
            Topology::PointList,
        ),
    )
}
