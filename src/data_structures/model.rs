//! CPU-side mesh data.
//!
//! A [`Mesh`] holds the vertex and index buffers of one geometry in the exact
//! byte layout the GPU expects. It is built once and never changed; uploading
//! it is up to the renderer (see [`crate::resources::mesh::upload`]).

use anyhow::bail;

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl Vertex for PositionVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<PositionVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NormalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex for NormalVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<NormalVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// The vertex attributes of a mesh.
#[derive(Clone, Debug, PartialEq)]
pub enum Vertices {
    Positions(Vec<PositionVertex>),
    PositionsNormals(Vec<NormalVertex>),
}

impl Vertices {
    pub fn len(&self) -> usize {
        match self {
            Vertices::Positions(vertices) => vertices.len(),
            Vertices::PositionsNormals(vertices) => vertices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_normals(&self) -> bool {
        matches!(self, Vertices::PositionsNormals(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Vertices::Positions(vertices) => bytemuck::cast_slice(vertices),
            Vertices::PositionsNormals(vertices) => bytemuck::cast_slice(vertices),
        }
    }

    pub fn layout(&self) -> wgpu::VertexBufferLayout<'static> {
        match self {
            Vertices::Positions(_) => PositionVertex::desc(),
            Vertices::PositionsNormals(_) => NormalVertex::desc(),
        }
    }
}

/// How consecutive vertices (or indices) are assembled into primitives.
///
/// Triangle fans have no GPU topology of their own; they are expanded into an
/// indexed triangle list when the mesh is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    TriangleList,
    LineList,
    LineStrip,
    PointList,
}

impl From<Topology> for wgpu::PrimitiveTopology {
    fn from(topology: Topology) -> Self {
        match topology {
            Topology::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Topology::LineList => wgpu::PrimitiveTopology::LineList,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            Topology::PointList => wgpu::PrimitiveTopology::PointList,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vertices,
    indices: Option<Vec<u32>>,
    topology: Topology,
}

impl Mesh {
    pub fn new(vertices: Vertices, indices: Option<Vec<u32>>, topology: Topology) -> Self {
        Self {
            vertices,
            indices,
            topology,
        }
    }

    pub fn vertices(&self) -> &Vertices {
        &self.vertices
    }

    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of vertices (or indices, for indexed meshes) a draw call covers.
    pub fn num_elements(&self) -> u32 {
        match &self.indices {
            Some(indices) => indices.len() as u32,
            None => self.vertices.len() as u32,
        }
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices
            .as_deref()
            .map(|indices| bytemuck::cast_slice(indices))
    }

    /// Checks that every index refers to an existing vertex.
    ///
    /// Geometry construction never calls this; it is meant for callers that
    /// take index data from untrusted sources.
    pub fn validate(&self) -> anyhow::Result<()> {
        let vertex_count = self.vertices.len();
        if let Some(indices) = &self.indices {
            if let Some((position, index)) = indices
                .iter()
                .enumerate()
                .find(|(_, index)| **index as usize >= vertex_count)
            {
                bail!(
                    "index {} at position {} is out of range for {} vertices",
                    index,
                    position,
                    vertex_count
                );
            }
            if self.topology == Topology::TriangleList && indices.len() % 3 != 0 {
                bail!(
                    "triangle list has {} indices, which is not a multiple of 3",
                    indices.len()
                );
            }
        }
        Ok(())
    }
}
