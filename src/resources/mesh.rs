use wgpu::util::DeviceExt;

use crate::data_structures::model::{Mesh, Topology};

/// GPU copy of a [`Mesh`].
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub num_elements: u32,
    pub topology: Topology,
}

/**
 * Uploads the vertex and (if present) index buffer of `mesh`.
 *
 * Render commands only reference the CPU mesh, so the renderer decides when
 * and how often this happens.
 */
pub fn upload(device: &wgpu::Device, mesh: &Mesh, label: &str) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", label)),
        contents: mesh.vertices().as_bytes(),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = mesh.index_bytes().map(|indices| {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", label)),
            contents: indices,
            usage: wgpu::BufferUsages::INDEX,
        })
    });

    GpuMesh {
        vertex_buffer,
        index_buffer,
        num_elements: mesh.num_elements(),
        topology: mesh.topology(),
    }
}
