use crate::{context::ShaderProgram, data_structures::model::Topology, render::Settings};

pub const COLORED_PROGRAM: ShaderProgram = ShaderProgram {
    label: "Colored Shader",
    source: include_str!("colored.wgsl"),
    vertex_entry: "vs_main",
    fragment_entry: "fs_main",
};

/// Rasterizer state for one render command.
pub fn mk_primitive_state(topology: Topology, settings: &Settings) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: topology.into(),
        strip_index_format: None,
        front_face: settings.front_face,
        cull_mode: Some(settings.cull_face),
        polygon_mode: wgpu::PolygonMode::Fill,
        ..Default::default()
    }
}

pub fn depth_compare(settings: &Settings) -> wgpu::CompareFunction {
    if settings.depth_test {
        wgpu::CompareFunction::Less
    } else {
        wgpu::CompareFunction::Always
    }
}
