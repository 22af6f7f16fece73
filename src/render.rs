//! Render commands: fully resolved, side-effect-free draw call descriptions.
//!
//! A [`RenderCommand`] is what traversal produces for every leaf of a scene
//! graph. It carries the mesh, the rasterizer settings, the shader program and
//! the uniform bundle. Submitting it to a GPU is the renderer's job.
//!
//! # Key types
//!
//! - [`RenderCommand`] is one draw call
//! - [`Settings`] holds depth testing and the face to cull
//! - [`Uniforms`] is the per-material uniform bundle, dispatched on [`Drawable`]
//!

use std::sync::Arc;

use cgmath::Matrix4;
use log::trace;

use crate::{
    camera::Projection,
    context::{RenderConfig, ShaderProgram},
    data_structures::{
        frame::{Frame, Handedness},
        model::Mesh,
        scene_graph::Drawable,
    },
    pipelines::colored::mk_primitive_state,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Settings {
    pub depth_test: bool,
    pub front_face: wgpu::FrontFace,
    pub cull_face: wgpu::Face,
}

impl Settings {
    /// Right-handed frames cull back faces. Left-handed frames have their
    /// winding inverted in world space, so they cull front faces instead.
    pub fn for_frame(config: &RenderConfig, world: &Frame) -> Self {
        let cull_face = match world.handedness() {
            Handedness::Right => wgpu::Face::Back,
            Handedness::Left => wgpu::Face::Front,
        };
        Self {
            depth_test: config.depth_test,
            front_face: config.front_face,
            cull_face,
        }
    }
}

/**
 * Uniform block of the flat color program. The layout must match `colored.wgsl`.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColoredUniforms {
    pub model: [[f32; 4]; 4],
    pub model_view: [[f32; 4]; 4],
    pub model_view_projection: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Uniform bundle, one variant per material kind.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Uniforms {
    Colored(ColoredUniforms),
}

impl Uniforms {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Uniforms::Colored(uniforms) => bytemuck::bytes_of(uniforms),
        }
    }
}

/// Model, model-view and model-view-projection matrices of one placement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrices {
    pub model: Matrix4<f32>,
    pub model_view: Matrix4<f32>,
    pub model_view_projection: Matrix4<f32>,
}

impl Matrices {
    pub fn new(world: &Frame, projection: &Projection) -> Self {
        let model_view = world.relative_to(&projection.eye).to_matrix();
        Self {
            model: world.to_matrix(),
            model_view,
            model_view_projection: projection.matrix * model_view,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderCommand {
    pub mesh: Arc<Mesh>,
    pub settings: Settings,
    pub program: ShaderProgram,
    pub uniforms: Uniforms,
}

impl RenderCommand {
    /// Resolves one leaf into a draw call. This is the only place where
    /// drawable variants are mapped to programs and uniforms.
    pub fn new(
        config: &RenderConfig,
        drawable: &Drawable,
        world: &Frame,
        projection: &Projection,
    ) -> Self {
        let settings = Settings::for_frame(config, world);
        let matrices = Matrices::new(world, projection);
        let command = match drawable {
            Drawable::Colored { color, geometry } => RenderCommand {
                mesh: geometry.mesh().clone(),
                settings,
                program: config.programs.colored,
                uniforms: Uniforms::Colored(ColoredUniforms {
                    model: matrices.model.into(),
                    model_view: matrices.model_view.into(),
                    model_view_projection: matrices.model_view_projection.into(),
                    color: [color.r as f32, color.g as f32, color.b as f32, color.a as f32],
                }),
            },
        };
        trace!(
            "render command for {} culling {:?}",
            command.program.label,
            command.settings.cull_face
        );
        command
    }

    pub fn primitive_state(&self) -> wgpu::PrimitiveState {
        mk_primitive_state(self.mesh.topology(), &self.settings)
    }
}
