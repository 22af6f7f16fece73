//! Render configuration passed into render-command emission.
//!
//! Nothing here is global: callers build a [`RenderConfig`] (or take the
//! default) and hand it to [`crate::data_structures::scene_graph::to_entities_with`].

use crate::pipelines::colored::COLORED_PROGRAM;

/// A shader program, identified by its label and entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShaderProgram {
    pub label: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
}

impl ShaderProgram {
    pub fn descriptor(&self) -> wgpu::ShaderModuleDescriptor<'static> {
        wgpu::ShaderModuleDescriptor {
            label: Some(self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        }
    }
}

/// One shader program per material kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShaderPrograms {
    pub colored: ShaderProgram,
}

impl Default for ShaderPrograms {
    fn default() -> Self {
        Self {
            colored: COLORED_PROGRAM,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub depth_test: bool,
    /// Winding that counts as front-facing for a right-handed frame.
    pub front_face: wgpu::FrontFace,
    pub programs: ShaderPrograms,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            depth_test: true,
            front_face: wgpu::FrontFace::Ccw,
            programs: ShaderPrograms::default(),
        }
    }
}
