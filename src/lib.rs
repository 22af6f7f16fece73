//! scene-ngin
//!
//! A persistent scene graph on top of a wgpu-style rendering pipeline. Geometry
//! is built once into immutable meshes with bounding boxes, wrapped in
//! drawables, placed in a tree of local frames and finally flattened into a
//! list of render commands for a camera projection. Everything up to the
//! render command is pure; submitting commands to a GPU is left to the caller.
//!
//! High-level modules
//! - `camera`: camera placement, perspective lens and the resulting projection
//! - `context`: render configuration and shader program table
//! - `data_structures`: frames, bounds, primitives, meshes, geometry and the scene graph
//! - `pipelines`: shader programs and rasterizer state for render commands
//! - `resources`: OBJ loading and GPU upload of meshes
//! - `render`: render commands and uniform bundles
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use data_structures::scene_graph::{Node, colored, group, to_entities, to_entities_with};
pub use wgpu::Color;
