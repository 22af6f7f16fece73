//! Engine data structures: frames, geometry and scene graphs.
//!
//! - `frame` holds rigid coordinate frames and the planes/axes that move them
//! - `bounds` holds axis-aligned bounding boxes
//! - `primitives` holds triangles, line segments and polylines
//! - `model` holds CPU-side mesh buffers and vertex layouts
//! - `geometry` builds meshes with bounding boxes from primitives
//! - `scene_graph` enables hierarchical scene organization and flattening

pub mod bounds;
pub mod frame;
pub mod geometry;
pub mod model;
pub mod primitives;
pub mod scene_graph;
