//! Shader programs and pipeline state, one module per material kind.

pub mod colored;
