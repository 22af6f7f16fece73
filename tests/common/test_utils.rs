#![allow(dead_code)]

use scene_ngin::{
    Point3,
    data_structures::{frame::Frame, geometry, primitives::Triangle},
    render::{RenderCommand, Uniforms},
    Color, Matrix4, Node, colored,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn unit_triangle() -> Triangle {
    Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
}

/// A colored leaf whose red channel tags it, so commands can be told apart.
pub fn tagged_leaf(tag: f64) -> Node {
    colored(
        Color {
            r: tag,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        },
        geometry::triangles(&[unit_triangle()]),
    )
}

pub fn tag_of(command: &RenderCommand) -> f32 {
    match command.uniforms {
        Uniforms::Colored(uniforms) => uniforms.color[0],
    }
}

pub fn model_matrix(command: &RenderCommand) -> Matrix4<f32> {
    match command.uniforms {
        Uniforms::Colored(uniforms) => uniforms.model.into(),
    }
}

pub fn frame_matrix(frame: &Frame) -> Matrix4<f32> {
    frame.to_matrix()
}
