//! Camera placement and projection.
//!
//! A [`Camera`] describes where the eye sits and where it looks. A
//! [`Perspective`] describes the lens. Together they give a [`Projection`],
//! which is all that render-command emission needs from the camera.

use cgmath::{InnerSpace, Matrix3, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};

use crate::data_structures::frame::Frame;

/// Converts cgmath's OpenGL clip space (z in -1..1) to wgpu's (z in 0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// First-person camera: a position plus yaw/pitch angles.
///
/// A yaw of zero looks down +x, and positive pitch looks up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    /// The eye frame in world coordinates. Its local -z axis is the viewing
    /// direction and +y points up.
    pub fn eye(&self) -> Frame {
        let forward = self.forward();
        let right = forward.cross(Vector3::unit_y()).normalize();
        let up = right.cross(forward);
        Frame::from_basis(Matrix3::from_cols(right, up, -forward), self.position)
    }
}

/// Perspective lens parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Perspective {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The eye frame together with the matrix that maps eye space to clip space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub eye: Frame,
    pub matrix: Matrix4<f32>,
}

impl Projection {
    pub fn new(eye: Frame, matrix: Matrix4<f32>) -> Self {
        Self { eye, matrix }
    }

    pub fn perspective(camera: &Camera, lens: &Perspective) -> Self {
        Self::new(camera.eye(), lens.calc_matrix())
    }

    /// Eye at the world origin and an identity projection matrix.
    pub fn identity() -> Self {
        Self::new(Frame::identity(), Matrix4::identity())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::identity()
    }
}
