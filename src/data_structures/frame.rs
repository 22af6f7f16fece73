//! Rigid coordinate frames.
//!
//! A [`Frame`] is an orthonormal basis plus an origin, expressed in the
//! coordinates of its parent. Frames are plain values: every operation returns
//! a new frame and leaves `self` untouched.

use std::ops::Mul;

use cgmath::{EuclideanSpace, InnerSpace, Matrix, Matrix3, Matrix4, Point3, Rad, SquareMatrix, Vector3};

/// Whether a frame's basis is right- or left-handed.
///
/// Mirroring flips the handedness. The renderer uses it to pick which faces
/// get culled, see [`crate::render::Settings`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    pub fn flipped(self) -> Self {
        match self {
            Handedness::Right => Handedness::Left,
            Handedness::Left => Handedness::Right,
        }
    }

    /// Handedness of a frame with handedness `self` placed in one with `parent`.
    pub fn compose(self, parent: Handedness) -> Self {
        if self == parent {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }
}

/// A line in space used as a rotation axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub point: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Axis {
    pub fn new(point: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { point, direction }
    }

    pub fn through_origin(direction: Vector3<f32>) -> Self {
        Self::new(Point3::origin(), direction)
    }

    pub fn x() -> Self {
        Self::through_origin(Vector3::unit_x())
    }

    pub fn y() -> Self {
        Self::through_origin(Vector3::unit_y())
    }

    pub fn z() -> Self {
        Self::through_origin(Vector3::unit_z())
    }
}

/// A plane given by `normal · p = distance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f32>,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vector3<f32>, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// The plane with the given normal that contains `point`.
    pub fn through(point: Point3<f32>, normal: Vector3<f32>) -> Self {
        let normal = normal.normalize();
        Self::new(normal, normal.dot(point.to_vec()))
    }

    pub fn xy() -> Self {
        Self::new(Vector3::unit_z(), 0.0)
    }

    pub fn yz() -> Self {
        Self::new(Vector3::unit_x(), 0.0)
    }

    pub fn xz() -> Self {
        Self::new(Vector3::unit_y(), 0.0)
    }
}

/// A local coordinate system: orientation, origin and handedness.
///
/// The columns of `basis` are the frame's axes in parent coordinates. The basis
/// is always orthonormal, so its inverse is its transpose. Handedness is kept
/// explicitly instead of being re-derived from the determinant so that it
/// never drifts with floating point error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    basis: Matrix3<f32>,
    origin: Point3<f32>,
    handedness: Handedness,
}

impl Frame {
    /// The world axes at the origin.
    pub fn identity() -> Self {
        Self {
            basis: Matrix3::identity(),
            origin: Point3::origin(),
            handedness: Handedness::Right,
        }
    }

    /// Builds a frame from an orthonormal basis. Handedness is taken from the
    /// sign of the determinant.
    pub fn from_basis(basis: Matrix3<f32>, origin: Point3<f32>) -> Self {
        let handedness = if basis.determinant() < 0.0 {
            Handedness::Left
        } else {
            Handedness::Right
        };
        Self {
            basis,
            origin,
            handedness,
        }
    }

    pub fn from_translation(displacement: Vector3<f32>) -> Self {
        Self::identity().translate_by(displacement)
    }

    pub fn basis(&self) -> Matrix3<f32> {
        self.basis
    }

    pub fn origin(&self) -> Point3<f32> {
        self.origin
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Rotates the frame about `axis` by `angle`, after its current placement.
    pub fn rotate_around<A: Into<Rad<f32>>>(&self, axis: &Axis, angle: A) -> Self {
        let rotation = Matrix3::from_axis_angle(axis.direction.normalize(), angle);
        let offset = self.origin - axis.point;
        Self {
            basis: rotation * self.basis,
            origin: axis.point + rotation * offset,
            handedness: self.handedness,
        }
    }

    pub fn translate_by(&self, displacement: Vector3<f32>) -> Self {
        Self {
            origin: self.origin + displacement,
            ..*self
        }
    }

    /// Reflects the frame across `plane`. The result has the opposite handedness.
    pub fn mirror_across(&self, plane: &Plane) -> Self {
        let n = plane.normal.normalize();
        // Householder reflection I - 2nn^T, built column by column.
        let reflection = Matrix3::from_cols(
            Vector3::unit_x() - n * (2.0 * n.x),
            Vector3::unit_y() - n * (2.0 * n.y),
            Vector3::unit_z() - n * (2.0 * n.z),
        );
        let signed_distance = n.dot(self.origin.to_vec()) - plane.distance / plane.normal.magnitude();
        Self {
            basis: reflection * self.basis,
            origin: self.origin - n * (2.0 * signed_distance),
            handedness: self.handedness.flipped(),
        }
    }

    /// Expresses `self`, given in `parent`'s coordinates, in the coordinates of
    /// `parent`'s own parent.
    pub fn place_in(&self, parent: &Frame) -> Self {
        Self {
            basis: parent.basis * self.basis,
            origin: parent.origin + parent.basis * self.origin.to_vec(),
            handedness: self.handedness.compose(parent.handedness),
        }
    }

    /// Inverse of [`Frame::place_in`]: re-expresses `self` in the coordinates
    /// of `reference`.
    pub fn relative_to(&self, reference: &Frame) -> Self {
        self.place_in(&reference.inverse())
    }

    pub fn inverse(&self) -> Self {
        let basis = self.basis.transpose();
        Self {
            basis,
            origin: Point3::from_vec(-(basis * self.origin.to_vec())),
            handedness: self.handedness,
        }
    }

    /// The frame as an affine model matrix.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let mut matrix = Matrix4::from(self.basis);
        matrix.w = self.origin.to_homogeneous();
        matrix
    }

    pub fn transform_point(&self, point: Point3<f32>) -> Point3<f32> {
        self.origin + self.basis * point.to_vec()
    }

    pub fn transform_vector(&self, vector: Vector3<f32>) -> Vector3<f32> {
        self.basis * vector
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}

/// `parent * child` places `child` in `parent`.
impl Mul<Frame> for Frame {
    type Output = Self;

    fn mul(self, rhs: Frame) -> Self::Output {
        rhs.place_in(&self)
    }
}

impl<'a, 'b> Mul<&'b Frame> for &'a Frame {
    type Output = Frame;

    fn mul(self, rhs: &'b Frame) -> Self::Output {
        rhs.place_in(self)
    }
}

impl From<Vector3<f32>> for Frame {
    fn from(displacement: Vector3<f32>) -> Self {
        Frame::from_translation(displacement)
    }
}
