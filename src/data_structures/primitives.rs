//! Raw geometric primitives that geometry is built from.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

use crate::data_structures::bounds::{Bounded, BoundingBox};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Point3<f32>,
    pub b: Point3<f32>,
    pub c: Point3<f32>,
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point3<f32>; 3] {
        [self.a, self.b, self.c]
    }

    /// Unit face normal following counter-clockwise winding.
    ///
    /// Degenerate triangles have no defined normal and get the zero vector.
    pub fn normal(&self) -> Vector3<f32> {
        let normal = (self.b - self.a).cross(self.c - self.a);
        if normal.magnitude2() == 0.0 {
            Vector3::zero()
        } else {
            normal.normalize()
        }
    }
}

impl Bounded for Triangle {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.a)
            .union(&BoundingBox::from_point(self.b))
            .union(&BoundingBox::from_point(self.c))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

impl LineSegment {
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }
}

impl Bounded for LineSegment {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.start).union(&BoundingBox::from_point(self.end))
    }
}

/// A connected strip of line segments through `points`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point3<f32>>,
}

impl Polyline {
    pub fn new(points: Vec<Point3<f32>>) -> Self {
        Self { points }
    }

    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }
}

impl From<Vec<Point3<f32>>> for Polyline {
    fn from(points: Vec<Point3<f32>>) -> Self {
        Polyline::new(points)
    }
}
