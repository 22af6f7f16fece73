//! Axis-aligned bounding boxes.

use cgmath::{Point3, Vector3};

use crate::data_structures::frame::Frame;

/// Minimal axis-aligned box around a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl BoundingBox {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    pub fn from_point(point: Point3<f32>) -> Self {
        Self::new(point, point)
    }

    /// The containing box of `points`, or `None` if there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f32>>,
    {
        points
            .into_iter()
            .map(Self::from_point)
            .reduce(|hull, next| hull.union(&next))
    }

    /// The hull of `boxes`, or `None` if there are none.
    pub fn hull<I>(boxes: I) -> Option<Self>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        boxes.into_iter().reduce(|hull, next| hull.union(&next))
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    pub fn contains(&self, point: Point3<f32>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Half the size of the box along each axis.
    pub fn extents(&self) -> Vector3<f32> {
        (self.max - self.min) * 0.5
    }

    pub fn corners(&self) -> [Point3<f32>; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// The axis-aligned box around this box's corners after moving them into
    /// the parent space of `frame`.
    pub fn transformed(&self, frame: &Frame) -> Self {
        let [first, rest @ ..] = self.corners().map(|corner| frame.transform_point(corner));
        rest.iter()
            .fold(Self::from_point(first), |hull, corner| hull.union(&Self::from_point(*corner)))
    }
}

/// Primitives that know their own bounding contribution.
pub trait Bounded {
    fn bounding_box(&self) -> BoundingBox;
}
