//! Scene graph and hierarchical scene organization.
//!
//! A scene is a tree of [`Node`]s. Every node carries a local [`Frame`]
//! relative to its parent and is either a leaf with a [`Drawable`] or a group
//! of ordered children. Trees are persistent: transforms return new nodes that
//! share the drawables and children of the original through `Arc`, so a tree
//! can be traversed from any number of threads at once.
//!
//! [`to_entities`] flattens a tree into one [`RenderCommand`] per leaf.

use std::sync::Arc;

use cgmath::{Rad, Vector3};
use log::debug;

use crate::{
    camera::Projection,
    context::RenderConfig,
    data_structures::{
        bounds::BoundingBox,
        frame::{Axis, Frame, Plane},
        geometry::Geometry,
    },
    render::RenderCommand,
};

/// Geometry plus material, independent of placement.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Colored { color: wgpu::Color, geometry: Geometry },
}

impl Drawable {
    pub fn geometry(&self) -> &Geometry {
        match self {
            Drawable::Colored { geometry, .. } => geometry,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf {
        frame: Frame,
        drawable: Arc<Drawable>,
    },
    Group {
        frame: Frame,
        children: Arc<[Node]>,
    },
}

/// A leaf at the identity frame drawing `geometry` in a flat `color`.
pub fn colored(color: wgpu::Color, geometry: Geometry) -> Node {
    Node::Leaf {
        frame: Frame::identity(),
        drawable: Arc::new(Drawable::Colored { color, geometry }),
    }
}

/// Groups `children` under an identity frame, keeping their order.
pub fn group<I>(children: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Node::Group {
        frame: Frame::identity(),
        children: children.into_iter().collect(),
    }
}

impl Node {
    pub fn frame(&self) -> &Frame {
        match self {
            Node::Leaf { frame, .. } | Node::Group { frame, .. } => frame,
        }
    }

    /// The children of a group; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Group { children, .. } => children,
        }
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        match self {
            Node::Leaf { drawable, .. } => Some(drawable.as_ref()),
            Node::Group { .. } => None,
        }
    }

    /// Returns a copy of this node whose local frame is `mutation(frame)`.
    ///
    /// Drawables and children are shared with `self`. Children keep their own
    /// local frames; they pick up the new group frame during traversal.
    fn transform(&self, mutation: impl FnOnce(&Frame) -> Frame) -> Node {
        match self {
            Node::Leaf { frame, drawable } => Node::Leaf {
                frame: mutation(frame),
                drawable: drawable.clone(),
            },
            Node::Group { frame, children } => Node::Group {
                frame: mutation(frame),
                children: children.clone(),
            },
        }
    }

    pub fn rotate_around<A: Into<Rad<f32>>>(&self, axis: &Axis, angle: A) -> Node {
        let angle = angle.into();
        self.transform(|frame| frame.rotate_around(axis, angle))
    }

    pub fn translate_by(&self, displacement: Vector3<f32>) -> Node {
        self.transform(|frame| frame.translate_by(displacement))
    }

    /// Mirrors the node. Every leaf below it ends up with flipped handedness.
    pub fn mirror_across(&self, plane: &Plane) -> Node {
        self.transform(|frame| frame.mirror_across(plane))
    }

    pub fn relative_to(&self, reference: &Frame) -> Node {
        self.transform(|frame| frame.relative_to(reference))
    }

    pub fn place_in(&self, parent: &Frame) -> Node {
        self.transform(|frame| frame.place_in(parent))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Group { children, .. } => children.iter().map(Node::leaf_count).sum(),
        }
    }

    /// Bounding box of every leaf's geometry, expressed in this node's parent
    /// space. `None` if no leaf below has any geometry.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds_in(&Frame::identity())
    }

    fn bounds_in(&self, placement: &Frame) -> Option<BoundingBox> {
        let placement = self.frame().place_in(placement);
        match self {
            Node::Leaf { drawable, .. } => drawable
                .geometry()
                .bounding_box()
                .map(|bounds| bounds.transformed(&placement)),
            Node::Group { children, .. } => {
                BoundingBox::hull(children.iter().filter_map(|child| child.bounds_in(&placement)))
            }
        }
    }
}

/// Flattens `root` into render commands using the default [`RenderConfig`].
pub fn to_entities(projection: &Projection, root: &Node) -> Vec<RenderCommand> {
    to_entities_with(&RenderConfig::default(), projection, root)
}

/// Flattens `root` into one render command per leaf.
///
/// The traversal is depth-first and pre-order with children visited in order.
/// Commands are appended, so the output order is exactly the traversal order.
pub fn to_entities_with(
    config: &RenderConfig,
    projection: &Projection,
    root: &Node,
) -> Vec<RenderCommand> {
    let mut commands = Vec::with_capacity(root.leaf_count());
    flatten(config, projection, root, &Frame::identity(), &mut commands);
    debug!("flattened scene graph into {} render commands", commands.len());
    commands
}

fn flatten(
    config: &RenderConfig,
    projection: &Projection,
    node: &Node,
    placement: &Frame,
    commands: &mut Vec<RenderCommand>,
) {
    match node {
        Node::Leaf { frame, drawable } => {
            let world = frame.place_in(placement);
            commands.push(RenderCommand::new(config, drawable, &world, projection));
        }
        Node::Group { frame, children } => {
            let placement = frame.place_in(placement);
            for child in children.iter() {
                flatten(config, projection, child, &placement, commands);
            }
        }
    }
}
