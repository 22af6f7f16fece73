use std::sync::Arc;

use scene_ngin::{
    Deg, Point3, Vector3, assert_relative_eq,
    camera::Projection,
    data_structures::{
        bounds::BoundingBox,
        frame::{Axis, Frame, Handedness, Plane},
    },
    group, to_entities, Node,
};

use crate::common::test_utils::{init_logger, model_matrix, tag_of, tagged_leaf};

mod common;

fn offset() -> Frame {
    Frame::identity()
        .rotate_around(&Axis::y(), Deg(35.0))
        .translate_by(Vector3::new(4.0, -1.0, 2.0))
}

#[test]
fn group_yields_commands_in_child_order() {
    init_logger();
    let scene = group([tagged_leaf(0.1), tagged_leaf(0.2), tagged_leaf(0.3)]);

    let commands = to_entities(&Projection::identity(), &scene);

    let tags: Vec<f32> = commands.iter().map(tag_of).collect();
    assert_eq!(tags, vec![0.1, 0.2, 0.3]);
}

#[test]
fn traversal_is_depth_first_pre_order() {
    let scene = group([
        group([tagged_leaf(0.1), group([tagged_leaf(0.2)])]),
        tagged_leaf(0.3),
        group(Vec::<Node>::new()),
        group([tagged_leaf(0.4), tagged_leaf(0.5)]),
    ]);

    let commands = to_entities(&Projection::identity(), &scene);

    let tags: Vec<f32> = commands.iter().map(tag_of).collect();
    assert_eq!(tags, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
    assert_eq!(scene.leaf_count(), 5);
}

#[test]
fn zero_translation_keeps_the_world_frame() {
    let leaf = tagged_leaf(0.1).rotate_around(&Axis::x(), Deg(20.0));
    let moved = leaf.translate_by(Vector3::new(0.0, 0.0, 0.0));

    let before = to_entities(&Projection::identity(), &leaf);
    let after = to_entities(&Projection::identity(), &moved);

    assert_relative_eq!(model_matrix(&after[0]), model_matrix(&before[0]), epsilon = 1e-6);
}

#[test]
fn traversal_respects_composition_order() {
    let angle = Deg(60.0);
    let axis = Axis::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0));
    let node = tagged_leaf(0.1).rotate_around(&axis, angle).place_in(&offset());

    let commands = to_entities(&Projection::identity(), &node);

    let expected = Frame::identity().rotate_around(&axis, angle).place_in(&offset());
    assert_relative_eq!(model_matrix(&commands[0]), expected.to_matrix(), epsilon = 1e-5);
}

#[test]
fn nested_groups_do_not_leak_transforms_to_siblings() {
    let leaf1 = tagged_leaf(0.1).translate_by(Vector3::new(0.0, 1.0, 0.0));
    let inner = group([leaf1.clone()]).rotate_around(&Axis::z(), Deg(90.0));
    let leaf2 = tagged_leaf(0.2).translate_by(Vector3::new(0.0, 0.0, 3.0));
    let scene = group([inner.clone(), leaf2.clone()]).place_in(&offset());

    let commands = to_entities(&Projection::identity(), &scene);

    let leaf1_world = leaf1.frame().place_in(&inner.frame().place_in(&offset()));
    let leaf2_world = leaf2.frame().place_in(&offset());
    assert_relative_eq!(model_matrix(&commands[0]), leaf1_world.to_matrix(), epsilon = 1e-5);
    assert_relative_eq!(model_matrix(&commands[1]), leaf2_world.to_matrix(), epsilon = 1e-5);
}

#[test]
fn mirroring_twice_restores_culling_and_once_flips_it() {
    let plane = Plane::new(Vector3::new(1.0, 0.0, 0.0), 2.0);
    let leaf = tagged_leaf(0.1);
    let once = leaf.mirror_across(&plane);
    let twice = once.mirror_across(&plane);

    let projection = Projection::identity();
    let original = to_entities(&projection, &leaf);
    let mirrored = to_entities(&projection, &once);
    let restored = to_entities(&projection, &twice);

    assert_eq!(original[0].settings.cull_face, wgpu::Face::Back);
    assert_eq!(mirrored[0].settings.cull_face, wgpu::Face::Front);
    assert_eq!(restored[0].settings.cull_face, original[0].settings.cull_face);
    assert_relative_eq!(model_matrix(&restored[0]), model_matrix(&original[0]), epsilon = 1e-5);
}

#[test]
fn mirroring_a_group_flips_every_leaf_below_it() {
    let mirrored_group = group([tagged_leaf(0.1), group([tagged_leaf(0.2)])]).mirror_across(&Plane::xy());
    let scene = group([mirrored_group, tagged_leaf(0.3)]);

    let commands = to_entities(&Projection::identity(), &scene);

    let faces: Vec<wgpu::Face> = commands.iter().map(|c| c.settings.cull_face).collect();
    assert_eq!(faces, vec![wgpu::Face::Front, wgpu::Face::Front, wgpu::Face::Back]);
}

#[test]
fn transforms_do_not_mutate_the_original() {
    let child = tagged_leaf(0.1).translate_by(Vector3::new(1.0, 0.0, 0.0));
    let original = group([child.clone()]);
    let snapshot = original.clone();

    let _ = original.rotate_around(&Axis::x(), Deg(45.0));
    let _ = original.translate_by(Vector3::new(5.0, 5.0, 5.0));
    let _ = original.mirror_across(&Plane::yz());
    let _ = original.relative_to(&offset());
    let moved = original.place_in(&offset());

    assert_eq!(original, snapshot);
    assert_eq!(original.frame(), &Frame::identity());
    assert_eq!(moved.children(), original.children());
    assert_eq!(original.children()[0].frame(), child.frame());
}

#[test]
fn transforms_share_drawables_and_children() {
    let leaf = tagged_leaf(0.1);
    let moved = leaf.translate_by(Vector3::new(1.0, 2.0, 3.0));
    match (&leaf, &moved) {
        (Node::Leaf { drawable: a, .. }, Node::Leaf { drawable: b, .. }) => assert!(Arc::ptr_eq(a, b)),
        _ => panic!("expected leaves"),
    }

    let parent = group([leaf]);
    let rotated = parent.rotate_around(&Axis::z(), Deg(10.0));
    match (&parent, &rotated) {
        (Node::Group { children: a, .. }, Node::Group { children: b, .. }) => assert!(Arc::ptr_eq(a, b)),
        _ => panic!("expected groups"),
    }
}

#[test]
fn transforming_a_group_only_changes_its_own_frame() {
    let child = tagged_leaf(0.1).translate_by(Vector3::new(0.0, 1.0, 0.0));
    let parent = group([child.clone()]).translate_by(Vector3::new(10.0, 0.0, 0.0));

    assert_eq!(parent.children()[0].frame(), child.frame());
    assert_eq!(parent.frame().origin(), Point3::new(10.0, 0.0, 0.0));
}

#[test]
fn world_frame_handedness_is_tracked_through_placement() {
    let mirror = Frame::identity().mirror_across(&Plane::xz());
    let node = tagged_leaf(0.1).mirror_across(&Plane::yz()).place_in(&mirror);

    assert_eq!(node.frame().handedness(), Handedness::Right);
    let commands = to_entities(&Projection::identity(), &node);
    assert_eq!(commands[0].settings.cull_face, wgpu::Face::Back);
}

#[test]
fn empty_group_emits_nothing() {
    assert!(to_entities(&Projection::identity(), &group(Vec::<Node>::new())).is_empty());
    assert_eq!(group(Vec::<Node>::new()).bounding_box(), None);
}

#[test]
fn node_bounds_follow_leaf_placement() {
    let scene = group([
        tagged_leaf(0.1).translate_by(Vector3::new(5.0, 0.0, 0.0)),
        tagged_leaf(0.2).translate_by(Vector3::new(0.0, 0.0, -2.0)),
    ])
    .translate_by(Vector3::new(0.0, 1.0, 0.0));

    assert_eq!(
        scene.bounding_box(),
        Some(BoundingBox::new(
            Point3::new(0.0, 1.0, -2.0),
            Point3::new(6.0, 2.0, 0.0)
        ))
    );
}

#[test]
fn trees_can_be_flattened_from_several_threads() {
    let scene = group([tagged_leaf(0.1), tagged_leaf(0.2)]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| to_entities(&Projection::identity(), &scene).len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    });
}
