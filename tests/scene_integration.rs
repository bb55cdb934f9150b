//! Integration tests for movement and transform propagation from the stage.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test scene_integration
//! ```

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use catnip::components::globaltransform2d::GlobalTransform2D;
use catnip::components::mapposition::MapPosition;
use catnip::components::node::EntityNode;
use catnip::components::rotation::Rotation;
use catnip::components::sprite::Sprite;
use catnip::components::velocity::Velocity;
use catnip::resources::worldtime::WorldTime;
use catnip::systems::movement::movement;
use catnip::systems::propagate_transforms::propagate_transforms;
use catnip::systems::scene::{add_child, spawn_container, spawn_entity, spawn_stage};
use catnip::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_propagate(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(propagate_transforms);
    schedule.run(world);
}

fn sprite(width: f32, height: f32) -> Sprite {
    Sprite {
        tex_key: "cat".into(),
        width,
        height,
        offset: Vector2 { x: 0.0, y: 0.0 },
        origin: Vector2 { x: 0.0, y: 0.0 },
    }
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world();
    let entity = world
        .spawn((MapPosition::new(10.0, 10.0), Velocity::new(5.0, -5.0)))
        .id();

    update_world_time(&mut world, 2.0);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 20.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn movement_with_zero_delta_keeps_position() {
    let mut world = make_world();
    let entity = world
        .spawn((MapPosition::new(3.0, 4.0), Velocity::new(100.0, 100.0)))
        .id();

    update_world_time(&mut world, 0.0);
    tick_movement(&mut world);

    assert_eq!(*world.get::<MapPosition>(entity).unwrap(), MapPosition::new(3.0, 4.0));
}

#[test]
fn movement_ignores_entities_without_velocity() {
    let mut world = make_world();
    let entity = world.spawn(MapPosition::new(1.0, 1.0)).id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    assert_eq!(*world.get::<MapPosition>(entity).unwrap(), MapPosition::new(1.0, 1.0));
}

#[test]
fn movement_does_not_clamp() {
    let mut world = make_world();
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), Velocity::new(-5.0, 0.0)))
        .id();

    for _ in 0..100 {
        update_world_time(&mut world, 1.0);
        tick_movement(&mut world);
    }

    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.x, -500.0));
}

// =============================================================================
// Propagation
// =============================================================================

#[test]
fn detached_entities_get_no_transform() {
    let mut world = make_world();
    spawn_stage(&mut world);
    let node = spawn_entity(&mut world, sprite(10.0, 10.0));

    tick_propagate(&mut world);

    assert!(world.get::<GlobalTransform2D>(node).is_none());
}

#[test]
fn visual_follows_entity_position_and_rotation() {
    let mut world = make_world();
    let stage = spawn_stage(&mut world);
    let scene = spawn_container(&mut world);
    let node = spawn_entity(&mut world, sprite(10.0, 10.0));
    add_child(&mut world, stage, scene).unwrap();
    add_child(&mut world, scene, node).unwrap();

    world.get_mut::<MapPosition>(scene).unwrap().pos = Vector2 { x: 100.0, y: 0.0 };
    world.get_mut::<MapPosition>(node).unwrap().pos = Vector2 { x: 20.0, y: 30.0 };
    world.get_mut::<Rotation>(node).unwrap().radians = 0.5;

    // Inserted on the first pass, updated in place afterwards
    tick_propagate(&mut world);
    tick_propagate(&mut world);

    let visual = world.get::<EntityNode>(node).unwrap().visual;
    let gt = world.get::<GlobalTransform2D>(visual).unwrap();
    assert!(approx_eq(gt.position.x, 120.0));
    assert!(approx_eq(gt.position.y, 30.0));
    assert!(approx_eq(gt.rotation, 0.5));
}

#[test]
fn child_offset_rotates_with_parent() {
    let mut world = make_world();
    let stage = spawn_stage(&mut world);
    let scene = spawn_container(&mut world);
    add_child(&mut world, stage, scene).unwrap();
    world.get_mut::<Rotation>(scene).unwrap().radians = std::f32::consts::FRAC_PI_2;

    let node = spawn_entity(&mut world, sprite(4.0, 4.0));
    add_child(&mut world, scene, node).unwrap();
    world.get_mut::<MapPosition>(node).unwrap().pos = Vector2 { x: 10.0, y: 0.0 };

    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform2D>(node).unwrap();
    assert!(approx_eq(gt.position.x, 0.0));
    assert!(approx_eq(gt.position.y, 10.0));
    assert!(approx_eq(gt.rotation, std::f32::consts::FRAC_PI_2));
}

#[test]
fn draw_order_is_stage_preorder() {
    let mut world = make_world();
    let stage = spawn_stage(&mut world);
    let scene = spawn_container(&mut world);
    let first = spawn_entity(&mut world, sprite(1.0, 1.0));
    let second = spawn_entity(&mut world, sprite(1.0, 1.0));
    add_child(&mut world, scene, first).unwrap();
    add_child(&mut world, scene, second).unwrap();
    add_child(&mut world, stage, scene).unwrap();

    tick_propagate(&mut world);

    let order = |world: &World, e: Entity| world.get::<GlobalTransform2D>(e).unwrap().draw_order;
    let first_visual = world.get::<EntityNode>(first).unwrap().visual;
    let second_visual = world.get::<EntityNode>(second).unwrap().visual;

    assert_eq!(order(&world, stage), 0);
    assert_eq!(order(&world, scene), 1);
    assert!(order(&world, first) < order(&world, first_visual));
    assert!(order(&world, first_visual) < order(&world, second));
    assert!(order(&world, second) < order(&world, second_visual));
}

#[test]
fn reparenting_moves_the_node() {
    let mut world = make_world();
    let stage = spawn_stage(&mut world);
    let left = spawn_container(&mut world);
    let right = spawn_container(&mut world);
    add_child(&mut world, stage, left).unwrap();
    add_child(&mut world, stage, right).unwrap();
    world.get_mut::<MapPosition>(right).unwrap().pos = Vector2 { x: 50.0, y: 0.0 };

    let node = spawn_entity(&mut world, sprite(1.0, 1.0));
    add_child(&mut world, left, node).unwrap();
    add_child(&mut world, right, node).unwrap();

    tick_propagate(&mut world);

    let gt = world.get::<GlobalTransform2D>(node).unwrap();
    assert!(approx_eq(gt.position.x, 50.0));
    assert!(world.get::<Children>(left).is_none_or(|c| c.is_empty()));
}

#[test]
fn detaching_a_subtree_drops_its_transforms() {
    let mut world = make_world();
    let stage = spawn_stage(&mut world);
    let scene = spawn_container(&mut world);
    let node = spawn_entity(&mut world, sprite(10.0, 10.0));
    add_child(&mut world, stage, scene).unwrap();
    add_child(&mut world, scene, node).unwrap();
    let visual = world.get::<EntityNode>(node).unwrap().visual;

    tick_propagate(&mut world);
    assert!(world.get::<GlobalTransform2D>(visual).is_some());

    world.entity_mut(scene).remove::<ChildOf>();
    tick_propagate(&mut world);

    assert!(world.get::<GlobalTransform2D>(stage).is_some());
    assert!(world.get::<GlobalTransform2D>(scene).is_none());
    assert!(world.get::<GlobalTransform2D>(node).is_none());
    assert!(world.get::<GlobalTransform2D>(visual).is_none());

    add_child(&mut world, stage, scene).unwrap();
    tick_propagate(&mut world);
    assert!(world.get::<GlobalTransform2D>(visual).is_some());
}
