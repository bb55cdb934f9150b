//! Transform propagation from the stage down the scene graph.
//!
//! Computes [`GlobalTransform2D`] for every node reachable from a [`Stage`]
//! through [`Children`]. Nodes not attached to the stage lose their
//! `GlobalTransform2D`, which keeps them out of the render pass until they
//! are attached again.
//!
//! # Schedule position
//!
//! Runs **after** movement so the renderer sees this frame's positions.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use raylib::math::Vector2;
use rustc_hash::FxHashSet;

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::mapposition::MapPosition;
use crate::components::node::Stage;
use crate::components::rotation::Rotation;

/// Rotate a 2D vector by `angle` radians.
fn rotate(v: Vector2, angle: f32) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2 {
        x: v.x * cos - v.y * sin,
        y: v.x * sin + v.y * cos,
    }
}

type NodeQuery<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static MapPosition>,
        Option<&'static Rotation>,
        Option<&'static Children>,
    ),
    With<ChildOf>,
>;

/// Propagate transforms from the stage through the hierarchy.
///
/// Parents are visited before their children and siblings in insertion
/// order; the visit index is stored as `draw_order`. Entities missing a
/// `GlobalTransform2D` get it inserted via deferred [`Commands`]; entities
/// holding one that were not reached get it removed the same way.
pub fn propagate_transforms(
    stages: Query<
        (
            Entity,
            Option<&MapPosition>,
            Option<&Rotation>,
            Option<&Children>,
        ),
        With<Stage>,
    >,
    nodes: NodeQuery,
    mut globals: Query<(Entity, &mut GlobalTransform2D)>,
    mut commands: Commands,
) {
    let mut order = 0u32;
    let mut reached = FxHashSet::default();
    for (stage, pos, rot, children) in stages.iter() {
        let stage_gt = GlobalTransform2D {
            position: pos.map(|p| p.pos).unwrap_or(Vector2 { x: 0.0, y: 0.0 }),
            rotation: rot.map(|r| r.radians).unwrap_or(0.0),
            draw_order: order,
        };
        order += 1;
        store(stage, stage_gt, &mut globals, &mut commands);
        reached.insert(stage);

        if let Some(children) = children {
            propagate_children(
                &stage_gt,
                children,
                &nodes,
                &mut globals,
                &mut commands,
                &mut reached,
                &mut order,
            );
        }
    }

    for (entity, _) in globals.iter() {
        if !reached.contains(&entity) {
            commands.entity(entity).remove::<GlobalTransform2D>();
        }
    }
}

fn store(
    entity: Entity,
    gt: GlobalTransform2D,
    globals: &mut Query<(Entity, &mut GlobalTransform2D)>,
    commands: &mut Commands,
) {
    if let Ok((_, mut current)) = globals.get_mut(entity) {
        *current = gt;
    } else {
        commands.entity(entity).insert(gt);
    }
}

fn propagate_children(
    parent_gt: &GlobalTransform2D,
    children: &Children,
    nodes: &NodeQuery,
    globals: &mut Query<(Entity, &mut GlobalTransform2D)>,
    commands: &mut Commands,
    reached: &mut FxHashSet<Entity>,
    order: &mut u32,
) {
    for child in children.iter() {
        let Ok((pos, rot, grandchildren)) = nodes.get(child) else {
            continue;
        };

        let local = pos.map(|p| p.pos).unwrap_or(Vector2 { x: 0.0, y: 0.0 });
        let offset = rotate(local, parent_gt.rotation);
        let child_gt = GlobalTransform2D {
            position: Vector2 {
                x: parent_gt.position.x + offset.x,
                y: parent_gt.position.y + offset.y,
            },
            rotation: parent_gt.rotation + rot.map(|r| r.radians).unwrap_or(0.0),
            draw_order: *order,
        };
        *order += 1;
        store(child, child_gt, globals, commands);
        reached.insert(child);

        if let Some(grandchildren) = grandchildren {
            propagate_children(
                &child_gt,
                grandchildren,
                nodes,
                globals,
                commands,
                reached,
                order,
            );
        }
    }
}
