//! Scene graph construction.
//!
//! The stage is the single root the renderer walks from. Game entities are
//! two-level: an [`EntityNode`] carrying position, rotation and velocity, and
//! a visual child carrying the [`Sprite`]. Nothing is drawn until it is
//! attached, directly or through containers, under the stage.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::node::{Container, EntityNode, Stage};
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;
use crate::error::EngineError;
use crate::resources::stage::StageRoot;

/// Spawn the stage and record it in [`StageRoot`].
pub fn spawn_stage(world: &mut World) -> Entity {
    let stage = world
        .spawn((Stage, MapPosition::default(), Rotation::default()))
        .id();
    world.insert_resource(StageRoot(stage));
    stage
}

/// Spawn an empty grouping node, not yet attached anywhere.
pub fn spawn_container(world: &mut World) -> Entity {
    world
        .spawn((Container, MapPosition::default(), Rotation::default()))
        .id()
}

/// Spawn a game entity at the origin with zero velocity.
///
/// The sprite becomes the entity's visual child, anchored at its center so
/// the entity rotates around the sprite's centroid.
pub fn spawn_entity(world: &mut World, sprite: Sprite) -> Entity {
    let node = world
        .spawn((
            MapPosition::default(),
            Rotation::default(),
            Velocity::default(),
        ))
        .id();
    let visual = world
        .spawn((
            sprite.with_anchor(0.5, 0.5),
            MapPosition::default(),
            ChildOf(node),
        ))
        .id();
    world.entity_mut(node).insert(EntityNode { visual });
    debug!("Spawned entity {:?} with visual {:?}", node, visual);
    node
}

/// Attach `child` under `parent`, detaching it from any previous parent.
pub fn add_child(world: &mut World, parent: Entity, child: Entity) -> Result<(), EngineError> {
    if world.get_entity(parent).is_err() {
        return Err(EngineError::NotANode(parent));
    }
    if parent == child || world.get_entity(child).is_err() {
        return Err(EngineError::NotANode(child));
    }
    world.entity_mut(child).insert(ChildOf(parent));
    Ok(())
}
