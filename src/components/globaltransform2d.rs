//! Computed world-space transform for entities in the scene graph.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`MapPosition`](super::mapposition::MapPosition) and
//! [`Rotation`](super::rotation::Rotation) are interpreted as local to the
//! parent. The [`propagate_transforms`](crate::systems::propagate_transforms::propagate_transforms)
//! system computes the resulting world-space values and stores them here.

use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Computed world-space transform for nodes reachable from the stage.
///
/// `draw_order` is the pre-order position of the node in the stage traversal;
/// parents draw before their children and siblings in insertion order.
#[derive(Component, Clone, Copy, Debug)]
pub struct GlobalTransform2D {
    /// World-space position.
    pub position: Vector2,
    /// World-space rotation in radians.
    pub rotation: f32,
    /// Traversal index used to sort drawing.
    pub draw_order: u32,
}

impl Default for GlobalTransform2D {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            draw_order: 0,
        }
    }
}
