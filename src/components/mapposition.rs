//! Local position of a scene node.
//!
//! For an entity attached under another node (via
//! [`ChildOf`](bevy_ecs::hierarchy::ChildOf)) the position is relative to the
//! parent. [`crate::systems::propagate_transforms`] resolves it to world space.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
