//! Scene graph markers.
//!
//! - [`Stage`] marks the single root the renderer walks from.
//! - [`EntityNode`] marks a game entity and points at its visual child.
//! - [`Container`] marks a plain grouping node with no visual.
use bevy_ecs::prelude::*;

/// Root of everything that gets drawn.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Stage;

/// Grouping node.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Container;

/// A positioned, rotatable, velocity-bearing node owning one sprite child.
#[derive(Component, Clone, Copy, Debug)]
pub struct EntityNode {
    /// The child entity carrying the [`Sprite`](super::sprite::Sprite).
    pub visual: Entity,
}
