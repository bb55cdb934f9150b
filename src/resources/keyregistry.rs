//! Registry of tracked keys.
//!
//! Maps platform key names to the entity holding the key's
//! [`KeyState`](crate::components::keystate::KeyState). Owned by the world and
//! changed only by [`register_key`](crate::systems::keyboard::register_key).

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default)]
pub struct KeyRegistry {
    keys: FxHashMap<String, Entity>,
}

impl KeyRegistry {
    pub fn get(&self, name: &str) -> Option<Entity> {
        self.keys.get(name).copied()
    }

    /// Record `entity` as the tracker for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, entity: Entity) -> Option<Entity> {
        self.keys.insert(name.into(), entity)
    }

    /// Names of all tracked keys, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
