use bevy_ecs::prelude::{Entity, Resource};

/// The stage entity everything drawn hangs from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRoot(pub Entity);
