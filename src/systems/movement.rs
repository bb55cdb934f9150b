use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;
use crate::resources::worldtime::WorldTime;

/// Integrate every entity's velocity into its position using this frame's delta.
pub fn movement(mut query: Query<(&mut MapPosition, &Velocity)>, time: Res<WorldTime>) {
    for (mut position, velocity) in query.iter_mut() {
        velocity.integrate(&mut position, time.delta);
    }
}
