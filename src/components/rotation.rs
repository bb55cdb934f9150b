use bevy_ecs::prelude::Component;

/// Rotation of a scene node, in radians, clockwise on screen.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub radians: f32,
}

impl Rotation {
    pub fn new(radians: f32) -> Self {
        Self { radians }
    }

    /// Raylib draws with degrees.
    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }
}
