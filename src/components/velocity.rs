//! Velocity carried by game entities.
//!
//! The [`Velocity`] component is written by game logic every frame and read
//! by the [`movement`](crate::systems::movement::movement) system, which
//! integrates it into [`MapPosition`](super::mapposition::MapPosition).
//!
//! Integration is plain explicit Euler scaled by the frame delta. Nothing is
//! clamped: keeping entities on screen is the game's responsibility.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::MapPosition;

/// 2D velocity in world units per delta unit.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy }
    }

    /// Set both components at once.
    pub fn set(&mut self, vx: f32, vy: f32) {
        self.vx = vx;
        self.vy = vy;
    }

    /// Advance `position` by `velocity * delta`.
    pub fn integrate(&self, position: &mut MapPosition, delta: f32) {
        position.pos.x += self.vx * delta;
        position.pos.y += self.vy * delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_velocity_default_is_zero() {
        let v = Velocity::default();
        assert!(approx_eq(v.vx, 0.0));
        assert!(approx_eq(v.vy, 0.0));
    }

    #[test]
    fn test_integrate_single_step() {
        let v = Velocity::new(5.0, -5.0);
        let mut pos = MapPosition::new(10.0, 10.0);
        v.integrate(&mut pos, 2.0);
        assert!(approx_eq(pos.pos.x, 20.0));
        assert!(approx_eq(pos.pos.y, 0.0));
    }

    #[test]
    fn test_integrate_split_steps_match_single_step() {
        let v = Velocity::new(3.5, -1.25);

        let mut split = MapPosition::new(-4.0, 7.0);
        v.integrate(&mut split, 0.75);
        v.integrate(&mut split, 1.5);

        let mut single = MapPosition::new(-4.0, 7.0);
        v.integrate(&mut single, 2.25);

        assert!(approx_eq(split.pos.x, single.pos.x));
        assert!(approx_eq(split.pos.y, single.pos.y));
    }

    #[test]
    fn test_integrate_zero_delta_is_noop() {
        let v = Velocity::new(100.0, 100.0);
        let mut pos = MapPosition::new(1.0, 2.0);
        v.integrate(&mut pos, 0.0);
        assert_eq!(pos, MapPosition::new(1.0, 2.0));
    }

    #[test]
    fn test_set_overwrites_both_components() {
        let mut v = Velocity::new(1.0, 2.0);
        v.set(-5.0, 0.0);
        assert_eq!(v, Velocity::new(-5.0, 0.0));
    }
}
