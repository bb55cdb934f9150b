//! ECS components for entities.
//!
//! Submodules overview:
//! - [`globaltransform2d`] – world-space transform computed from the stage down
//! - [`keystate`] – tracked keyboard keys, their callbacks and listeners
//! - [`mapposition`] – local position (pivot) of a scene node
//! - [`node`] – scene graph markers (stage, containers, game entities)
//! - [`rotation`] – rotation angle in radians
//! - [`sprite`] – 2D sprite rendering component
//! - [`velocity`] – velocity integrated by the movement system

pub mod globaltransform2d;
pub mod keystate;
pub mod mapposition;
pub mod node;
pub mod rotation;
pub mod sprite;
pub mod velocity;
