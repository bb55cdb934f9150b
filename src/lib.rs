//! Catnip: a small 2D game shell.
//!
//! The shell loads a resource manifest in the background, then drives a
//! [`shell::Game`] with one `initialize` and one `update` per frame. Scene,
//! input and timing live in a bevy_ecs world; raylib draws it.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod runner;
pub mod shell;
pub mod systems;
