//! ECS resources made available to systems.
//!
//! Overview
//! - `assets` – metadata of loaded textures and sprite sheets
//! - `gameconfig` – window, asset root and time settings
//! - `keyboard` – default key actions and per-event prevention
//! - `keyregistry` – key name to key-entity lookup
//! - `loader` – bridge to the background loader thread
//! - `manifest` – batches of resources to load before the game starts
//! - `stage` – root node of the scene graph
//! - `texturestore` – GPU textures keyed by resource name
//! - `worldtime` – accumulated game time and frame delta
pub mod assets;
pub mod gameconfig;
pub mod keyboard;
pub mod keyregistry;
pub mod loader;
pub mod manifest;
pub mod stage;
pub mod texturestore;
pub mod worldtime;
