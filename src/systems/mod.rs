//! ECS systems and world-level operations.
//!
//! Overview
//! - `input` – raylib keyboard polling into keyboard events
//! - `keyboard` – key registration, state queries and event dispatch
//! - `loader` – manifest loading on the loader thread
//! - `movement` – velocity integration
//! - `propagate_transforms` – world transforms from the stage down
//! - `render` – sprite drawing
//! - `scene` – stage, containers and game entities
//! - `time` – frame timing
pub mod input;
pub mod keyboard;
pub mod loader;
pub mod movement;
pub mod propagate_transforms;
pub mod render;
pub mod scene;
pub mod time;
