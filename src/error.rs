//! Error types surfaced by the shell and the resource loader.

use std::path::PathBuf;

use bevy_ecs::entity::Entity;
use thiserror::Error;

/// Errors reported to the game while it drives the shell.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Key {0} is not registered")]
    UnregisteredKey(String),
    #[error("Texture {0} is not loaded")]
    MissingTexture(String),
    #[error("Sprite sheet {0} is not loaded")]
    MissingSheet(String),
    #[error("Frame {frame} not found in sprite sheet {sheet}")]
    MissingFrame { frame: String, sheet: String },
    #[error("Entity {0:?} is not a scene node")]
    NotANode(Entity),
    #[error("Resource loading failed: {0}")]
    AssetLoad(#[from] LoadError),
    #[error("The shell was already started")]
    AlreadyStarted,
    #[error("Could not upload texture {name}: {message}")]
    Texture { name: String, message: String },
}

/// Errors produced on the loader thread.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not decode image {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid sprite sheet {path:?}: {source}")]
    SpriteSheet {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported resource type for {0}")]
    UnsupportedKind(String),
    #[error("Resource name {0} is used twice")]
    DuplicateName(String),
    #[error("Loader thread stopped without a result")]
    Disconnected,
}
