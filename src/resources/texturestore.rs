//! GPU textures for every loaded image.
//!
//! Raylib textures are tied to the window's GL context, so this store is a
//! non-send resource filled on the main thread once loading finishes.

use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

use crate::error::EngineError;
use crate::resources::assets::AssetStore;

#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Upload every image referenced by `assets` that is not on the GPU yet.
    pub fn upload(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &AssetStore,
    ) -> Result<(), EngineError> {
        for (name, path) in assets.texture_sources() {
            if self.map.contains_key(name) {
                continue;
            }
            let path_str = path.to_string_lossy();
            let texture = rl
                .load_texture(thread, &path_str)
                .map_err(|e| EngineError::Texture {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
            log::debug!("Uploaded texture {} from {}", name, path_str);
            self.map.insert(name.to_string(), texture);
        }
        Ok(())
    }
}
