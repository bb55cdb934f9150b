//! Loaded asset metadata.
//!
//! The loader thread produces [`LoadedAssets`]; once delivered, the shell
//! installs them into the [`AssetStore`] resource. The store only keeps
//! metadata (paths, sizes, sprite-sheet frames) so sprites can be created
//! without a graphics context. GPU textures are uploaded separately into
//! [`TextureStore`](crate::resources::texturestore::TextureStore).

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// A loaded image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Rectangle of one frame inside a sprite-sheet image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A sprite-sheet image and its named frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub image: TextureInfo,
    pub frames: FxHashMap<String, Frame>,
}

/// One entry of a completed load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedResource {
    Texture { name: String, info: TextureInfo },
    SpriteSheet { name: String, sheet: SpriteSheet },
}

impl LoadedResource {
    pub fn name(&self) -> &str {
        match self {
            LoadedResource::Texture { name, .. } => name,
            LoadedResource::SpriteSheet { name, .. } => name,
        }
    }
}

/// Result of loading a whole manifest, in manifest order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedAssets {
    pub resources: Vec<LoadedResource>,
}

impl LoadedAssets {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(LoadedResource::name)
    }
}

/// Metadata of every loaded texture and sprite sheet, keyed by resource name.
#[derive(Resource, Debug, Default)]
pub struct AssetStore {
    textures: FxHashMap<String, TextureInfo>,
    sheets: FxHashMap<String, SpriteSheet>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a completed load.
    pub fn install(&mut self, assets: LoadedAssets) {
        for resource in assets.resources {
            match resource {
                LoadedResource::Texture { name, info } => {
                    self.textures.insert(name, info);
                }
                LoadedResource::SpriteSheet { name, sheet } => {
                    self.sheets.insert(name, sheet);
                }
            }
        }
    }

    pub fn texture(&self, name: &str) -> Option<&TextureInfo> {
        self.textures.get(name)
    }

    pub fn sheet(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty() && self.sheets.is_empty()
    }

    /// Every image that needs a GPU texture, keyed the way sprites refer to it:
    /// plain textures by their name, sheet images by the sheet name.
    pub fn texture_sources(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.textures
            .iter()
            .map(|(name, info)| (name.as_str(), info.path.as_path()))
            .chain(
                self.sheets
                    .iter()
                    .map(|(name, sheet)| (name.as_str(), sheet.image.path.as_path())),
            )
    }
}
