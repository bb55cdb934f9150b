//! Manifest loading, run on the loader thread.
//!
//! Images are probed for their dimensions only; pixels are read again by
//! raylib when the textures are uploaded on the main thread. Sprite sheets are
//! TexturePacker JSON files whose `meta.image` is resolved relative to the
//! sheet file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use crate::error::LoadError;
use crate::resources::assets::{Frame, LoadedAssets, LoadedResource, SpriteSheet, TextureInfo};
use crate::resources::manifest::{ManifestEntry, ResourceManifest};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tga"];

#[derive(Debug, Deserialize)]
struct SheetFile {
    frames: SheetFrames,
    meta: SheetMeta,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SheetFrames {
    Hash(BTreeMap<String, SheetFrame>),
    List(Vec<NamedSheetFrame>),
}

#[derive(Debug, Deserialize)]
struct SheetFrame {
    frame: FrameRect,
}

#[derive(Debug, Deserialize)]
struct NamedSheetFrame {
    filename: String,
    frame: FrameRect,
}

#[derive(Debug, Deserialize)]
struct FrameRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    image: String,
}

impl From<FrameRect> for Frame {
    fn from(rect: FrameRect) -> Self {
        Frame {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }
}

/// Load every manifest entry, batch after batch.
///
/// Stops at the first failing entry. Two entries sharing a name are rejected.
pub fn load_manifest(manifest: &ResourceManifest, root: &Path) -> Result<LoadedAssets, LoadError> {
    let mut loaded = LoadedAssets::default();
    let mut seen = FxHashSet::default();
    for (index, batch) in manifest.batches().iter().enumerate() {
        debug!("Loading batch {} ({} resources)", index, batch.len());
        for entry in batch {
            if !seen.insert(entry.name().to_string()) {
                return Err(LoadError::DuplicateName(entry.name().to_string()));
            }
            loaded.resources.push(load_entry(entry, root)?);
        }
    }
    info!("Loaded {} resources from {:?}", loaded.resources.len(), root);
    Ok(loaded)
}

fn load_entry(entry: &ManifestEntry, root: &Path) -> Result<LoadedResource, LoadError> {
    let path = root.join(entry.path());
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        let info = probe_image(path)?;
        Ok(LoadedResource::Texture {
            name: entry.name().to_string(),
            info,
        })
    } else if extension == "json" {
        let sheet = load_sprite_sheet(&path)?;
        Ok(LoadedResource::SpriteSheet {
            name: entry.name().to_string(),
            sheet,
        })
    } else {
        Err(LoadError::UnsupportedKind(entry.path().to_string()))
    }
}

fn probe_image(path: PathBuf) -> Result<TextureInfo, LoadError> {
    if !path.is_file() {
        return Err(LoadError::Io {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
            path,
        });
    }
    match image::image_dimensions(&path) {
        Ok((width, height)) => Ok(TextureInfo {
            path,
            width,
            height,
        }),
        Err(source) => Err(LoadError::Image { path, source }),
    }
}

fn load_sprite_sheet(path: &Path) -> Result<SpriteSheet, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SheetFile = serde_json::from_str(&text).map_err(|source| LoadError::SpriteSheet {
        path: path.to_path_buf(),
        source,
    })?;

    let image_path = path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&file.meta.image);
    let image = probe_image(image_path)?;

    let frames: FxHashMap<String, Frame> = match file.frames {
        SheetFrames::Hash(map) => map
            .into_iter()
            .map(|(name, entry)| (name, entry.frame.into()))
            .collect(),
        SheetFrames::List(list) => list
            .into_iter()
            .map(|entry| (entry.filename, entry.frame.into()))
            .collect(),
    };

    Ok(SpriteSheet { image, frames })
}
