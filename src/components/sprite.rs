use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::assets::{Frame, TextureInfo};

/// Sprite is identified by a texture key, its size in world units and an offset if the texture is a spritesheet.
/// The offset selects the frame inside the spritesheet image.
/// The origin is the pivot point (in pixels) relative to the frame's top-left
/// used for placement and rotation when rendering.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
}

impl Sprite {
    /// Sprite covering a whole loaded texture, pivot at the top-left.
    pub fn from_texture(tex_key: impl Into<String>, info: &TextureInfo) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: info.width as f32,
            height: info.height as f32,
            offset: Vector2 { x: 0.0, y: 0.0 },
            origin: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Sprite showing one frame of a sprite sheet image.
    pub fn from_frame(sheet_key: impl Into<String>, frame: &Frame) -> Self {
        Self {
            tex_key: sheet_key.into(),
            width: frame.w,
            height: frame.h,
            offset: Vector2 {
                x: frame.x,
                y: frame.y,
            },
            origin: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Move the pivot to a fraction of the sprite size (0.5, 0.5 is the center).
    pub fn with_anchor(mut self, ax: f32, ay: f32) -> Self {
        self.origin = Vector2 {
            x: self.width * ax,
            y: self.height * ay,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_texture_uses_full_size() {
        let info = TextureInfo {
            path: PathBuf::from("img/cat.png"),
            width: 32,
            height: 24,
        };
        let sprite = Sprite::from_texture("cat", &info);
        assert_eq!(sprite.tex_key, "cat");
        assert_eq!(sprite.width, 32.0);
        assert_eq!(sprite.height, 24.0);
        assert_eq!(sprite.offset, Vector2 { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_from_frame_uses_frame_rect() {
        let frame = Frame {
            x: 16.0,
            y: 8.0,
            w: 21.0,
            h: 32.0,
        };
        let sprite = Sprite::from_frame("spritesheet", &frame);
        assert_eq!(sprite.tex_key, "spritesheet");
        assert_eq!(sprite.offset, Vector2 { x: 16.0, y: 8.0 });
        assert_eq!(sprite.width, 21.0);
        assert_eq!(sprite.height, 32.0);
    }

    #[test]
    fn test_center_anchor() {
        let frame = Frame {
            x: 0.0,
            y: 0.0,
            w: 20.0,
            h: 30.0,
        };
        let sprite = Sprite::from_frame("sheet", &frame).with_anchor(0.5, 0.5);
        assert_eq!(sprite.origin, Vector2 { x: 10.0, y: 15.0 });
    }
}
