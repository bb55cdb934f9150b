use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::sprite::Sprite;
use crate::resources::texturestore::TextureStore;

/// Draw every sprite reachable from the stage.
///
/// Sprites are drawn in stage traversal order so parents end up below their
/// children. Sprites whose texture is not uploaded are skipped.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle, textures: &TextureStore) {
    let mut to_draw: Vec<(Sprite, GlobalTransform2D)> = {
        let mut q = world.query::<(&Sprite, &GlobalTransform2D)>();
        q.iter(world).map(|(s, gt)| (s.clone(), *gt)).collect()
    };

    to_draw.sort_by_key(|(_, gt)| gt.draw_order);

    for (sprite, gt) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            // Source rect selects a frame from the spritesheet
            let src = Rectangle {
                x: sprite.offset.x,
                y: sprite.offset.y,
                width: sprite.width,
                height: sprite.height,
            };

            // Destination rect places the sprite so the global position is the pivot
            let dest = Rectangle {
                x: gt.position.x,
                y: gt.position.y,
                width: sprite.width,
                height: sprite.height,
            };

            d.draw_texture_pro(
                tex,
                src,
                dest,
                sprite.origin,
                gt.rotation.to_degrees(),
                Color::WHITE,
            );
        }
    }
}

/// Shown while the loader thread is still working.
pub fn render_loading(d: &mut RaylibDrawHandle, height: i32) {
    d.draw_text("Loading...", 20, height - 40, 20, Color::WHITE);
}
