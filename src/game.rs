//! The sample game.
//!
//! An explorer moved with the arrow keys and a cat circling and spinning on
//! its own. Both live in one container attached to the stage.

use bevy_ecs::prelude::Entity;

use crate::error::EngineError;
use crate::resources::gameconfig::GameConfig;
use crate::resources::manifest::{ManifestEntry, ResourceManifest};
use crate::shell::{Game, GameContext};

const PLAYER_SPEED: f32 = 5.0;
const CAT_CENTER_X: f32 = 128.0;
const CAT_RADIUS: f32 = 100.0;
const CAT_PERIOD: f32 = 50.0;

/// Keys checked in this order; later keys win on the same axis.
const ARROWS: [(&str, f32, f32); 4] = [
    ("ArrowLeft", -PLAYER_SPEED, 0.0),
    ("ArrowUp", 0.0, -PLAYER_SPEED),
    ("ArrowRight", PLAYER_SPEED, 0.0),
    ("ArrowDown", 0.0, PLAYER_SPEED),
];

#[derive(Debug, Default)]
pub struct SampleGame {
    player: Option<Entity>,
    cat: Option<Entity>,
    scene: Option<Entity>,
}

impl SampleGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window settings the game is designed for: 600 wide, 16:9.
    pub fn config() -> GameConfig {
        GameConfig::new()
            .with_size(600, (9.0 / 16.0 * 600.0) as u32)
            .with_background(0x008888)
            .with_title("Catnip")
    }

    /// The cat first, then the sprite sheet holding the explorer.
    pub fn manifest() -> ResourceManifest {
        ResourceManifest::new()
            .with_batch([ManifestEntry::named("cat", "img/cat.png")])
            .with_batch([ManifestEntry::named("spritesheet", "img/spritesheet.json")])
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn cat(&self) -> Option<Entity> {
        self.cat
    }

    pub fn scene(&self) -> Option<Entity> {
        self.scene
    }
}

impl Game for SampleGame {
    fn initialize(&mut self, ctx: &mut GameContext) -> Result<(), EngineError> {
        let explorer = ctx.create_sprite_from("explorer.png", "spritesheet")?;
        let player = ctx.spawn_entity(explorer);
        ctx.set_position(player, 64.0, 128.0)?;

        for (key, _, _) in ARROWS {
            ctx.listen_to_key(key);
        }

        let cat_sprite = ctx.create_sprite("cat")?;
        let cat = ctx.spawn_entity(cat_sprite);

        let scene = ctx.spawn_container();
        ctx.add_child(scene, player)?;
        ctx.add_child(scene, cat)?;
        ctx.add_child(ctx.stage(), scene)?;

        self.player = Some(player);
        self.cat = Some(cat);
        self.scene = Some(scene);
        Ok(())
    }

    fn update(
        &mut self,
        ctx: &mut GameContext,
        elapsed: f32,
        _delta: f32,
    ) -> Result<(), EngineError> {
        if let Some(cat) = self.cat {
            let y = ctx.position(cat)?.y;
            ctx.set_position(cat, CAT_CENTER_X + (elapsed / CAT_PERIOD).cos() * CAT_RADIUS, y)?;
            ctx.set_rotation(cat, elapsed / CAT_PERIOD)?;
        }

        if let Some(player) = self.player {
            let (mut vx, mut vy) = (0.0, 0.0);
            for (key, kx, ky) in ARROWS {
                if ctx.is_key_down(key)? {
                    if kx != 0.0 {
                        vx = kx;
                    }
                    if ky != 0.0 {
                        vy = ky;
                    }
                }
            }
            ctx.set_velocity(player, vx, vy)?;
        }
        Ok(())
    }
}
