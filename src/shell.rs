//! The game shell.
//!
//! A [`Shell`] owns the ECS world and one [`Game`]. It loads the resource
//! manifest on a background thread, calls [`Game::initialize`] exactly once
//! when every resource is in, then calls [`Game::update`] once per frame.
//!
//! ```ignore
//! let mut shell = Shell::new(config, manifest, MyGame::default());
//! shell.start()?;
//! loop {
//!     shell.frame(1.0)?;
//! }
//! ```
//!
//! The raylib window loop lives in [`crate::runner`]; everything here runs
//! headless so it can be driven from tests.

use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::math::Vector2;

use crate::components::keystate::{KeyCallback, KeyHandle};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;
use crate::error::{EngineError, LoadError};
use crate::events::keyboard::KeyboardEvent;
use crate::resources::assets::AssetStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::keyboard::{DefaultKeyAction, KeyDefaults, PreventedDefaults};
use crate::resources::keyregistry::KeyRegistry;
use crate::resources::loader::{LoadBridge, LoadResult, spawn_loader};
use crate::resources::manifest::ResourceManifest;
use crate::resources::stage::StageRoot;
use crate::resources::worldtime::WorldTime;
use crate::systems::keyboard::{
    dispatch_with_defaults, handle_is_down, handle_is_up, key_is_down, key_is_up, register_key,
    set_on_press, set_on_release, unsubscribe_key,
};
use crate::systems::movement::movement;
use crate::systems::propagate_transforms::propagate_transforms;
use crate::systems::scene::{add_child, spawn_container, spawn_entity, spawn_stage};
use crate::systems::time::update_world_time;

/// Hooks a game provides to the shell.
pub trait Game {
    /// Called once, after every manifest resource has loaded.
    fn initialize(&mut self, ctx: &mut GameContext) -> Result<(), EngineError>;

    /// Called once per frame after initialization.
    ///
    /// `elapsed` is the sum of every `delta` so far, this frame's included.
    /// `delta` is the frame length in 60 FPS frames (1.0 at 60 FPS).
    fn update(
        &mut self,
        ctx: &mut GameContext,
        elapsed: f32,
        delta: f32,
    ) -> Result<(), EngineError>;
}

/// Lifecycle of a [`Shell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Created,
    Loading,
    Running,
    Failed,
}

/// What a game can do with the world during its hooks.
pub struct GameContext<'w> {
    world: &'w mut World,
}

impl<'w> GameContext<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    /// Start tracking a key by its DOM name. Replaces any previous tracker.
    pub fn listen_to_key(&mut self, name: &str) -> KeyHandle {
        register_key(self.world, name)
    }

    pub fn unsubscribe(&mut self, handle: KeyHandle) {
        unsubscribe_key(self.world, handle);
    }

    pub fn on_press(&mut self, handle: KeyHandle, callback: KeyCallback) {
        set_on_press(self.world, handle, callback);
    }

    pub fn on_release(&mut self, handle: KeyHandle, callback: KeyCallback) {
        set_on_release(self.world, handle, callback);
    }

    pub fn is_key_down(&self, name: &str) -> Result<bool, EngineError> {
        key_is_down(self.world, name)
    }

    pub fn is_key_up(&self, name: &str) -> Result<bool, EngineError> {
        key_is_up(self.world, name)
    }

    /// State of the exact tracker `handle` refers to.
    pub fn is_handle_down(&self, handle: KeyHandle) -> Result<bool, EngineError> {
        handle_is_down(self.world, handle)
    }

    pub fn is_handle_up(&self, handle: KeyHandle) -> Result<bool, EngineError> {
        handle_is_up(self.world, handle)
    }

    /// Sprite showing a whole loaded texture.
    pub fn create_sprite(&self, texture: &str) -> Result<Sprite, EngineError> {
        self.world
            .get_resource::<AssetStore>()
            .and_then(|assets| assets.texture(texture))
            .map(|info| Sprite::from_texture(texture, info))
            .ok_or_else(|| EngineError::MissingTexture(texture.to_string()))
    }

    /// Sprite showing one frame of a loaded sprite sheet.
    pub fn create_sprite_from(&self, frame: &str, sheet: &str) -> Result<Sprite, EngineError> {
        let sprite_sheet = self
            .world
            .get_resource::<AssetStore>()
            .and_then(|assets| assets.sheet(sheet))
            .ok_or_else(|| EngineError::MissingSheet(sheet.to_string()))?;
        sprite_sheet
            .frames
            .get(frame)
            .map(|f| Sprite::from_frame(sheet, f))
            .ok_or_else(|| EngineError::MissingFrame {
                frame: frame.to_string(),
                sheet: sheet.to_string(),
            })
    }

    /// Spawn a game entity showing `sprite`. It is not on stage until added.
    pub fn spawn_entity(&mut self, sprite: Sprite) -> Entity {
        spawn_entity(self.world, sprite)
    }

    pub fn spawn_container(&mut self) -> Entity {
        spawn_container(self.world)
    }

    pub fn add_child(&mut self, parent: Entity, child: Entity) -> Result<(), EngineError> {
        add_child(self.world, parent, child)
    }

    /// Root of the scene graph.
    pub fn stage(&self) -> Entity {
        self.world.resource::<StageRoot>().0
    }

    pub fn set_position(&mut self, entity: Entity, x: f32, y: f32) -> Result<(), EngineError> {
        let mut position = self
            .world
            .get_mut::<MapPosition>(entity)
            .ok_or(EngineError::NotANode(entity))?;
        position.pos = Vector2 { x, y };
        Ok(())
    }

    pub fn position(&self, entity: Entity) -> Result<Vector2, EngineError> {
        self.world
            .get::<MapPosition>(entity)
            .map(|p| p.pos)
            .ok_or(EngineError::NotANode(entity))
    }

    /// Set rotation in radians.
    pub fn set_rotation(&mut self, entity: Entity, radians: f32) -> Result<(), EngineError> {
        let mut rotation = self
            .world
            .get_mut::<Rotation>(entity)
            .ok_or(EngineError::NotANode(entity))?;
        rotation.radians = radians;
        Ok(())
    }

    pub fn rotation(&self, entity: Entity) -> Result<f32, EngineError> {
        self.world
            .get::<Rotation>(entity)
            .map(|r| r.radians)
            .ok_or(EngineError::NotANode(entity))
    }

    pub fn set_velocity(&mut self, entity: Entity, vx: f32, vy: f32) -> Result<(), EngineError> {
        let mut velocity = self
            .world
            .get_mut::<Velocity>(entity)
            .ok_or(EngineError::NotANode(entity))?;
        velocity.set(vx, vy);
        Ok(())
    }

    pub fn velocity(&self, entity: Entity) -> Result<Velocity, EngineError> {
        self.world
            .get::<Velocity>(entity)
            .copied()
            .ok_or(EngineError::NotANode(entity))
    }

    /// Integrate one entity's velocity right now.
    ///
    /// The movement system already does this for every entity each frame;
    /// this is for games that step entities themselves.
    pub fn update_entity(&mut self, entity: Entity, delta: f32) -> Result<(), EngineError> {
        let velocity = self.velocity(entity)?;
        let mut position = self
            .world
            .get_mut::<MapPosition>(entity)
            .ok_or(EngineError::NotANode(entity))?;
        velocity.integrate(&mut position, delta);
        Ok(())
    }

    pub fn world(&self) -> &World {
        self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.world
    }
}

/// Owns the world, the game and the loading lifecycle.
pub struct Shell<G: Game> {
    world: World,
    game: G,
    manifest: Option<ResourceManifest>,
    state: ShellState,
    loader: Option<LoadBridge>,
    schedule: Schedule,
}

impl<G: Game> Shell<G> {
    pub fn new(config: GameConfig, manifest: ResourceManifest, game: G) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        world.insert_resource(config);
        world.insert_resource(AssetStore::new());
        world.insert_resource(KeyRegistry::default());
        world.insert_resource(KeyDefaults::default());
        world.insert_resource(PreventedDefaults::default());
        spawn_stage(&mut world);

        let mut schedule = Schedule::default();
        schedule.add_systems((movement, propagate_transforms).chain());

        Self {
            world,
            game,
            manifest: Some(manifest),
            state: ShellState::Created,
            loader: None,
            schedule,
        }
    }

    /// Load every resource, then initialize the game. Blocks until done.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.begin_loading()?;
        info!("[catnip] Waiting for resources to load...");
        let result = match self.loader.as_mut() {
            Some(loader) => loader.wait(),
            None => Err(LoadError::Disconnected),
        };
        self.loader = None;
        self.finish_loading(result)
    }

    /// Hand the manifest to the loader thread and return immediately.
    pub fn begin_loading(&mut self) -> Result<(), EngineError> {
        if self.state != ShellState::Created {
            return Err(EngineError::AlreadyStarted);
        }
        let manifest = self.manifest.take().unwrap_or_default();
        info!(
            "[catnip] Loading {} resources in {} batches...",
            manifest.len(),
            manifest.batches().len()
        );
        let root = self.world.resource::<GameConfig>().assets_root.clone();
        self.loader = Some(spawn_loader(manifest, root));
        self.state = ShellState::Loading;
        Ok(())
    }

    /// Check on the loader without blocking.
    ///
    /// Returns `Ok(true)` once the game is running. The frame that sees the
    /// load complete also runs `initialize`.
    pub fn poll_loading(&mut self) -> Result<bool, EngineError> {
        match self.state {
            ShellState::Running => Ok(true),
            ShellState::Created | ShellState::Failed => Ok(false),
            ShellState::Loading => {
                let Some(result) = self.loader.as_mut().and_then(LoadBridge::poll) else {
                    return Ok(false);
                };
                self.loader = None;
                self.finish_loading(result)?;
                Ok(true)
            }
        }
    }

    fn finish_loading(&mut self, result: LoadResult) -> Result<(), EngineError> {
        let assets = match result {
            Ok(assets) => assets,
            Err(e) => {
                error!("[catnip] Resource loading failed: {}", e);
                self.state = ShellState::Failed;
                return Err(e.into());
            }
        };
        info!("[catnip] Resources loaded.");
        self.world.resource_mut::<AssetStore>().install(assets);

        info!("[catnip] Initialize the game...");
        let mut ctx = GameContext::new(&mut self.world);
        if let Err(e) = self.game.initialize(&mut ctx) {
            error!("[catnip] Game initialization failed: {}", e);
            self.state = ShellState::Failed;
            return Err(e);
        }
        info!("[catnip] Game initialized.");

        info!("[catnip] Start the game updates...");
        self.state = ShellState::Running;
        Ok(())
    }

    /// Advance one frame: time, the game's update, movement, transforms.
    ///
    /// Does nothing until the game is running.
    pub fn frame(&mut self, delta: f32) -> Result<(), EngineError> {
        if self.state != ShellState::Running {
            return Ok(());
        }
        update_world_time(&mut self.world, delta);
        let time = *self.world.resource::<WorldTime>();

        let mut ctx = GameContext::new(&mut self.world);
        self.game.update(&mut ctx, time.elapsed, time.delta)?;

        self.schedule.run(&mut self.world);
        Ok(())
    }

    /// Deliver a platform key event and return the default action to perform.
    pub fn dispatch_key(&mut self, event: &KeyboardEvent) -> Option<DefaultKeyAction> {
        dispatch_with_defaults(&mut self.world, event)
    }

    /// Key names the platform layer should poll: tracked keys plus keys with
    /// a default action.
    pub fn polled_keys(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .world
            .resource::<KeyRegistry>()
            .names()
            .map(str::to_string)
            .collect();
        for key in self.world.resource::<KeyDefaults>().keys() {
            if !names.iter().any(|n| n == key) {
                names.push(key.to_string());
            }
        }
        names
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Sum of every delta passed to [`frame`](Self::frame) while running.
    pub fn elapsed(&self) -> f32 {
        self.world.resource::<WorldTime>().elapsed
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    pub fn assets(&self) -> &AssetStore {
        self.world.resource::<AssetStore>()
    }

    /// Context over the shell's world, for work outside the game hooks.
    pub fn context(&mut self) -> GameContext<'_> {
        GameContext::new(&mut self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }
}
