//! Raylib window loop driving a [`Shell`].
//!
//! Each frame: check on the loader, forward keyboard transitions to the shell
//! (running platform defaults the game did not claim), advance the game by
//! the frame time in 60 FPS frames, then draw the stage.

use log::info;
use raylib::prelude::*;

use crate::error::EngineError;
use crate::resources::keyboard::DefaultKeyAction;
use crate::resources::texturestore::TextureStore;
use crate::shell::{Game, Shell};
use crate::systems::input::poll_keyboard;
use crate::systems::render::{render_loading, render_pass};

/// Raylib reports seconds; the game counts 60 FPS frames.
const FRAMES_PER_SECOND: f32 = 60.0;

/// Open the window and run `shell` until the window closes or the game quits.
pub fn run<G: Game>(mut shell: Shell<G>) -> Result<(), EngineError> {
    let config = shell.config().clone();
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a default key action
    rl.set_exit_key(None);

    let (r, g, b) = config.background_rgb();
    let background = Color::new(r, g, b, 255);

    // Declared after `rl` so textures are unloaded while the GL context is alive.
    let mut textures = TextureStore::new();
    let mut uploaded = false;

    shell.begin_loading()?;

    while !rl.window_should_close() {
        let keys = shell.polled_keys();
        let events = poll_keyboard(&rl, keys.iter().map(String::as_str));
        let mut quit = false;
        for event in &events {
            match shell.dispatch_key(event) {
                Some(DefaultKeyAction::Quit) => quit = true,
                Some(DefaultKeyAction::ToggleFullscreen) => rl.toggle_fullscreen(),
                None => {}
            }
        }
        if quit {
            info!("Quit requested");
            break;
        }

        let running = shell.poll_loading()?;
        if running && !uploaded {
            textures.upload(&mut rl, &thread, shell.assets())?;
            info!("Uploaded {} textures", textures.len());
            uploaded = true;
        }

        if running {
            let delta = rl.get_frame_time() * FRAMES_PER_SECOND;
            shell.frame(delta)?;
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(background);
        if running {
            render_pass(shell.world_mut(), &mut d, &textures);
        } else {
            render_loading(&mut d, config.window_height as i32);
        }
    }
    Ok(())
}
