//! Catnip sample game entry point.
//!
//! Opens a 600x337 window, loads the cat and the explorer sprite sheet from
//! `assets/`, then lets the arrow keys move the explorer while the cat circles.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use catnip::game::SampleGame;
use catnip::runner;
use catnip::shell::Shell;
use clap::Parser;

/// Catnip sample game
#[derive(Parser)]
#[command(version, about = "A cat, an explorer and four arrow keys.")]
struct Cli {
    /// INI file overriding window, asset and time settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory manifest locations are resolved against.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SampleGame::config();
    match cli.config {
        Some(path) => {
            config = config.with_path(path);
            if let Err(e) = config.load_from_file() {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
        None => {
            // ./config.ini is optional; keep the game's own settings without it
            if config.config_path.is_file() {
                config.load_from_file().ok();
            }
        }
    }
    if let Some(root) = cli.assets {
        config = config.with_assets_root(root);
    }

    let shell = Shell::new(config, SampleGame::manifest(), SampleGame::new());
    match runner::run(shell) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
