//! Game configuration resource.
//!
//! The game builds its configuration in code (window size, background color,
//! title); an optional INI file can override any of it at startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 600
//! height = 337
//! background = 008888
//! title = Catnip
//! target_fps = 60
//!
//! [assets]
//! root = ./assets
//!
//! [time]
//! scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_BACKGROUND: u32 = 0x1099bb;
const DEFAULT_TITLE: &str = "Catnip";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_ASSETS_ROOT: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Clear color as 0xRRGGBB.
    pub background: u32,
    /// Window title.
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Directory manifest locations are resolved against.
    pub assets_root: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            background: DEFAULT_BACKGROUND,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            time_scale: DEFAULT_TIME_SCALE,
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_background(mut self, rgb: u32) -> Self {
        self.background = rgb & 0xff_ffff;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_assets_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.assets_root = root.into();
        self
    }

    /// Get window size as a tuple.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Background color split into (r, g, b).
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        (
            ((self.background >> 16) & 0xff) as u8,
            ((self.background >> 8) & 0xff) as u8,
            (self.background & 0xff) as u8,
        )
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(background) = config.get("window", "background") {
            self.background = parse_rgb(&background)
                .ok_or_else(|| format!("Invalid background color: {}", background))?;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.assets_root = PathBuf::from(root);
        }

        // [time] section
        if let Some(scale) = config.getfloat("time", "scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        info!(
            "Loaded config: {}x{} window, background=#{:06x}, fps={}, time_scale={}, assets={:?}",
            self.window_width,
            self.window_height,
            self.background,
            self.target_fps,
            self.time_scale,
            self.assets_root
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "background", Some(format!("{:06x}", self.background)));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [assets] section
        config.set(
            "assets",
            "root",
            Some(self.assets_root.to_string_lossy().into_owned()),
        );

        // [time] section
        config.set("time", "scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Parse `RRGGBB`, `#RRGGBB` or `0xRRGGBB`.
fn parse_rgb(text: &str) -> Option<u32> {
    let hex = text
        .trim()
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.background, 0x1099bb);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::new()
            .with_size(600, 337)
            .with_background(0x008888)
            .with_title("Sample");
        assert_eq!(config.window_size(), (600, 337));
        assert_eq!(config.background_rgb(), (0x00, 0x88, 0x88));
        assert_eq!(config.title, "Sample");
    }

    #[test]
    fn test_parse_rgb_forms() {
        assert_eq!(parse_rgb("008888"), Some(0x008888));
        assert_eq!(parse_rgb("#1099bb"), Some(0x1099bb));
        assert_eq!(parse_rgb("0xFFFFFF"), Some(0xffffff));
        assert_eq!(parse_rgb("fff"), None);
        assert_eq!(parse_rgb("zzzzzz"), None);
    }

    #[test]
    fn test_load_from_file_overrides_present_values_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[window]\nwidth = 1024\nbackground = #112233\n\n[time]\nscale = 0.5\n"
        )
        .unwrap();

        let mut config = GameConfig::new()
            .with_size(600, 337)
            .with_path(file.path());
        config.load_from_file().unwrap();

        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 337);
        assert_eq!(config.background, 0x112233);
        assert_eq!(config.time_scale, 0.5);
        assert_eq!(config.title, "Catnip");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::new().with_path(dir.path().join("missing.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig::new().with_path(dir.path().join("missing.ini")));
    }

    #[test]
    fn test_load_rejects_bad_background() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[window]\nbackground = teal\n").unwrap();
        let mut config = GameConfig::new().with_path(file.path());
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let saved = GameConfig::new()
            .with_size(640, 360)
            .with_background(0x008888)
            .with_title("Saved")
            .with_assets_root("data")
            .with_path(&path);
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::new().with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, saved);
    }
}
