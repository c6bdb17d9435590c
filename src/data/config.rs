//! RON game configuration
//!
//! Loads window, dungeon and palette settings from an external RON file, with
//! fallback to built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::LevelConfig;

/// File name looked up in the working directory and the config directory
pub const CONFIG_FILE: &str = "burrow.ron";

/// Failure to read, parse or write a config file
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub dungeon: DungeonConfig,
    pub palette: Palette,
}

/// Terminal window layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    /// Rows kept below the map for the status line
    pub reserved_rows: i32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 50,
            reserved_rows: 5,
            title: "r/roguelikedev".to_string(),
        }
    }
}

/// Room placement parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub room_min_size: i32,
    pub room_max_size: i32,
    /// Placement attempts per level
    pub max_rooms: u32,
    /// Fixed seed; a fresh one is drawn per run when absent
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            room_min_size: 6,
            room_max_size: 10,
            max_rooms: 30,
            seed: None,
        }
    }
}

/// Tile colors (RGB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub dark_wall: (u8, u8, u8),
    pub dark_ground: (u8, u8, u8),
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark_wall: (0, 0, 100),
            dark_ground: (50, 50, 150),
        }
    }
}

impl GameConfig {
    /// Load the first config file found, or defaults.
    ///
    /// A file that exists but fails to load is skipped with a warning.
    pub fn load() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Config loaded from {:?}", path);
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {:?}: {}", path, e),
            }
        }

        log::info!("No config file found, using defaults");
        Self::default()
    }

    /// Working directory first, then the platform config directory
    pub fn search_paths() -> Vec<PathBuf> {
        use directories::ProjectDirs;

        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(proj_dirs) = ProjectDirs::from("com", "burrow", "Burrow") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE));
        }
        paths
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn from_ron_str(content: &str) -> Result<Self, ConfigLoadError> {
        Ok(ron::from_str(content)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigLoadError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    pub fn map_width(&self) -> i32 {
        self.window.width
    }

    /// Window height minus the reserved status rows
    pub fn map_height(&self) -> i32 {
        self.window.height - self.window.reserved_rows
    }

    /// Generation parameters for one level
    pub fn level_config(&self, seed: u64) -> LevelConfig {
        LevelConfig {
            width: self.map_width(),
            height: self.map_height(),
            room_min_size: self.dungeon.room_min_size,
            room_max_size: self.dungeon.room_max_size,
            max_room_attempts: self.dungeon.max_rooms,
            seed,
        }
    }
}

/// Write the default configuration as pretty RON for easy editing
pub fn export_default_config(path: &Path) -> Result<(), ConfigLoadError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ConfigLoadError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let content = GameConfig::default().to_ron_string()?;
    fs::write(path, content).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Default config written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_config() {
        let config = GameConfig::default();
        let level = config.level_config(9);

        assert_eq!(
            level,
            LevelConfig {
                width: 80,
                height: 45,
                room_min_size: 6,
                room_max_size: 10,
                max_room_attempts: 30,
                seed: 9,
            }
        );
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = GameConfig::from_ron_str(
            "(dungeon: (max_rooms: 12, seed: Some(42)), window: (title: \"test\"))",
        )
        .unwrap();

        assert_eq!(config.dungeon.max_rooms, 12);
        assert_eq!(config.dungeon.seed, Some(42));
        assert_eq!(config.dungeon.room_min_size, 6);
        assert_eq!(config.window.title, "test");
        assert_eq!(config.window.width, 80);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let result = GameConfig::from_ron_str("(dungeon: (max_rooms: \"lots\"))");
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::from_file(Path::new("definitely/not/here/burrow.ron"));
        assert!(matches!(result, Err(ConfigLoadError::Io { .. })));
    }

    #[test]
    fn test_export_default_config() {
        let dir = std::env::temp_dir().join(format!("burrow-config-{}", std::process::id()));
        let path = dir.join(CONFIG_FILE);

        let result = export_default_config(&path);
        assert!(result.is_ok(), "Failed to export default config: {:?}", result.err());
        assert!(path.exists(), "{:?} not created", path);

        let loaded = GameConfig::from_file(&path).unwrap();
        assert_eq!(loaded, GameConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_short_window_fails_validation() {
        let mut config = GameConfig::default();
        config.window.height = 8;
        assert!(config.level_config(0).validate().is_err());
    }
}
