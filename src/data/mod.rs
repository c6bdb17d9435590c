//! External configuration
//!
//! Settings come from a RON file so levels can be tuned without rebuilding.

pub mod config;

pub use config::{export_default_config, ConfigLoadError, DungeonConfig, GameConfig, Palette, WindowConfig};
