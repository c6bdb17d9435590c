//! World module
//!
//! Contains the board, tiles, room geometry and procedural generation.

pub mod map;
pub mod tile;
pub mod rect;
pub mod generation;

pub use map::Board;
pub use tile::Tile;
pub use rect::Rect;
pub use generation::{generate_level, ConfigError, Level, LevelConfig};
