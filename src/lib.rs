//! Burrow - a minimal roguelike dungeon generator
//!
//! Carves rooms and corridors into a tile board, drops a player and an NPC
//! onto it, and walks them around one tile at a time.

pub mod world;
pub mod entities;
pub mod game;
pub mod data;
pub mod ui;

// Re-export commonly used types
pub use game::{LevelError, LevelState};
pub use entities::{Direction, MoveResult, Object, Position};
pub use world::{generate_level, Board, Level, LevelConfig, Rect, Tile};
