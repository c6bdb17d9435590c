//! Procedural level generation
//!
//! Validates the generation parameters up front, then hands a seeded RNG to
//! the room and corridor carver.

pub mod rooms;

pub use rooms::{carve_h_tunnel, carve_room, carve_v_tunnel, connect_rooms, Elbow};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::{Board, Rect};
use crate::entities::Position;

/// Largest board `generate_level` will allocate
pub const MAX_BOARD_CELLS: i32 = 1 << 24;

/// Parameters for a single level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub width: i32,
    pub height: i32,
    /// Smallest room side, inclusive
    pub room_min_size: i32,
    /// Largest room side, exclusive
    pub room_max_size: i32,
    /// Placement attempts, not a room count. Zero yields a level with no
    /// rooms and no spawn point.
    pub max_room_attempts: u32,
    pub seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 45,
            room_min_size: 6,
            room_max_size: 10,
            max_room_attempts: 30,
            seed: 0,
        }
    }
}

/// Generation parameters that can never produce a valid level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum room size {min} leaves no interior; it must be at least 2")]
    RoomTooSmall { min: i32 },

    #[error("room size range {min}..{max} is empty")]
    EmptyRoomSizeRange { min: i32, max: i32 },

    #[error("map {axis} of {size} cannot fit rooms up to size {room_max_size}")]
    MapTooSmall {
        axis: &'static str,
        size: i32,
        room_max_size: i32,
    },

    #[error("room sizes {min}..{max} can put a room's center outside its own interior")]
    LopsidedRooms { min: i32, max: i32 },

    #[error("map of {width}x{height} exceeds the {max_cells} tile limit")]
    MapTooLarge {
        width: i32,
        height: i32,
        max_cells: i32,
    },
}

impl LevelConfig {
    /// Reject parameters that would make room sampling or carving invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.room_min_size, self.room_max_size);

        if min < 2 {
            return Err(ConfigError::RoomTooSmall { min });
        }
        if min >= max {
            return Err(ConfigError::EmptyRoomSizeRange { min, max });
        }

        // Widest room is max - 1; its x range [0, width - w - 1) is empty
        // once width <= max
        for (axis, size) in [("width", self.width), ("height", self.height)] {
            if size <= max {
                return Err(ConfigError::MapTooSmall {
                    axis,
                    size,
                    room_max_size: max,
                });
            }
        }

        // Center offset along one axis is half the *other* side
        if (max - 1) / 2 > min - 1 {
            return Err(ConfigError::LopsidedRooms { min, max });
        }

        let too_large = ConfigError::MapTooLarge {
            width: self.width,
            height: self.height,
            max_cells: MAX_BOARD_CELLS,
        };
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_BOARD_CELLS => Ok(()),
            _ => Err(too_large),
        }
    }
}

/// A fully carved level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub board: Board,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Rect>,
    /// Center of the first accepted room
    pub spawn: Option<Position>,
    /// Placement attempts spent
    pub attempts: u32,
    pub seed: u64,
}

/// Generate a level from a validated config.
///
/// The same config (seed included) always yields the same level.
pub fn generate_level(config: &LevelConfig) -> Result<Level, ConfigError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let level = rooms::generate_dungeon(&mut rng, config);

    log::info!(
        "Generated {}x{} level: {} rooms from {} attempts, {} open tiles (seed {})",
        config.width,
        config.height,
        level.rooms.len(),
        level.attempts,
        level.board.passable_count(),
        config.seed
    );

    Ok(level)
}
