//! Player entity

use super::{Object, Position, Renderable};

/// The player draws above everything else
pub const PLAYER_LAYER: i32 = 1;
pub const PLAYER_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Create the player at the level's spawn point
pub fn spawn_player(spawn: Position) -> Object {
    Object::new("player", PLAYER_LAYER, spawn, Renderable::new('@', PLAYER_COLOR))
}
