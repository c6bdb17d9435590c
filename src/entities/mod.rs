//! Entities
//!
//! Things that stand on the board: the player and everything else.

pub mod components;
pub mod movement;
pub mod player;
pub mod npcs;

pub use components::{Position, Renderable};
pub use movement::{try_move, Direction, MoveResult};
pub use player::spawn_player;
pub use npcs::spawn_npc;

/// A board entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub name: String,
    /// Draw order, higher is drawn on top
    pub layer: i32,
    pub pos: Position,
    pub renderable: Renderable,
}

impl Object {
    pub fn new(name: impl Into<String>, layer: i32, pos: Position, renderable: Renderable) -> Self {
        Self {
            name: name.into(),
            layer,
            pos,
            renderable,
        }
    }
}
