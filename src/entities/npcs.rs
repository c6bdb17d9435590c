//! Non-player entities
//!
//! Placement is fixed relative to the board's middle and does not look at
//! tiles, so an NPC may well end up embedded in rock.

use super::{Object, Position, Renderable};
use crate::world::Board;

pub const NPC_LAYER: i32 = 0;
pub const NPC_COLOR: (u8, u8, u8) = (255, 255, 0);
/// Columns left of the board's horizontal midpoint
pub const NPC_OFFSET: i32 = 5;

/// Create the NPC just left of the board's middle
pub fn spawn_npc(board: &Board) -> Object {
    let x = (board.width() / 2 - NPC_OFFSET).clamp(0, board.width() - 1);
    let y = board.height() / 2;
    Object::new("npc", NPC_LAYER, Position::new(x, y), Renderable::new('@', NPC_COLOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npc_left_of_middle() {
        let board = Board::new(80, 45);
        let npc = spawn_npc(&board);
        assert_eq!(npc.pos, Position::new(35, 22));
        assert_eq!(npc.layer, NPC_LAYER);
    }

    #[test]
    fn test_npc_stays_on_narrow_board() {
        let board = Board::new(6, 4);
        let npc = spawn_npc(&board);
        assert_eq!(npc.pos, Position::new(0, 2));
        assert!(board.in_bounds(npc.pos.x, npc.pos.y));
    }
}
