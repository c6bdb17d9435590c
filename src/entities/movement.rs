//! Single-step movement
//!
//! An object moves only onto tiles that are not blocked. Bumping into a wall
//! leaves it where it was and is not an error.

use super::Object;
use super::components::Position;
use crate::world::Board;

/// Cardinal step directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Unit `(dx, dy)`; y grows downward
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    #[cfg(test)]
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

/// Outcome of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// False when the target tile was blocked
    pub moved: bool,
    /// Where the object stands afterwards
    pub position: Position,
}

/// Step `object` by `(dx, dy)` unless the target tile is blocked.
///
/// Deltas are not checked; callers submit unit cardinal steps. Targets off the
/// board count as blocked.
pub fn try_move(board: &Board, object: &mut Object, dx: i32, dy: i32) -> MoveResult {
    let target = object.pos.offset(dx, dy);

    if board.is_blocked(target.x, target.y) {
        return MoveResult {
            moved: false,
            position: object.pos,
        };
    }

    object.pos = target;
    MoveResult {
        moved: true,
        position: target,
    }
}
