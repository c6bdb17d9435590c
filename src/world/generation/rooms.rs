//! Room and corridor dungeon generator
//!
//! Classic roguelike dungeon: rectangular rooms placed by rejection sampling,
//! each one linked to the previously accepted room by an L-shaped corridor.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Level, LevelConfig};
use crate::entities::Position;
use crate::world::{Board, Rect};

/// Which leg of an L-shaped corridor gets carved first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elbow {
    /// Along the previous room's row, then down the new room's column
    HorizontalFirst,
    /// Along the previous room's column, then across the new room's row
    VerticalFirst,
}

impl Elbow {
    /// Fair coin between the two shapes
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Elbow::HorizontalFirst
        } else {
            Elbow::VerticalFirst
        }
    }
}

/// Generate rooms and corridors into a fresh board.
///
/// The config must already be validated; sampling ranges are assumed positive.
pub(crate) fn generate_dungeon(rng: &mut StdRng, config: &LevelConfig) -> Level {
    let mut board = Board::new(config.width, config.height);
    let mut rooms: Vec<Rect> = Vec::new();

    for attempt in 0..config.max_room_attempts {
        let w = rng.gen_range(config.room_min_size..config.room_max_size);
        let h = rng.gen_range(config.room_min_size..config.room_max_size);
        let x = rng.gen_range(0..config.width - w - 1);
        let y = rng.gen_range(0..config.height - h - 1);

        let new_room = Rect::new(x, y, w, h);

        if let Some(other) = rooms.iter().find(|r| new_room.intersects(r)) {
            log::trace!("Attempt {}: {:?} overlaps {:?}", attempt, new_room, other);
            continue;
        }

        carve_room(&mut board, &new_room);

        match rooms.last() {
            Some(prev) => {
                let elbow = Elbow::random(rng);
                connect_rooms(&mut board, prev.center(), new_room.center(), elbow);
                log::debug!(
                    "Attempt {}: room {} {:?} joined to room {} ({:?})",
                    attempt,
                    rooms.len(),
                    new_room,
                    rooms.len() - 1,
                    elbow
                );
            }
            None => {
                log::debug!(
                    "Attempt {}: first room {:?}, spawn at {:?}",
                    attempt,
                    new_room,
                    new_room.center()
                );
            }
        }

        rooms.push(new_room);
    }

    let spawn = rooms.first().map(Rect::center);

    Level {
        board,
        rooms,
        spawn,
        attempts: config.max_room_attempts,
        seed: config.seed,
    }
}

/// Carve out a room's interior
pub fn carve_room(board: &mut Board, room: &Rect) {
    for pos in room.interior() {
        board.set_passable(pos.x, pos.y);
    }
}

/// Carve `x1..=x2` along row `y`, in either order
pub fn carve_h_tunnel(board: &mut Board, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        board.set_passable(x, y);
    }
}

/// Carve `y1..=y2` along column `x`, in either order
pub fn carve_v_tunnel(board: &mut Board, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        board.set_passable(x, y);
    }
}

/// Link two room centers with an L-shaped corridor
pub fn connect_rooms(board: &mut Board, prev: Position, new: Position, elbow: Elbow) {
    match elbow {
        Elbow::HorizontalFirst => {
            carve_h_tunnel(board, prev.x, new.x, prev.y);
            carve_v_tunnel(board, prev.y, new.y, new.x);
        }
        Elbow::VerticalFirst => {
            carve_v_tunnel(board, prev.y, new.y, prev.x);
            carve_h_tunnel(board, prev.x, new.x, new.y);
        }
    }
}
