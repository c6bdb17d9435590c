//! Board data structure
//!
//! The 2D grid of tiles a level is carved into.

use super::tile::Tile;

/// A dungeon level's tile grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a new board filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            tiles: vec![Tile::wall(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Tile at a position the caller knows to be on the board.
    ///
    /// Panics when `(x, y)` is outside the board.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.assert_in_bounds(x, y);
        self.tiles[self.xy_to_idx(x, y)]
    }

    /// Get tile at position, `None` off the board
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Carve a single cell open.
    ///
    /// Panics when `(x, y)` is outside the board.
    pub fn set_passable(&mut self, x: i32, y: i32) {
        self.assert_in_bounds(x, y);
        let idx = self.xy_to_idx(x, y);
        self.tiles[idx] = Tile::floor();
    }

    /// Off-board positions count as blocked
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| t.blocked)
    }

    /// Check if a position blocks line of sight
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| !t.is_transparent())
    }

    /// Get all walkable positions
    #[cfg(test)]
    pub fn walkable_positions(&self) -> Vec<crate::entities::Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                crate::entities::Position::new(x, y)
            })
            .collect()
    }

    /// Number of carved cells
    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    fn assert_in_bounds(&self, x: i32, y: i32) {
        assert!(
            self.in_bounds(x, y),
            "tile ({}, {}) is outside the {}x{} board",
            x,
            y,
            self.width,
            self.height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Position;

    #[test]
    fn test_new_board_is_solid() {
        let board = Board::new(10, 8);
        assert_eq!(board.passable_count(), 0);
        for y in 0..8 {
            for x in 0..10 {
                let tile = board.get(x, y);
                assert!(tile.blocked && tile.blocks_sight);
            }
        }
    }

    #[test]
    fn test_set_passable_only_touches_one_cell() {
        let mut board = Board::new(10, 8);
        board.set_passable(3, 4);

        assert!(!board.is_blocked(3, 4));
        assert!(!board.is_opaque(3, 4));
        assert!(board.is_blocked(2, 4));
        assert!(board.is_blocked(3, 5));
        assert_eq!(board.walkable_positions(), vec![Position::new(3, 4)]);
    }

    #[test]
    fn test_index_round_trip() {
        let board = Board::new(7, 5);
        let idx = board.xy_to_idx(6, 3);
        assert_eq!(board.idx_to_xy(idx), (6, 3));
    }

    #[test]
    fn test_off_board_is_blocked() {
        let board = Board::new(4, 4);
        assert!(board.get_tile(-1, 0).is_none());
        assert!(board.get_tile(4, 0).is_none());
        assert!(board.is_blocked(0, -1));
        assert!(board.is_blocked(0, 4));
        assert!(board.is_opaque(9, 9));
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 board")]
    fn test_get_out_of_bounds_panics() {
        let board = Board::new(4, 4);
        board.get(4, 1);
    }

    #[test]
    #[should_panic(expected = "outside the 4x4 board")]
    fn test_set_passable_out_of_bounds_panics() {
        let mut board = Board::new(4, 4);
        board.set_passable(0, -1);
    }
}
