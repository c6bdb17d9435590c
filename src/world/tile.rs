//! Tile definitions
//!
//! A tile only tracks whether it can be entered and whether it blocks sight.

/// A single cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Cannot be entered
    pub blocked: bool,
    /// Opaque to line of sight
    pub blocks_sight: bool,
}

impl Tile {
    /// Solid rock. Every cell starts out like this.
    pub const fn wall() -> Self {
        Self {
            blocked: true,
            blocks_sight: true,
        }
    }

    /// Carved, open ground
    pub const fn floor() -> Self {
        Self {
            blocked: false,
            blocks_sight: false,
        }
    }

    pub fn is_walkable(&self) -> bool {
        !self.blocked
    }

    pub fn is_transparent(&self) -> bool {
        !self.blocks_sight
    }

    pub fn glyph(&self) -> char {
        if self.blocked {
            '#'
        } else {
            '.'
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
