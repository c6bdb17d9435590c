//! Entity components
//!
//! Plain data shared by the board, the generator and the entities.

// ============================================================================
// Position
// ============================================================================

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position displaced by `(dx, dy)`
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Visual representation of an entity.
///
/// Only the presentation layer reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    /// Character to display
    pub glyph: char,
    /// Foreground color (RGB)
    pub fg: (u8, u8, u8),
}

impl Renderable {
    pub fn new(glyph: char, fg: (u8, u8, u8)) -> Self {
        Self { glyph, fg }
    }
}
