//! Game module
//!
//! Level-wide state shared between generation, movement and the front-end.

pub mod state;

pub use state::{LevelError, LevelState};
