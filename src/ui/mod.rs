//! User interface module
//!
//! Terminal rendering and input handling. The level itself never depends on
//! anything in here.

pub mod app;

pub use app::{direction_for_key, App};
