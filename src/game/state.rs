//! Level state
//!
//! Owns everything a running level needs: the carved board, the rooms it was
//! built from and the entities standing on it.

use thiserror::Error;

use crate::entities::{spawn_npc, spawn_player, try_move, Direction, MoveResult, Object, Position};
use crate::world::{generate_level, Board, ConfigError, Level, LevelConfig, Rect};

/// Why a level could not be set up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("invalid level configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no room was accepted, so there is no spawn point")]
    NoSpawnPoint,
}

/// A generated level with its entities.
///
/// Only constructible from a finished level, so every move sees the final
/// board.
#[derive(Debug, Clone)]
pub struct LevelState {
    board: Board,
    rooms: Vec<Rect>,
    spawn: Position,
    seed: u64,
    /// Ordered entity sequence; the player is one of them
    objects: Vec<Object>,
    player: usize,
}

impl LevelState {
    /// Generate a level and place the player and an NPC on it
    pub fn new(config: &LevelConfig) -> Result<Self, LevelError> {
        let level = generate_level(config)?;
        Self::from_level(level)
    }

    /// Place entities on an already generated level
    pub fn from_level(level: Level) -> Result<Self, LevelError> {
        let Level {
            board,
            rooms,
            spawn,
            seed,
            ..
        } = level;
        let spawn = spawn.ok_or(LevelError::NoSpawnPoint)?;

        let player = spawn_player(spawn);
        let npc = spawn_npc(&board);
        log::info!(
            "Player placed at ({}, {}), {} at ({}, {})",
            player.pos.x,
            player.pos.y,
            npc.name,
            npc.pos.x,
            npc.pos.y
        );

        Ok(Self {
            board,
            rooms,
            spawn,
            seed,
            objects: vec![player, npc],
            player: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    pub fn spawn(&self) -> Position {
        self.spawn
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn player(&self) -> &Object {
        &self.objects[self.player]
    }

    pub fn player_position(&self) -> Position {
        self.player().pos
    }

    /// Objects sorted for drawing, lowest layer first
    pub fn objects_by_layer(&self) -> Vec<&Object> {
        let mut sorted: Vec<&Object> = self.objects.iter().collect();
        sorted.sort_by_key(|o| o.layer);
        sorted
    }

    /// Step the player one tile
    pub fn move_player(&mut self, dir: Direction) -> MoveResult {
        let (dx, dy) = dir.delta();
        let result = try_move(&self.board, &mut self.objects[self.player], dx, dy);
        if !result.moved {
            log::trace!("Player bumped at {:?} heading {:?}", result.position, dir);
        }
        result
    }

    /// Step any object by a raw delta, `None` for an unknown index
    pub fn move_object(&mut self, index: usize, dx: i32, dy: i32) -> Option<MoveResult> {
        let object = self.objects.get_mut(index)?;
        Some(try_move(&self.board, object, dx, dy))
    }
}
