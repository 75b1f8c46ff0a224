//! Game persistence behind a single async trait.
//!
//! Every stored game carries a `version` that starts at 1 and increments on
//! each successful write. Updates are compare-and-set on that version.

use std::fmt;

use async_trait::async_trait;

use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

pub mod db_errors;
pub mod memory;
pub mod sea;

pub use memory::MemoryGameStore;
pub use sea::SeaGameStore;

/// A game as persisted, with its optimistic-concurrency version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGame {
    pub state: GameState,
    pub version: i32,
}

/// Which backend a store runs on; reported by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Sqlite,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Sqlite => "sqlite",
            StoreKind::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a new game at version 1. Conflict(DuplicateGameId) if the id exists.
    async fn create_game(&self, state: &GameState) -> Result<StoredGame, DomainError>;

    /// NotFound(Game) when missing.
    async fn get_game(&self, id: &str) -> Result<StoredGame, DomainError>;

    /// Replace the game if its stored version equals `expected_version`.
    ///
    /// NotFound(Game) when missing, Conflict(OptimisticLock) on a stale version.
    async fn update_game(
        &self,
        id: &str,
        state: &GameState,
        expected_version: i32,
    ) -> Result<StoredGame, DomainError>;

    /// Idempotent: deleting a missing game succeeds.
    ///
    /// With `expected_version`, the version check and the removal are one
    /// atomic step; a present game at another version is Conflict(OptimisticLock).
    async fn delete_game(
        &self,
        id: &str,
        expected_version: Option<i32>,
    ) -> Result<(), DomainError>;

    /// Release underlying resources. Further calls may fail.
    async fn close(&self) -> Result<(), DomainError>;

    fn kind(&self) -> StoreKind;
}
