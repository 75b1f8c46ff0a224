//! In-process store for tests and `SCOREBOOK_STORE=memory`.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use super::{GameStore, StoreKind, StoredGame};
use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError};

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: DashMap<String, StoredGame>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn stale(expected: i32, actual: i32) -> DomainError {
    DomainError::conflict(
        ConflictKind::OptimisticLock,
        format!(
            "Game was modified concurrently (expected version {expected}, actual version {actual}). Please refresh and retry."
        ),
    )
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create_game(&self, state: &GameState) -> Result<StoredGame, DomainError> {
        match self.games.entry(state.game_id.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::DuplicateGameId,
                "Game id already exists",
            )),
            Entry::Vacant(slot) => {
                let stored = StoredGame {
                    state: state.clone(),
                    version: 1,
                };
                slot.insert(stored.clone());
                debug!(game_id = %state.game_id, "game created in memory store");
                Ok(stored)
            }
        }
    }

    async fn get_game(&self, id: &str) -> Result<StoredGame, DomainError> {
        self.games
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DomainError::game_not_found(id))
    }

    async fn update_game(
        &self,
        id: &str,
        state: &GameState,
        expected_version: i32,
    ) -> Result<StoredGame, DomainError> {
        // The shard write lock is held for the whole compare-and-set.
        let mut entry = self
            .games
            .get_mut(id)
            .ok_or_else(|| DomainError::game_not_found(id))?;
        if entry.version != expected_version {
            return Err(stale(expected_version, entry.version));
        }
        entry.state = state.clone();
        entry.version += 1;
        Ok(entry.value().clone())
    }

    async fn delete_game(
        &self,
        id: &str,
        expected_version: Option<i32>,
    ) -> Result<(), DomainError> {
        let Some(expected) = expected_version else {
            self.games.remove(id);
            return Ok(());
        };
        if self
            .games
            .remove_if(id, |_, game| game.version == expected)
            .is_some()
        {
            return Ok(());
        }
        match self.games.get(id) {
            Some(game) => Err(stale(expected, game.version)),
            None => Ok(()),
        }
    }

    async fn close(&self) -> Result<(), DomainError> {
        self.games.clear();
        Ok(())
    }

    fn kind(&self) -> StoreKind {
        StoreKind::Memory
    }
}
