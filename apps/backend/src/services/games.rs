//! Game lifecycle services: create, read, replace, record plays, delete.
//!
//! Each mutation is read-validate-write against the store, guarded by the
//! stored version. Nothing is retried here; a stale version is surfaced to
//! the caller as a conflict.

use tracing::{debug, info};
use ulid::Ulid;

use crate::domain::engine::apply_play;
use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::outcome::PlayOutcome;
use crate::domain::rules::GameRules;
use crate::domain::state::{GameState, NewGame};
use crate::domain::validation::{validate_game_id, validate_new_game, validate_state};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::store::{GameStore, StoredGame};

/// Game domain service.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameService;

/// `game-` followed by a lowercase ULID.
pub fn generate_game_id() -> String {
    format!("game-{}", Ulid::new().to_string().to_lowercase())
}

fn log_transitions(game_id: &str, transitions: &[GameTransition]) {
    for transition in transitions {
        match transition {
            GameTransition::RunsScored { team, runs } => {
                info!(game_id, team = team.as_str(), runs, "runs scored");
            }
            GameTransition::HalfInningEnded { inning, top } => {
                let half = if *top { "top" } else { "bottom" };
                info!(game_id, inning, half, "half inning ended");
            }
            GameTransition::BatterChanged { team, index } => {
                debug!(game_id, team = team.as_str(), index, "batter changed");
            }
            GameTransition::GameCompleted { home, away } => {
                info!(game_id, home, away, "game completed");
            }
        }
    }
}

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the setup form and persist a fresh game at version 1.
    pub async fn create_game(
        &self,
        store: &dyn GameStore,
        new_game: NewGame,
        default_rules: GameRules,
    ) -> Result<StoredGame, DomainError> {
        validate_new_game(&new_game)?;

        let NewGame {
            game_id,
            home_team,
            away_team,
            innings,
            rules,
        } = new_game;
        let game_id = game_id.unwrap_or_else(generate_game_id);
        let state = GameState::new(
            game_id,
            home_team,
            away_team,
            innings,
            rules.unwrap_or(default_rules),
        );

        let stored = store.create_game(&state).await?;
        info!(
            game_id = %stored.state.game_id,
            innings = stored.state.innings,
            early_finish = stored.state.rules.early_finish,
            extra_innings = stored.state.rules.extra_innings,
            "game created"
        );
        Ok(stored)
    }

    pub async fn get_game(&self, store: &dyn GameStore, id: &str) -> Result<StoredGame, DomainError> {
        validate_game_id(id)?;
        store.get_game(id).await
    }

    /// Replace the whole state, e.g. after a manual correction by the scorer.
    pub async fn replace_game(
        &self,
        store: &dyn GameStore,
        id: &str,
        state: GameState,
        expected_version: Option<i32>,
    ) -> Result<StoredGame, DomainError> {
        validate_game_id(id)?;
        if state.game_id != id {
            return Err(DomainError::validation(
                ValidationKind::GameIdMismatch,
                format!(
                    "gameId: body id '{}' does not match path id '{id}'",
                    state.game_id
                ),
            ));
        }
        validate_state(&state)?;

        let version = match expected_version {
            Some(v) => v,
            None => store.get_game(id).await?.version,
        };
        let stored = store.update_game(id, &state, version).await?;
        info!(game_id = id, version = stored.version, "game replaced");
        Ok(stored)
    }

    /// Apply one plate-appearance outcome and persist the result.
    pub async fn record_play(
        &self,
        store: &dyn GameStore,
        id: &str,
        outcome: PlayOutcome,
        expected_version: Option<i32>,
    ) -> Result<StoredGame, DomainError> {
        validate_game_id(id)?;
        let current = store.get_game(id).await?;
        let version = expected_version.unwrap_or(current.version);

        let next = apply_play(&current.state, outcome)?;
        let stored = store.update_game(id, &next, version).await?;

        debug!(
            game_id = id,
            outcome = outcome.as_str(),
            version = stored.version,
            "play recorded"
        );
        log_transitions(id, &derive_game_transitions(&current.state, &stored.state));
        Ok(stored)
    }

    pub async fn delete_game(
        &self,
        store: &dyn GameStore,
        id: &str,
        expected_version: Option<i32>,
    ) -> Result<(), DomainError> {
        validate_game_id(id)?;
        store.delete_game(id, expected_version).await?;
        info!(game_id = id, "game deleted");
        Ok(())
    }
}
