//! Structural checks applied to game payloads before they reach the engine or the store.

use std::collections::HashSet;

use lazy_regex::regex_is_match;
use thiserror::Error;

use crate::domain::rules::{MAX_INNINGS, MAX_SCORE, OUTS_PER_HALF_INNING};
use crate::domain::state::{GameState, GameStatus, NewGame, Team, TeamSide};

pub const MAX_GAME_ID_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_game_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.len() > MAX_GAME_ID_LEN {
        return Err(ValidationError::new(
            "gameId",
            format!("must be 1..={MAX_GAME_ID_LEN} characters"),
        ));
    }
    if !regex_is_match!(r"^[A-Za-z0-9_-]+$", id) {
        return Err(ValidationError::new(
            "gameId",
            "may only contain letters, digits, '-' and '_'",
        ));
    }
    Ok(())
}

fn validate_innings(innings: u32) -> Result<(), ValidationError> {
    if innings == 0 || innings > MAX_INNINGS {
        return Err(ValidationError::new(
            "innings",
            format!("must be between 1 and {MAX_INNINGS}"),
        ));
    }
    Ok(())
}

fn validate_team(team: &Team, side: TeamSide) -> Result<(), ValidationError> {
    let prefix = match side {
        TeamSide::Home => "homeTeam",
        TeamSide::Away => "awayTeam",
    };
    if team.name.trim().is_empty() {
        return Err(ValidationError::new(
            format!("{prefix}.name"),
            "must not be empty",
        ));
    }
    if team.lineup.is_empty() {
        return Err(ValidationError::new(
            format!("{prefix}.lineup"),
            "must contain at least one player",
        ));
    }

    let mut seen = HashSet::with_capacity(team.lineup.len());
    for (i, player) in team.lineup.iter().enumerate() {
        if player.id.trim().is_empty() {
            return Err(ValidationError::new(
                format!("{prefix}.lineup[{i}].id"),
                "must not be empty",
            ));
        }
        if player.name.trim().is_empty() {
            return Err(ValidationError::new(
                format!("{prefix}.lineup[{i}].name"),
                "must not be empty",
            ));
        }
        if !seen.insert(player.id.as_str()) {
            return Err(ValidationError::new(
                format!("{prefix}.lineup[{i}].id"),
                format!("duplicate player id '{}'", player.id),
            ));
        }
    }
    Ok(())
}

/// Validate the setup form before a game is created.
pub fn validate_new_game(new_game: &NewGame) -> Result<(), ValidationError> {
    if let Some(id) = &new_game.game_id {
        validate_game_id(id)?;
    }
    validate_team(&new_game.home_team, TeamSide::Home)?;
    validate_team(&new_game.away_team, TeamSide::Away)?;
    validate_innings(new_game.innings)
}

/// Validate a complete game state, e.g. one replacing the stored game wholesale.
pub fn validate_state(state: &GameState) -> Result<(), ValidationError> {
    validate_game_id(&state.game_id)?;
    validate_team(&state.home_team, TeamSide::Home)?;
    validate_team(&state.away_team, TeamSide::Away)?;
    validate_innings(state.innings)?;

    if state.current_inning == 0 {
        return Err(ValidationError::new("currentInning", "must be at least 1"));
    }
    if state.outs >= OUTS_PER_HALF_INNING {
        return Err(ValidationError::new(
            "outs",
            format!("must be below {OUTS_PER_HALF_INNING}"),
        ));
    }
    for side in [TeamSide::Home, TeamSide::Away] {
        if state.score.for_side(side) > MAX_SCORE {
            return Err(ValidationError::new(
                format!("score.{}", side.as_str()),
                format!("must not exceed {MAX_SCORE}"),
            ));
        }
    }
    if state.status == GameStatus::InProgress
        && state.current_inning > state.innings
        && !state.rules.extra_innings
    {
        return Err(ValidationError::new(
            "currentInning",
            format!(
                "inning {} is past the scheduled {} and extra innings are disabled",
                state.current_inning, state.innings
            ),
        ));
    }

    for side in [TeamSide::Home, TeamSide::Away] {
        let index = state.current_batter_index.for_side(side);
        let len = state.team(side).lineup.len();
        if index >= len {
            return Err(ValidationError::new(
                format!("currentBatterIndex.{}", side.as_str()),
                format!("index {index} is outside a lineup of {len}"),
            ));
        }
    }
    Ok(())
}
