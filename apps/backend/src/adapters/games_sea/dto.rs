//! DTOs for games_sea adapter, plus the row <-> `GameState` mapping.

use sea_orm::DbErr;

use crate::domain::rules::GameRules;
use crate::domain::state::{BaseState, BatterIndex, GameState, GameStatus, Score, Team};
use crate::entities::games;

/// Flat column values for one game, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_lineup: String,
    pub away_lineup: String,
    pub innings: i32,
    pub status: games::GameStatus,
    pub current_inning: i32,
    pub is_top_inning: bool,
    pub home_score: i32,
    pub away_score: i32,
    pub outs: i16,
    pub on_first: bool,
    pub on_second: bool,
    pub on_third: bool,
    pub home_batter_index: i32,
    pub away_batter_index: i32,
    pub early_finish: bool,
    pub extra_innings: bool,
}

/// DTO for inserting a new game at version 1.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: String,
    pub row: GameRow,
}

/// DTO for a full-row update guarded by `expected_version`.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: String,
    pub row: GameRow,
    pub expected_version: i32,
}

impl GameCreate {
    pub fn from_state(state: &GameState) -> Result<Self, DbErr> {
        Ok(Self {
            id: state.game_id.clone(),
            row: GameRow::from_state(state)?,
        })
    }
}

impl GameUpdate {
    pub fn from_state(id: &str, state: &GameState, expected_version: i32) -> Result<Self, DbErr> {
        Ok(Self {
            id: id.to_string(),
            row: GameRow::from_state(state)?,
            expected_version,
        })
    }
}

fn out_of_range(field: &str) -> DbErr {
    DbErr::Custom(format!("VALUE_OUT_OF_RANGE:{field}"))
}

fn corrupt(id: &str, what: impl std::fmt::Display) -> DbErr {
    DbErr::Custom(format!("DATA_CORRUPTION:game {id}: {what}"))
}

fn to_i32<T: TryInto<i32>>(field: &str, value: T) -> Result<i32, DbErr> {
    value.try_into().map_err(|_| out_of_range(field))
}

fn from_i32<T: TryFrom<i32>>(id: &str, field: &str, value: i32) -> Result<T, DbErr> {
    T::try_from(value).map_err(|_| corrupt(id, format_args!("{field} = {value}")))
}

impl GameRow {
    pub fn from_state(state: &GameState) -> Result<Self, DbErr> {
        let lineup_json = |team: &Team| {
            serde_json::to_string(&team.lineup)
                .map_err(|e| DbErr::Custom(format!("lineup serialization failed: {e}")))
        };

        Ok(Self {
            home_team_name: state.home_team.name.clone(),
            away_team_name: state.away_team.name.clone(),
            home_lineup: lineup_json(&state.home_team)?,
            away_lineup: lineup_json(&state.away_team)?,
            innings: to_i32("innings", state.innings)?,
            status: match state.status {
                GameStatus::InProgress => games::GameStatus::InProgress,
                GameStatus::Completed => games::GameStatus::Completed,
            },
            current_inning: to_i32("currentInning", state.current_inning)?,
            is_top_inning: state.is_top_inning,
            home_score: to_i32("score.home", state.score.home)?,
            away_score: to_i32("score.away", state.score.away)?,
            outs: i16::from(state.outs),
            on_first: state.bases.first,
            on_second: state.bases.second,
            on_third: state.bases.third,
            home_batter_index: to_i32("currentBatterIndex.home", state.current_batter_index.home)?,
            away_batter_index: to_i32("currentBatterIndex.away", state.current_batter_index.away)?,
            early_finish: state.rules.early_finish,
            extra_innings: state.rules.extra_innings,
        })
    }
}

/// Rebuild the domain state from a stored row.
pub fn state_from_model(model: &games::Model) -> Result<GameState, DbErr> {
    let id = model.id.as_str();
    let team = |name: &str, lineup: &str| -> Result<Team, DbErr> {
        Ok(Team {
            name: name.to_string(),
            lineup: serde_json::from_str(lineup).map_err(|e| corrupt(id, e))?,
        })
    };

    Ok(GameState {
        game_id: model.id.clone(),
        home_team: team(&model.home_team_name, &model.home_lineup)?,
        away_team: team(&model.away_team_name, &model.away_lineup)?,
        innings: from_i32(id, "innings", model.innings)?,
        status: match model.status {
            games::GameStatus::InProgress => GameStatus::InProgress,
            games::GameStatus::Completed => GameStatus::Completed,
        },
        current_inning: from_i32(id, "current_inning", model.current_inning)?,
        is_top_inning: model.is_top_inning,
        score: Score {
            home: from_i32(id, "home_score", model.home_score)?,
            away: from_i32(id, "away_score", model.away_score)?,
        },
        outs: u8::try_from(model.outs).map_err(|_| corrupt(id, format_args!("outs = {}", model.outs)))?,
        bases: BaseState {
            first: model.on_first,
            second: model.on_second,
            third: model.on_third,
        },
        current_batter_index: BatterIndex {
            home: from_i32(id, "home_batter_index", model.home_batter_index)?,
            away: from_i32(id, "away_batter_index", model.away_batter_index)?,
        },
        rules: GameRules {
            early_finish: model.early_finish,
            extra_innings: model.extra_innings,
        },
    })
}
