//! Ready-made teams and games for tests and local experiments.

use crate::domain::rules::GameRules;
use crate::domain::state::{GameState, NewGame, Player, Team};

const POSITIONS: [&str; 9] = ["P", "C", "1B", "2B", "3B", "SS", "LF", "CF", "RF"];

/// A team whose player ids are `{name-lowercased}-{1..=size}`.
pub fn team(name: &str, size: usize) -> Team {
    let prefix = name.to_lowercase().replace(' ', "-");
    let lineup = (1..=size)
        .map(|n| {
            Player::new(
                format!("{prefix}-{n}"),
                format!("{name} Batter {n}"),
                POSITIONS[(n - 1) % POSITIONS.len()],
            )
        })
        .collect();
    Team {
        name: name.to_string(),
        lineup,
    }
}

/// Nine-inning game between "Locals" (home) and "Visitors" (away), default rules.
pub fn sample_game() -> GameState {
    sample_game_with_rules(GameRules::default())
}

pub fn sample_game_with_rules(rules: GameRules) -> GameState {
    GameState::new(
        "game-sample",
        team("Locals", 9),
        team("Visitors", 9),
        9,
        rules,
    )
}

/// Setup-form payload matching [`sample_game`], without an explicit id.
pub fn sample_new_game() -> NewGame {
    NewGame {
        game_id: None,
        home_team: team("Locals", 9),
        away_team: team("Visitors", 9),
        innings: 9,
        rules: None,
    }
}
