//! Domain layer: pure scorekeeping types and the play engine.

pub mod engine;
pub mod errors;
pub mod fixtures;
pub mod game_transition;
pub mod outcome;
pub mod rules;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_engine;

// Re-exports for ergonomics
pub use engine::{advance_runners, apply_play};
pub use errors::EngineError;
pub use game_transition::{derive_game_transitions, GameTransition};
pub use outcome::PlayOutcome;
pub use rules::GameRules;
pub use state::{
    BaseState, BatterIndex, GameState, GameStatus, Lineup, NewGame, Player, Score, Team, TeamSide,
};
pub use validation::{validate_game_id, validate_new_game, validate_state, ValidationError};
