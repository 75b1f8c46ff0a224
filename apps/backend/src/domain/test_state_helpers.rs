//! Test-only helpers for driving the engine through several plays.

use crate::domain::engine::apply_play;
use crate::domain::outcome::PlayOutcome;
use crate::domain::state::GameState;

/// Apply each outcome in order, panicking if the engine rejects one.
pub fn play_all(state: &GameState, outcomes: &[PlayOutcome]) -> GameState {
    outcomes.iter().fold(state.clone(), |acc, outcome| {
        apply_play(&acc, *outcome)
            .unwrap_or_else(|e| panic!("apply_play({outcome}) failed: {e}"))
    })
}

/// Retire the side currently at bat with three straight outs.
pub fn three_outs(state: &GameState) -> GameState {
    play_all(
        state,
        &[PlayOutcome::Out, PlayOutcome::Strikeout, PlayOutcome::Out],
    )
}
