//! Play engine: turns one plate-appearance outcome into the next game state.
//!
//! The engine is pure. It borrows the current state, returns a new one, and
//! never leaves a half-applied play behind on error.

use crate::domain::errors::EngineError;
use crate::domain::outcome::PlayOutcome;
use crate::domain::rules::OUTS_PER_HALF_INNING;
use crate::domain::state::{BaseState, GameState, GameStatus, TeamSide};

/// Apply `outcome` to `state` for the team currently at bat.
pub fn apply_play(state: &GameState, outcome: PlayOutcome) -> Result<GameState, EngineError> {
    if state.is_completed() {
        return Err(EngineError::GameAlreadyCompleted);
    }

    let mut next = state.clone();
    let side = next.batting_side();

    let runs = advance_runners(&mut next.bases, outcome);
    if outcome.is_out() {
        next.outs += 1;
    }
    next.score.add(side, runs)?;
    advance_batter(&mut next, side);

    if runs > 0 && home_walks_off(&next, side) {
        next.status = GameStatus::Completed;
        return Ok(next);
    }

    if next.outs >= OUTS_PER_HALF_INNING {
        end_half_inning(&mut next);
    }

    Ok(next)
}

/// Move runners for `outcome` and return the runs that crossed the plate.
///
/// Hits force every runner ahead by the number of bases the batter takes.
/// A walk only pushes runners that are forced by the chain behind them.
pub fn advance_runners(bases: &mut BaseState, outcome: PlayOutcome) -> u32 {
    let before = *bases;
    match outcome {
        PlayOutcome::Single => {
            *bases = BaseState {
                first: true,
                second: before.first,
                third: before.second,
            };
            u32::from(before.third)
        }
        PlayOutcome::Double => {
            *bases = BaseState {
                first: false,
                second: true,
                third: before.first,
            };
            u32::from(before.third) + u32::from(before.second)
        }
        PlayOutcome::Triple => {
            *bases = BaseState {
                first: false,
                second: false,
                third: true,
            };
            before.occupied()
        }
        PlayOutcome::HomeRun => {
            bases.clear();
            before.occupied() + 1
        }
        PlayOutcome::Walk => {
            let forced_to_second = before.first;
            let forced_to_third = forced_to_second && before.second;
            let forced_home = forced_to_third && before.third;
            *bases = BaseState {
                first: true,
                second: before.second || forced_to_second,
                third: before.third || forced_to_third,
            };
            u32::from(forced_home)
        }
        PlayOutcome::Out | PlayOutcome::Strikeout | PlayOutcome::Sacrifice => 0,
    }
}

fn advance_batter(state: &mut GameState, side: TeamSide) {
    let len = state.team(side).lineup.len();
    if len == 0 {
        return;
    }
    let next = (state.current_batter_index.for_side(side) + 1) % len;
    state.current_batter_index.set(side, next);
}

/// Home team, having just scored, leads in the final scheduled inning or later.
///
/// Only a scoring play can walk off; an out never does, so the three-out
/// reset always runs.
fn home_walks_off(state: &GameState, side: TeamSide) -> bool {
    state.rules.early_finish
        && side == TeamSide::Home
        && state.current_inning >= state.innings
        && state.score.home_leads()
}

fn end_half_inning(state: &mut GameState) {
    state.outs = 0;
    state.bases.clear();

    if state.is_top_inning {
        state.is_top_inning = false;
        // Home already ahead: the bottom half has nothing left to decide.
        if state.rules.early_finish
            && state.current_inning >= state.innings
            && state.score.home_leads()
        {
            state.status = GameStatus::Completed;
        }
        return;
    }

    state.is_top_inning = true;
    state.current_inning += 1;
    if state.current_inning > state.innings {
        let goes_to_extras = state.rules.extra_innings && state.score.is_tied();
        if !goes_to_extras {
            state.status = GameStatus::Completed;
        }
    }
}
