use proptest::prelude::*;

use crate::domain::engine::{advance_runners, apply_play};
use crate::domain::errors::EngineError;
use crate::domain::outcome::PlayOutcome;
use crate::domain::rules::OUTS_PER_HALF_INNING;
use crate::domain::state::{BaseState, GameStatus};
use crate::domain::validation::validate_state;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Outs never rest at three or more after any sequence of plays.
    #[test]
    fn prop_outs_stay_below_three(
        start in test_gens::in_progress_state(),
        plays in test_gens::outcomes(60),
    ) {
        let mut state = start;
        for outcome in plays {
            match apply_play(&state, outcome) {
                Ok(next) => state = next,
                Err(e) => {
                    prop_assert_eq!(e, EngineError::GameAlreadyCompleted);
                    prop_assert!(state.is_completed());
                    break;
                }
            }
            prop_assert!(state.outs < OUTS_PER_HALF_INNING);
        }
    }

    /// A home run always empties the bases and scores the batter plus every runner.
    #[test]
    fn prop_homerun_clears_bases(bases in test_gens::bases()) {
        let mut after = bases;
        let runs = advance_runners(&mut after, PlayOutcome::HomeRun);
        prop_assert_eq!(runs, bases.occupied() + 1);
        prop_assert_eq!(after, BaseState::EMPTY);
    }

    /// Runners are conserved: before + batter = after + runs, for every non-out outcome.
    #[test]
    fn prop_runners_are_conserved(
        bases in test_gens::bases(),
        outcome in test_gens::outcome(),
    ) {
        let mut after = bases;
        let runs = advance_runners(&mut after, outcome);
        if outcome.is_out() {
            prop_assert_eq!(runs, 0);
            prop_assert_eq!(after, bases);
        } else {
            prop_assert_eq!(bases.occupied() + 1, after.occupied() + runs);
        }
    }

    /// Scores never decrease, and only the batting side's score changes.
    #[test]
    fn prop_only_batting_side_scores(
        state in test_gens::in_progress_state(),
        outcome in test_gens::outcome(),
    ) {
        let side = state.batting_side();
        let next = apply_play(&state, outcome).unwrap();
        prop_assert!(next.score.for_side(side) >= state.score.for_side(side));
        prop_assert_eq!(
            next.score.for_side(side.opponent()),
            state.score.for_side(side.opponent())
        );
    }

    /// Every state the engine produces passes structural validation.
    #[test]
    fn prop_engine_output_is_valid(
        start in test_gens::in_progress_state(),
        plays in test_gens::outcomes(40),
    ) {
        let mut state = start;
        for outcome in plays {
            if state.status == GameStatus::Completed {
                break;
            }
            state = apply_play(&state, outcome).unwrap();
            prop_assert_eq!(validate_state(&state), Ok(()));
        }
    }

    /// Batter indices stay inside their lineups.
    #[test]
    fn prop_batter_index_in_bounds(
        start in test_gens::in_progress_state(),
        plays in test_gens::outcomes(40),
    ) {
        let mut state = start;
        for outcome in plays {
            let Ok(next) = apply_play(&state, outcome) else { break };
            state = next;
            prop_assert!(state.current_batter_index.home < state.home_team.lineup.len());
            prop_assert!(state.current_batter_index.away < state.away_team.lineup.len());
        }
    }
}
