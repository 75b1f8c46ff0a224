use crate::domain::engine::apply_play;
use crate::domain::errors::EngineError;
use crate::domain::fixtures::{sample_game, sample_game_with_rules, team};
use crate::domain::outcome::PlayOutcome;
use crate::domain::rules::{GameRules, MAX_SCORE};
use crate::domain::state::{BaseState, GameState, GameStatus};
use crate::domain::test_state_helpers::{play_all, three_outs};
use crate::domain::validation::validate_state;

fn early_finish() -> GameRules {
    GameRules {
        early_finish: true,
        extra_innings: true,
    }
}

#[test]
fn single_then_homerun_scores_two_for_the_visitors() {
    let state = play_all(
        &sample_game(),
        &[PlayOutcome::Single, PlayOutcome::HomeRun],
    );
    assert_eq!(state.score.away, 2);
    assert_eq!(state.score.home, 0);
    assert_eq!(state.bases, BaseState::EMPTY);
    assert_eq!(state.outs, 0);
    assert!(state.is_top_inning);
}

#[test]
fn three_outs_from_empty_state_flip_to_bottom_of_first() {
    let state = three_outs(&sample_game());
    assert!(!state.is_top_inning);
    assert_eq!(state.current_inning, 1);
    assert_eq!(state.outs, 0);
    assert_eq!(state.bases, BaseState::EMPTY);
    assert_eq!(state.status, GameStatus::InProgress);
}

#[test]
fn loaded_single_scores_exactly_one_and_keeps_bases_loaded() {
    let mut state = sample_game();
    state.bases = BaseState::LOADED;
    let next = apply_play(&state, PlayOutcome::Single).unwrap();
    assert_eq!(next.score.away, 1);
    assert_eq!(next.bases, BaseState::LOADED);
}

#[test]
fn bottom_half_ending_advances_the_inning() {
    let mut state = three_outs(&sample_game());
    state = three_outs(&state);
    assert!(state.is_top_inning);
    assert_eq!(state.current_inning, 2);
}

#[test]
fn runners_are_cleared_when_the_side_is_retired() {
    let state = play_all(
        &sample_game(),
        &[
            PlayOutcome::Walk,
            PlayOutcome::Double,
            PlayOutcome::Out,
            PlayOutcome::Strikeout,
            PlayOutcome::Sacrifice,
        ],
    );
    assert_eq!(state.bases, BaseState::EMPTY);
    assert!(!state.is_top_inning);
    assert_eq!(state.score.away, 0);
}

#[test]
fn home_team_runs_go_to_home_score() {
    let mut state = three_outs(&sample_game());
    state = apply_play(&state, PlayOutcome::HomeRun).unwrap();
    assert_eq!(state.score.home, 1);
    assert_eq!(state.score.away, 0);
}

#[test]
fn batter_index_advances_on_every_plate_appearance() {
    let state = play_all(
        &sample_game(),
        &[PlayOutcome::Single, PlayOutcome::Out, PlayOutcome::Walk],
    );
    assert_eq!(state.current_batter_index.away, 3);
    assert_eq!(state.current_batter_index.home, 0);
    assert_eq!(
        state.current_batter().map(|p| p.id.as_str()),
        Some("visitors-4")
    );
}

#[test]
fn batter_who_makes_third_out_does_not_lead_off_next_inning() {
    let mut state = three_outs(&sample_game());
    assert_eq!(state.current_batter_index.away, 3);
    state = three_outs(&state);
    assert_eq!(state.current_batter_index.home, 3);
    // Top of the 2nd resumes with the away team's fourth batter.
    assert_eq!(
        state.current_batter().map(|p| p.id.as_str()),
        Some("visitors-4")
    );
}

#[test]
fn batter_index_wraps_around_the_lineup() {
    let mut state = sample_game();
    state.away_team = team("Visitors", 2);
    let state = play_all(
        &state,
        &[PlayOutcome::Single, PlayOutcome::Single, PlayOutcome::Single],
    );
    assert_eq!(state.current_batter_index.away, 1);
}

#[test]
fn final_out_of_scheduled_game_completes_it() {
    let mut state = sample_game();
    state.current_inning = 9;
    state.is_top_inning = false;
    state.score.away = 4;
    state.score.home = 2;
    let state = three_outs(&state);
    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.current_inning, 10);
}

#[test]
fn completed_game_rejects_further_plays() {
    let mut state = sample_game();
    state.status = GameStatus::Completed;
    for outcome in PlayOutcome::ALL {
        assert_eq!(
            apply_play(&state, outcome),
            Err(EngineError::GameAlreadyCompleted)
        );
    }
}

#[test]
fn tied_game_goes_to_extra_innings_by_default() {
    let mut state = sample_game();
    state.current_inning = 9;
    state.is_top_inning = false;
    let state = three_outs(&state);
    assert_eq!(state.status, GameStatus::InProgress);
    assert_eq!(state.current_inning, 10);
    assert!(state.is_top_inning);
}

#[test]
fn extra_innings_end_once_the_tie_is_broken() {
    let mut state = sample_game();
    state.current_inning = 10;
    state = apply_play(&state, PlayOutcome::HomeRun).unwrap();
    state = three_outs(&state);
    state = three_outs(&state);
    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.score.away, 1);
    assert_eq!(state.current_inning, 11);
}

#[test]
fn tie_ends_the_game_when_extra_innings_are_disabled() {
    let mut state = sample_game_with_rules(GameRules {
        early_finish: false,
        extra_innings: false,
    });
    state.current_inning = 9;
    state.is_top_inning = false;
    let state = three_outs(&state);
    assert_eq!(state.status, GameStatus::Completed);
}

#[test]
fn walk_off_ends_the_game_mid_inning_when_enabled() {
    let mut state = sample_game_with_rules(early_finish());
    state.current_inning = 9;
    state.is_top_inning = false;
    state.score.away = 1;
    state.score.home = 1;
    state.bases.third = true;
    let next = apply_play(&state, PlayOutcome::Single).unwrap();
    assert_eq!(next.status, GameStatus::Completed);
    assert_eq!(next.score.home, 2);
    assert_eq!(next.current_inning, 9);
    assert!(!next.is_top_inning);
}

#[test]
fn third_out_with_home_ahead_resets_the_half_before_finishing() {
    let mut state = sample_game_with_rules(early_finish());
    state.current_inning = 9;
    state.is_top_inning = false;
    state.score.home = 5;
    state.score.away = 3;
    state.outs = 2;
    state.bases.second = true;
    assert_eq!(validate_state(&state), Ok(()));

    for outcome in [PlayOutcome::Out, PlayOutcome::Strikeout, PlayOutcome::Sacrifice] {
        let next = apply_play(&state, outcome).unwrap();
        assert_eq!(next.status, GameStatus::Completed);
        assert_eq!(next.outs, 0);
        assert_eq!(next.bases, BaseState::EMPTY);
        assert_eq!(validate_state(&next), Ok(()), "{outcome:?}");
    }
}

#[test]
fn non_scoring_hit_with_home_ahead_does_not_walk_off() {
    let mut state = sample_game_with_rules(early_finish());
    state.current_inning = 9;
    state.is_top_inning = false;
    state.score.home = 5;
    state.score.away = 3;
    let next = apply_play(&state, PlayOutcome::Single).unwrap();
    assert_eq!(next.status, GameStatus::InProgress);
}

#[test]
fn run_past_the_score_limit_is_rejected() {
    let mut state = sample_game();
    state.score.away = MAX_SCORE;
    assert_eq!(validate_state(&state), Ok(()));

    let err = apply_play(&state, PlayOutcome::HomeRun).unwrap_err();
    assert!(matches!(err, EngineError::ScoreOverflow { side: "away", .. }));
    // Non-scoring plays still go through at the limit.
    let next = apply_play(&state, PlayOutcome::Walk).unwrap();
    assert_eq!(next.score.away, MAX_SCORE);
}

#[test]
fn walk_off_is_ignored_when_disabled() {
    let mut state = sample_game();
    state.current_inning = 9;
    state.is_top_inning = false;
    state.score.away = 1;
    state.score.home = 1;
    state.bases.third = true;
    let next = apply_play(&state, PlayOutcome::Single).unwrap();
    assert_eq!(next.status, GameStatus::InProgress);
    assert_eq!(next.score.home, 2);
}

#[test]
fn walk_off_does_not_apply_before_the_final_inning() {
    let mut state = sample_game_with_rules(early_finish());
    state.current_inning = 8;
    state.is_top_inning = false;
    let next = apply_play(&state, PlayOutcome::HomeRun).unwrap();
    assert_eq!(next.status, GameStatus::InProgress);
}

#[test]
fn bottom_half_is_skipped_when_home_already_leads() {
    let mut state = sample_game_with_rules(early_finish());
    state.current_inning = 9;
    state.score.home = 3;
    state.score.away = 1;
    let next = three_outs(&state);
    assert_eq!(next.status, GameStatus::Completed);
    assert!(!next.is_top_inning);
    assert_eq!(next.current_inning, 9);
}

#[test]
fn bottom_half_is_played_when_home_leads_without_early_finish() {
    let mut state = sample_game();
    state.current_inning = 9;
    state.score.home = 3;
    state.score.away = 1;
    let next = three_outs(&state);
    assert_eq!(next.status, GameStatus::InProgress);
    assert!(!next.is_top_inning);
}

#[test]
fn apply_play_does_not_touch_its_input() {
    let state = sample_game();
    let snapshot: GameState = state.clone();
    let _ = apply_play(&state, PlayOutcome::HomeRun).unwrap();
    assert_eq!(state, snapshot);
}

#[test]
fn one_inning_game_lifecycle() {
    let mut state = sample_game();
    state.innings = 1;
    let state = play_all(
        &state,
        &[
            PlayOutcome::Double,
            PlayOutcome::Single,
            PlayOutcome::Out,
            PlayOutcome::Out,
            PlayOutcome::Out,
        ],
    );
    // Runner from second held at third on the single.
    assert_eq!(state.score.away, 0);
    let state = three_outs(&state);
    assert_eq!(state.status, GameStatus::InProgress, "tied 0-0 goes on");

    let state = play_all(&state, &[PlayOutcome::HomeRun]);
    let state = three_outs(&three_outs(&state));
    assert_eq!(state.status, GameStatus::Completed);
    assert_eq!(state.score.away, 1);
    assert_eq!(
        apply_play(&state, PlayOutcome::Walk),
        Err(EngineError::GameAlreadyCompleted)
    );
}
