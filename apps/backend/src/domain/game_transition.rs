// apps/backend/src/domain/game_transition.rs

use crate::domain::state::{GameState, GameStatus, TeamSide};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Explicit: runs crossed the plate for a team.
    RunsScored { team: TeamSide, runs: u32 },

    /// Edge-triggered: the half-inning the scorer was in has ended.
    HalfInningEnded { inning: u32, top: bool },

    /// Edge-triggered: a team's batter-up index moved.
    BatterChanged { team: TeamSide, index: usize },

    /// Edge-triggered: Game moved from InProgress -> Completed
    GameCompleted { home: u32, away: u32 },
}

/// Derive domain transitions from before/after game state.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Runs
    for team in [TeamSide::Away, TeamSide::Home] {
        let prev = before.score.for_side(team);
        let now = after.score.for_side(team);
        if now > prev {
            transitions.push(GameTransition::RunsScored {
                team,
                runs: now - prev,
            });
        }
    }

    // 2. Batter rotation
    for team in [TeamSide::Away, TeamSide::Home] {
        let prev = before.current_batter_index.for_side(team);
        let now = after.current_batter_index.for_side(team);
        if prev != now {
            transitions.push(GameTransition::BatterChanged { team, index: now });
        }
    }

    // 3. Half-inning change
    // A walk-off ends the game without flipping the half, so it does not count here.
    if before.is_top_inning != after.is_top_inning || before.current_inning != after.current_inning
    {
        transitions.push(GameTransition::HalfInningEnded {
            inning: before.current_inning,
            top: before.is_top_inning,
        });
    }

    // 4. Game end (!Completed -> Completed)
    if before.status != GameStatus::Completed && after.status == GameStatus::Completed {
        transitions.push(GameTransition::GameCompleted {
            home: after.score.home,
            away: after.score.away,
        });
    }

    transitions
}
