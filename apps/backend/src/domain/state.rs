use serde::{Deserialize, Serialize};

use crate::domain::errors::EngineError;
use crate::domain::rules::{GameRules, DEFAULT_INNINGS, MAX_SCORE};

/// Which side of the scoreboard a team sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }

    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
        }
    }
}

/// Batting order. Order is significant.
pub type Lineup = Vec<Player>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub lineup: Lineup,
}

/// Occupancy of the three bases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseState {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl BaseState {
    pub const EMPTY: BaseState = BaseState {
        first: false,
        second: false,
        third: false,
    };

    pub const LOADED: BaseState = BaseState {
        first: true,
        second: true,
        third: true,
    };

    pub fn occupied(&self) -> u32 {
        u32::from(self.first) + u32::from(self.second) + u32::from(self.third)
    }

    pub fn is_loaded(&self) -> bool {
        self.first && self.second && self.third
    }

    pub fn clear(&mut self) {
        *self = BaseState::EMPTY;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn for_side(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    /// Credit `runs` to `side`; the score is left untouched past [`MAX_SCORE`].
    pub fn add(&mut self, side: TeamSide, runs: u32) -> Result<(), EngineError> {
        let slot = match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        };
        let total = slot
            .checked_add(runs)
            .filter(|total| *total <= MAX_SCORE)
            .ok_or(EngineError::ScoreOverflow {
                side: side.as_str(),
                limit: MAX_SCORE,
            })?;
        *slot = total;
        Ok(())
    }

    pub fn home_leads(&self) -> bool {
        self.home > self.away
    }

    pub fn is_tied(&self) -> bool {
        self.home == self.away
    }
}

/// Per-team index of the batter currently due up.
///
/// Each team keeps its own position in the order, so the side change
/// never disturbs the other team's place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterIndex {
    pub home: usize,
    pub away: usize,
}

impl BatterIndex {
    pub fn for_side(&self, side: TeamSide) -> usize {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub fn set(&mut self, side: TeamSide, index: usize) {
        match side {
            TeamSide::Home => self.home = index,
            TeamSide::Away => self.away = index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub game_id: String,
    pub home_team: Team,
    pub away_team: Team,
    /// Scheduled innings, fixed at creation.
    pub innings: u32,
    pub status: GameStatus,
    /// 1-based; only ever increases.
    pub current_inning: u32,
    /// `true` while the away team bats.
    pub is_top_inning: bool,
    pub score: Score,
    /// 0..=2 between plays.
    pub outs: u8,
    pub bases: BaseState,
    #[serde(default)]
    pub current_batter_index: BatterIndex,
    #[serde(default)]
    pub rules: GameRules,
}

impl GameState {
    /// Fresh game: top of the first, nobody on, nobody out.
    pub fn new(
        game_id: impl Into<String>,
        home_team: Team,
        away_team: Team,
        innings: u32,
        rules: GameRules,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            home_team,
            away_team,
            innings,
            status: GameStatus::InProgress,
            current_inning: 1,
            is_top_inning: true,
            score: Score::default(),
            outs: 0,
            bases: BaseState::EMPTY,
            current_batter_index: BatterIndex::default(),
            rules,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == GameStatus::Completed
    }

    pub fn batting_side(&self) -> TeamSide {
        if self.is_top_inning {
            TeamSide::Away
        } else {
            TeamSide::Home
        }
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    pub fn batting_team(&self) -> &Team {
        self.team(self.batting_side())
    }

    /// The player due up for the batting team, if the lineup is populated.
    pub fn current_batter(&self) -> Option<&Player> {
        let side = self.batting_side();
        self.team(side)
            .lineup
            .get(self.current_batter_index.for_side(side))
    }
}

/// Setup-form input: everything a scorer provides before the first pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    #[serde(default)]
    pub game_id: Option<String>,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default = "default_innings")]
    pub innings: u32,
    #[serde(default)]
    pub rules: Option<GameRules>,
}

fn default_innings() -> u32 {
    DEFAULT_INNINGS
}
