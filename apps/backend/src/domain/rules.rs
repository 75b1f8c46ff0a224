use serde::{Deserialize, Serialize};

pub const DEFAULT_INNINGS: u32 = 9;
pub const MAX_INNINGS: u32 = 99;
pub const OUTS_PER_HALF_INNING: u8 = 3;
/// Largest run total either team may reach; scores are persisted as `i32`.
pub const MAX_SCORE: u32 = i32::MAX as u32;

/// Per-game rule switches.
///
/// The scorer fixes these when the game is created; the engine reads them
/// on every play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRules {
    /// End the game as soon as the home team leads in the final scheduled
    /// inning or later: mid-play (walk-off) or after the top half (the bottom
    /// half is not played).
    #[serde(default)]
    pub early_finish: bool,
    /// Keep playing past the scheduled innings while the score is tied.
    #[serde(default = "default_true")]
    pub extra_innings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            early_finish: false,
            extra_innings: true,
        }
    }
}
