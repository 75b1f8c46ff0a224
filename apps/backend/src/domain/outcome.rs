use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::errors::EngineError;

/// Result of one plate appearance, as selected by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
    Strikeout,
    Walk,
    /// Scored as a plain out; runners hold.
    Sacrifice,
}

impl PlayOutcome {
    pub const ALL: [PlayOutcome; 8] = [
        PlayOutcome::Single,
        PlayOutcome::Double,
        PlayOutcome::Triple,
        PlayOutcome::HomeRun,
        PlayOutcome::Out,
        PlayOutcome::Strikeout,
        PlayOutcome::Walk,
        PlayOutcome::Sacrifice,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            PlayOutcome::Single => "single",
            PlayOutcome::Double => "double",
            PlayOutcome::Triple => "triple",
            PlayOutcome::HomeRun => "homerun",
            PlayOutcome::Out => "out",
            PlayOutcome::Strikeout => "strikeout",
            PlayOutcome::Walk => "walk",
            PlayOutcome::Sacrifice => "sacrifice",
        }
    }

    pub fn is_out(&self) -> bool {
        matches!(
            self,
            PlayOutcome::Out | PlayOutcome::Strikeout | PlayOutcome::Sacrifice
        )
    }
}

impl FromStr for PlayOutcome {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayOutcome::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| EngineError::UnknownOutcome(s.to_string()))
    }
}

impl fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlayOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlayOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
