use thiserror::Error;

/// Rejections produced by the play engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("game already completed")]
    GameAlreadyCompleted,
    #[error("unknown play outcome: {0}")]
    UnknownOutcome(String),
    #[error("{side} score would exceed {limit} runs")]
    ScoreOverflow { side: &'static str, limit: u32 },
}
