//! Error codes for the scorebook API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Game id is empty, too long or has characters outside [A-Za-z0-9_-]
    InvalidGameId,
    /// Game state or setup payload failed structural checks
    InvalidGameState,
    /// Play outcome string is not one of the known outcomes
    UnknownOutcome,
    /// Body game id differs from the path id
    GameIdMismatch,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid or missing HTTP header
    InvalidHeader,

    // Resource Not Found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Play submitted to a finished game
    GameAlreadyCompleted,
    /// Create used an id that already exists
    DuplicateGameId,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,

    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    ConfigError,
    /// Stored row could not be decoded into a game
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidGameState => "INVALID_GAME_STATE",
            Self::UnknownOutcome => "UNKNOWN_OUTCOME",
            Self::GameIdMismatch => "GAME_ID_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameAlreadyCompleted => "GAME_ALREADY_COMPLETED",
            Self::DuplicateGameId => "DUPLICATE_GAME_ID",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
