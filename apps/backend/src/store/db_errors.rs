//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the store converts it here and higher
//! layers map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Primary-key violations on `games` mean the caller reused a game id.
fn is_duplicate_game_id(error_msg: &str) -> bool {
    error_msg.contains("UNIQUE constraint failed: games.id") || error_msg.contains("games_pkey")
}

#[derive(serde::Deserialize)]
struct LockInfo {
    expected: i32,
    actual: i32,
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) => {
            if let Some(game_id) = msg.strip_prefix("GAME_NOT_FOUND:") {
                warn!(trace_id = %trace_id, game_id, "Game not found");
                return DomainError::game_not_found(game_id);
            }

            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        trace_id = %trace_id,
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );
                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Game was modified concurrently (expected version {}, actual version {}). Please refresh and retry.",
                            info.expected, info.actual
                        ),
                    );
                }
                warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
                return DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    "Game was modified concurrently; please refresh and retry",
                );
            }

            if let Some(field) = msg.strip_prefix("VALUE_OUT_OF_RANGE:") {
                return DomainError::validation(
                    ValidationKind::InvalidGameState,
                    format!("{field}: value out of range"),
                );
            }

            if let Some(detail) = msg.strip_prefix("DATA_CORRUPTION:") {
                error!(trace_id = %trace_id, detail, "Stored game could not be decoded");
                return DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    "Stored game data is corrupted",
                );
            }
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        if is_duplicate_game_id(&error_msg) {
            return DomainError::conflict(ConflictKind::DuplicateGameId, "Game id already exists");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation(
            ValidationKind::Other("CHECK_VIOLATION".into()),
            "Check constraint violation",
        );
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
