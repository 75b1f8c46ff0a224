// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::domain::errors::EngineError;
use crate::domain::validation::validate_game_id;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidGameState, "outs: must be below 3");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidGameState);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_engine_errors() {
    let app: AppError = DomainError::from(EngineError::GameAlreadyCompleted).into();
    assert_eq!(app.code(), ErrorCode::GameAlreadyCompleted);
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::from(EngineError::UnknownOutcome("bunt".into())).into();
    assert_eq!(app.code(), ErrorCode::UnknownOutcome);
    assert_eq!(app.status().as_u16(), 400);
    assert!(app.detail().contains("bunt"));
}

#[test]
fn maps_validation_errors_by_field() {
    let err = validate_game_id("no spaces").unwrap_err();
    let app: AppError = DomainError::from(err).into();
    assert_eq!(app.code(), ErrorCode::InvalidGameId);
    assert!(app.detail().starts_with("gameId:"));
}

#[test]
fn maps_conflicts() {
    let dup = DomainError::conflict(ConflictKind::DuplicateGameId, "exists");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_GAME_ID");
    assert_eq!(app.status().as_u16(), 409);

    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::game_not_found("game-1");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert_eq!(app.detail(), "Game game-1 not found");

    let other = DomainError::not_found(NotFoundKind::Other("Thing".into()), "nope");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::GameIdMismatch, "ids differ");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::GameIdMismatch, _)
    ));

    let conflict = DomainError::conflict(ConflictKind::GameAlreadyCompleted, "done");
    assert!(matches!(
        conflict,
        DomainError::Conflict(ConflictKind::GameAlreadyCompleted, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
