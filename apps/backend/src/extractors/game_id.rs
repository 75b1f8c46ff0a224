use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::domain::validation::validate_game_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game id taken from the `{game_id}` path segment, checked for shape only.
///
/// Existence is left to the service so a missing game maps to 404 in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameId(pub String);

impl GameId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameId, AppError> {
    let raw = req.match_info().get("game_id").ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;
    validate_game_id(raw)
        .map_err(|e| AppError::bad_request(ErrorCode::InvalidGameId, e.to_string()))?;
    Ok(GameId(raw.to_string()))
}
