//! Game HTTP routes under `/api/game`.

use actix_web::http::header::{ETAG, LOCATION};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::outcome::PlayOutcome;
use crate::domain::state::{GameState, NewGame};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::http::etag::{expected_version, game_etag, if_none_match_hits};
use crate::state::app_state::AppState;
use crate::store::StoredGame;

#[derive(Serialize)]
struct GameEnvelope<'a> {
    success: bool,
    game: &'a GameState,
    version: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayRequest {
    pub(crate) outcome: String,
}

fn game_response(status: StatusCode, stored: &StoredGame) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((ETAG, game_etag(&stored.state.game_id, stored.version)))
        .json(GameEnvelope {
            success: true,
            game: &stored.state,
            version: stored.version,
        })
}

/// POST /api/game
///
/// Creates a game from the setup form. Returns 201 with the initial state.
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<NewGame>,
) -> Result<HttpResponse, AppError> {
    let stored = app_state
        .games
        .create_game(app_state.store(), body.into_inner(), app_state.default_rules)
        .await?;

    let mut response = game_response(StatusCode::CREATED, &stored);
    if let Ok(location) = format!("/api/game/{}", stored.state.game_id).parse() {
        response.headers_mut().insert(LOCATION, location);
    }
    Ok(response)
}

/// GET /api/game/{game_id}
///
/// Supports `If-None-Match`: a matching ETag yields `304 Not Modified` with no body,
/// which keeps spectator polling cheap.
async fn get_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stored = app_state
        .games
        .get_game(app_state.store(), game_id.as_str())
        .await?;

    let etag_value = game_etag(&stored.state.game_id, stored.version);
    if if_none_match_hits(http_req.headers(), &etag_value) {
        return Ok(HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag_value))
            .finish());
    }

    Ok(game_response(StatusCode::OK, &stored))
}

/// PUT /api/game/{game_id}
///
/// Replaces the whole state. `If-Match` pins the version being replaced.
async fn replace_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<GameState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(http_req.headers(), game_id.as_str())?;
    let stored = app_state
        .games
        .replace_game(app_state.store(), game_id.as_str(), body.into_inner(), expected)
        .await?;
    Ok(game_response(StatusCode::OK, &stored))
}

/// POST /api/game/{game_id}/plays
///
/// Body `{"outcome": "single"}`. Unknown outcomes are rejected before the game is loaded.
async fn record_play(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<PlayRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome: PlayOutcome = body.outcome.parse().map_err(DomainError::from)?;
    let expected = expected_version(http_req.headers(), game_id.as_str())?;
    let stored = app_state
        .games
        .record_play(app_state.store(), game_id.as_str(), outcome, expected)
        .await?;
    Ok(game_response(StatusCode::OK, &stored))
}

/// DELETE /api/game/{game_id}
async fn delete_game(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let expected = expected_version(http_req.headers(), game_id.as_str())?;
    app_state
        .games
        .delete_game(app_state.store(), game_id.as_str(), expected)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)))
        .service(
            web::resource("/{game_id}")
                .route(web::get().to(get_game))
                .route(web::put().to(replace_game))
                .route(web::delete().to(delete_game)),
        )
        .service(web::resource("/{game_id}/plays").route(web::post().to(record_play)));
}
