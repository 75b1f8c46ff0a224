//! ETag helpers for optimistic concurrency control.
//!
//! Games are tagged `"game-{id}-v{version}"`, so `If-Match` pins the version
//! a write is based on and `If-None-Match` lets pollers skip unchanged reads.

use actix_web::http::header::{HeaderMap, IF_MATCH, IF_NONE_MATCH};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Format: `"game-{id}-v{version}"` (with quotes, as required by HTTP).
pub fn game_etag(id: &str, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Parse the version from an ETag issued for game `id`.
///
/// Weak validators (`W/`) are accepted; an ETag naming another game is rejected.
pub fn parse_game_version_from_etag(id: &str, s: &str) -> Result<i32, AppError> {
    let raw = s.trim();
    let tag = raw.strip_prefix("W/").unwrap_or(raw).trim_matches('"');

    let prefix = format!("game-{id}-v");
    let version_str = tag.strip_prefix(prefix.as_str()).ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag: expected \"{prefix}{{version}}\", got: \"{tag}\""),
        )
    })?;

    version_str.parse::<i32>().map_err(|_| {
        AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("Invalid ETag: version must be a valid integer, got: \"{version_str}\""),
        )
    })
}

/// Version pinned by `If-Match`, if any. `*` pins nothing.
pub fn expected_version(headers: &HeaderMap, id: &str) -> Result<Option<i32>, AppError> {
    let Some(value) = headers.get(IF_MATCH) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        AppError::bad_request(ErrorCode::InvalidHeader, "If-Match header is not valid ASCII")
    })?;
    if value.trim() == "*" {
        return Ok(None);
    }
    parse_game_version_from_etag(id, value).map(Some)
}

/// True when any tag listed in `If-None-Match` equals `etag` (or is `*`).
pub fn if_none_match_hits(headers: &HeaderMap, etag: &str) -> bool {
    let bare = etag.trim_matches('"');
    headers
        .get_all(IF_NONE_MATCH)
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .any(|candidate| {
            let candidate = candidate.strip_prefix("W/").unwrap_or(candidate);
            candidate == "*" || candidate.trim_matches('"') == bare
        })
}
