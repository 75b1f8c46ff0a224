use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// Request body decoded as JSON into `T`.
///
/// Only shape and types are checked here; a body that fails to decode is a
/// 400 `BAD_REQUEST` naming the offending field where serde knows it. Game
/// rules (lineups, innings, outs) are enforced later by `domain::validation`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();

        Box::pin(async move {
            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_ctx::trace_id(), error = %e, "request body read failed");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            decode_body(&body, &content_type).map(ValidatedJson)
        })
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8], content_type: &str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(
            trace_id = %trace_ctx::trace_id(),
            error = %e,
            content_type,
            body_size = body.len(),
            "request body rejected"
        );
        AppError::bad_request(ErrorCode::BadRequest, body_error_detail(&e))
    })
}

/// Client-facing wording for a decode failure. Never echoes body content.
fn body_error_detail(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => {
            // "missing field `homeTeam` at line 1 column 40" -> "missing field `homeTeam`"
            let message = error.to_string();
            let message = message.split(" at line ").next().unwrap_or_default();
            format!("Invalid JSON: wrong types for one or more fields ({message})")
        }
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
