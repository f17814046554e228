//! HTTP handlers for the game server's two requests.
//!
//! `GET /` is a liveness probe. `POST /` carries one arena update and is
//! answered with a single command letter.

use actix_web::{HttpResponse, http::header::ContentType, web};
use log::warn;

use crate::config::server::GREETING;
use crate::game::systems::decide;
use crate::game::types::ArenaSnapshot;
use crate::server::http_error::ApiError;

pub async fn greet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(GREETING)
}

/// Decode the arena update and answer with the command to play.
///
/// Decoded from the raw body: the content type is not checked.
pub async fn play(body: web::Bytes) -> Result<HttpResponse, ApiError> {
    let snapshot: ArenaSnapshot = serde_json::from_slice(&body).map_err(|e| {
        warn!("Failed to decode arena update in request body: {}", e);
        ApiError::from(e)
    })?;

    let command = decide(&snapshot);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(command.as_str()))
}
