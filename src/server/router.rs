//! HTTP routing configuration.
//!
//! The game server talks to a single path: `GET` to check the bot is up,
//! `POST` to ask for the next move.

use actix_web::web;

use crate::config::server::MAX_PAYLOAD_BYTES;
use crate::server::handlers::{greet, play};

/// Configure the application's HTTP routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
        .service(
            web::resource("/")
                .route(web::get().to(greet))
                .route(web::post().to(play)),
        );
}
