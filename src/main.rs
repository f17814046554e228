//! Main entry point for the arena bot.
//!
//! Initializes logging, reads the bind configuration and launches the HTTP
//! server that answers the game server's turn requests.

use actix_web::{App, HttpServer, middleware::Logger};
use env_logger::Env;
use log::info;

use config::server::ServerConfig;

pub mod config;
mod game;
mod server;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    info!("starting server on {}:{}", config.host, config.port);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .configure(crate::server::router::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
