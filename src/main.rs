//! Main entry point for the matchmaking server.
//!
//! Initializes the actor system, configures application state, and launches
//! the HTTP server with the WebSocket matchmaking endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::matchmaking::server::MatchmakingServer;

pub mod config;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // Start the MatchmakingServer actor (handles the registry, queue and pairing).
    let matchmaking_addr = MatchmakingServer::new().start();

    // Shared application state for the WebSocket upgrade handler.
    let state = web::Data::new(server::state::AppState::new(matchmaking_addr));

    let port = config::server::port();
    info!("[Server] Listening on 0.0.0.0:{}", port);

    // Start the HTTP server with the WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
