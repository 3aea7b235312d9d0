//! HTTP and WebSocket routing configuration.
//!
//! Defines the matchmaking endpoint. The connection is handled by a
//! dedicated WebSocket actor that manages its lifecycle.

use actix_web::web;
use crate::server::matchmaking::session::ws_matchmaking;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws")
            .to(ws_matchmaking)
    );
}
