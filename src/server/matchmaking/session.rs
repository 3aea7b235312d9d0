/// WebSocket session handler for matchmaking.
///
/// This actor manages a single client's connection, registering it with the
/// matchmaking server on start and relaying match requests from the client.
/// Server notifications are serialized and written back to the socket.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;

use super::messages::{ClientMessage, OutboundMessage};
use super::server::{Connect, Disconnect, FindMatch, MatchmakingServer};
use super::types::ClientId;

/// A single client's WebSocket session.
pub struct MatchmakingSession {
    pub client_id: ClientId,
    pub matchmaking_addr: Addr<MatchmakingServer>,
    /// Set once the server accepts the registration. Only a registered
    /// session deregisters on close, so a rejected duplicate cannot evict
    /// the client that owns the identifier.
    registered: bool,
}

impl Actor for MatchmakingSession {
    type Context = ws::WebsocketContext<Self>;

    /// Called when the session starts. Registers the client with the
    /// matchmaking server and closes the socket if the identifier is taken.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.matchmaking_addr
            .send(Connect {
                id: self.client_id.clone(),
                addr: ctx.address().recipient(),
            })
            .into_actor(self)
            .then(|res, act, ctx| {
                match res {
                    Ok(Ok(())) => act.registered = true,
                    // Rejected or the server is gone; either way this
                    // session has no registration to keep alive.
                    _ => ctx.stop(),
                }
                fut::ready(())
            })
            .wait(ctx);
    }

    /// Called when the session stops. Deregisters the client, but only if
    /// this session's registration was accepted.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if self.registered {
            self.matchmaking_addr.do_send(Disconnect {
                id: self.client_id.clone(),
            });
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for MatchmakingSession {
    /// Handles incoming WebSocket frames from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                match ClientMessage::parse(&text) {
                    Some(ClientMessage::FindMatch) => {
                        self.matchmaking_addr.do_send(FindMatch {
                            id: self.client_id.clone(),
                        });
                    }
                    // Unrecognized payloads are ignored: no state change,
                    // no reply.
                    None => {}
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<OutboundMessage> for MatchmakingSession {
    type Result = ();

    /// Writes a server notification to the socket.
    fn handle(&mut self, msg: OutboundMessage, ctx: &mut Self::Context) {
        ctx.text(msg.to_wire());
    }
}

/// WebSocket endpoint for matchmaking.
///
/// The client identifier is taken from the `Sec-WebSocket-Key` handshake
/// header, so every connection arrives with one and no extra parameters are
/// needed. Requests without the header are rejected before the upgrade.
pub async fn ws_matchmaking(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let client_id = req
        .headers()
        .get("Sec-WebSocket-Key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let client_id = match client_id {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Ok(HttpResponse::BadRequest().body("Missing Sec-WebSocket-Key header"));
        }
    };

    ws::start(
        MatchmakingSession {
            client_id,
            matchmaking_addr: data.matchmaking_addr.clone(),
            registered: false,
        },
        &req,
        stream,
    )
}
