use actix::prelude::*;
use log::error;
use serde::{Serialize, Deserialize};

/// Delivery handle for one client's session. The matchmaking server only
/// ever pushes `OutboundMessage`s, so it holds a recipient rather than the
/// concrete session actor address.
pub type SessionAddr = Recipient<OutboundMessage>;

/// Messages a client can send. The protocol defines exactly one; anything
/// else on the wire is ignored rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientMessage {
    FindMatch,
}

impl ClientMessage {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "FindMatch" => Some(Self::FindMatch),
            _ => None,
        }
    }
}

/// Outbound JSON envelope: `{"status": <int>, "data": <string|null>}`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: &str) -> Self {
        Self {
            status: 200,
            data: Some(data.to_string()),
        }
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to serialize ApiResponse: {}", e);
                r#"{"status":500,"data":null}"#.to_string()
            }
        }
    }
}

// Notifications server -> client.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
#[rtype(result = "()")]
pub enum OutboundMessage {
    /// Acknowledges a successful registration.
    ConnectAck,
    /// Best-effort farewell on a closing connection.
    Disconnected,
    /// The client has been paired into a game.
    MatchFound,
}

impl OutboundMessage {
    /// Exact wire payload for this notification. The connect ack is a bare
    /// string rather than an envelope; deployed clients expect both shapes
    /// as they are.
    pub fn to_wire(self) -> String {
        match self {
            Self::ConnectAck => "Connected!!!".to_string(),
            Self::Disconnected => ApiResponse::ok("Disconnected").to_json(),
            Self::MatchFound => ApiResponse::ok("MatchFound").to_json(),
        }
    }
}
