use thiserror::Error;

/// Connection-scoped client identifier, assigned by the transport layer at
/// connect time (the WebSocket handshake key). Opaque to matchmaking.
pub type ClientId = String;

/// Lifecycle of a connected client. There is no terminal variant: a client
/// that gets paired or disconnects is removed from the registry instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientStatus {
    Connected,
    FindingMatch,
}

/// An established pairing. Records are immutable once created; the two side
/// labels carry no ordering semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub side_a: ClientId,
    pub side_b: ClientId,
}

impl Game {
    /// Whether `id` is one of the two paired clients.
    pub fn involves(&self, id: &str) -> bool {
        self.side_a == id || self.side_b == id
    }

    /// Whether this game pairs exactly `a` and `b`, in either order.
    pub fn pairs(&self, a: &str, b: &str) -> bool {
        (self.side_a == a && self.side_b == b) || (self.side_a == b && self.side_b == a)
    }
}

/// Faults the matchmaking server contains locally. None of these abort the
/// process; the offending event is logged and dropped.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchmakingError {
    /// A connect event reused an identifier that is still registered.
    #[error("client {0} is already registered")]
    DuplicateClient(ClientId),
    /// A pairing step referenced an identifier with no registry entry.
    #[error("unknown client {0}")]
    UnknownClient(ClientId),
}
