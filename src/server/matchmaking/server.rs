/// Matchmaking server actor.
///
/// Owns the client registry, the wait queue and the game records, and
/// serializes every state change through its mailbox. Handles client
/// connect/disconnect and match requests, and pairs waiting clients into
/// two-player games.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};

use super::games::GameRegistry;
use super::messages::{OutboundMessage, SessionAddr};
use super::queue::MatchQueue;
use super::registry::ClientRegistry;
use super::types::{ClientId, ClientStatus, Game, MatchmakingError};

/// Main matchmaking server actor.
pub struct MatchmakingServer {
    /// Every connected client, whatever its status.
    clients: ClientRegistry,
    /// Clients waiting for an opponent, oldest first.
    queue: MatchQueue,
    /// Pairings made so far.
    games: GameRegistry,
}

impl MatchmakingServer {
    pub fn new() -> Self {
        Self {
            clients: ClientRegistry::new(),
            queue: MatchQueue::new(),
            games: GameRegistry::new(),
        }
    }

    /// Pair `requester_id` with the longest-waiting client, or queue it if
    /// nobody is waiting.
    fn request_match(&mut self, requester_id: ClientId) {
        // A repeated request keeps the existing slot instead of re-entering
        // the queue.
        if self.queue.contains(&requester_id) {
            debug!(
                "[Matchmaking] Client {} is already waiting, keeping its slot",
                requester_id
            );
            return;
        }

        let Some(candidate_id) = self.queue.dequeue_one() else {
            debug!(
                "[Matchmaking] No opponent available, queueing client {}",
                requester_id
            );
            self.queue.enqueue(requester_id);
            return;
        };

        // Unreachable while the membership check above holds. Should queue
        // bookkeeping ever go inconsistent, the request is dropped rather
        // than paired with itself.
        if candidate_id == requester_id {
            warn!(
                "[Matchmaking] Client {} dequeued as its own opponent, dropping request",
                requester_id
            );
            return;
        }

        if !self.clients.contains(&candidate_id) {
            warn!(
                "[Matchmaking] {}, dropping match request from {}",
                MatchmakingError::UnknownClient(candidate_id),
                requester_id
            );
            return;
        }
        if !self.clients.contains(&requester_id) {
            warn!(
                "[Matchmaking] {}, dropping match request",
                MatchmakingError::UnknownClient(requester_id)
            );
            return;
        }

        // Pairing is terminal: both records leave the registry in the same
        // step, so no later request can claim either side.
        let (Some(candidate), Some(requester)) = (
            self.clients.remove(&candidate_id),
            self.clients.remove(&requester_id),
        ) else {
            return;
        };

        let game_id = self
            .games
            .create(candidate_id.clone(), requester_id.clone());
        candidate.addr.do_send(OutboundMessage::MatchFound);
        requester.addr.do_send(OutboundMessage::MatchFound);
        info!(
            "[Matchmaking] Game created: {} paired with {}, game_id={} ({} total)",
            candidate_id,
            requester_id,
            game_id,
            self.games.len()
        );
    }
}

/// Message: a new session announces itself. Rejected when the identifier is
/// already registered; the session must not deregister after a rejection.
#[derive(Message)]
#[rtype(result = "Result<(), MatchmakingError>")]
pub struct Connect {
    pub id: ClientId,
    pub addr: SessionAddr,
}

/// Message: a connected client asks to be paired.
#[derive(Message)]
#[rtype(result = "()")]
pub struct FindMatch {
    pub id: ClientId,
}

/// Message: a session's transport closed.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub id: ClientId,
}

/// Message: snapshot the server's state, for inspection in tests.
#[derive(Message)]
#[rtype(result = "MatchmakingState")]
pub struct GetState;

#[derive(Clone, Debug)]
pub struct MatchmakingState {
    pub clients: Vec<(ClientId, ClientStatus)>,
    pub queue: Vec<ClientId>,
    pub games: Vec<Game>,
}

impl Actor for MatchmakingServer {
    type Context = Context<Self>;
}

impl Handler<Connect> for MatchmakingServer {
    type Result = Result<(), MatchmakingError>;

    /// Handles a new client connection.
    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        match self.clients.register(msg.id.clone(), msg.addr) {
            Ok(client) => {
                client.addr.do_send(OutboundMessage::ConnectAck);
                debug!(
                    "[Matchmaking] Client {} connected ({} online)",
                    msg.id,
                    self.clients.len()
                );
                Ok(())
            }
            Err(e) => {
                warn!("[Matchmaking] Connect rejected: {}", e);
                Err(e)
            }
        }
    }
}

impl Handler<FindMatch> for MatchmakingServer {
    type Result = ();

    /// Handles a match request from a connected client.
    fn handle(&mut self, msg: FindMatch, _ctx: &mut Self::Context) -> Self::Result {
        let Some(client) = self.clients.get_mut(&msg.id) else {
            debug!("[Matchmaking] Match request from unknown client {}", msg.id);
            return;
        };
        client.status = ClientStatus::FindingMatch;
        self.request_match(msg.id);
    }
}

impl Handler<Disconnect> for MatchmakingServer {
    type Result = ();

    /// Handles a client disconnection: clears its queue slot and registry
    /// entry. Games it belongs to are left untouched.
    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        self.queue.remove(&msg.id);
        if let Some(client) = self.clients.remove(&msg.id) {
            // Best-effort farewell. The socket is usually already gone, and a
            // failed delivery is not an error.
            client.addr.do_send(OutboundMessage::Disconnected);
            debug!("[Matchmaking] Client {} disconnected", msg.id);
        }
    }
}

impl Handler<GetState> for MatchmakingServer {
    type Result = MessageResult<GetState>;

    fn handle(&mut self, _msg: GetState, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(MatchmakingState {
            clients: self
                .clients
                .iter()
                .map(|(id, client)| (id.clone(), client.status))
                .collect(),
            queue: self.queue.iter().cloned().collect(),
            games: self.games.iter().map(|(_, game)| game.clone()).collect(),
        })
    }
}
