use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::messages::SessionAddr;
use super::types::{ClientId, ClientStatus, MatchmakingError};

/// One connected participant: lifecycle status plus the handle used to push
/// notifications back to its session.
pub struct Client {
    pub status: ClientStatus,
    pub addr: SessionAddr,
}

/// Owner of every live client record, keyed by connection identifier.
///
/// Records are created on connect and deleted on pairing or disconnect;
/// there is no terminal state kept around.
pub struct ClientRegistry {
    clients: HashMap<ClientId, Client>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Store a new record with status `Connected` and hand back a borrow of
    /// it. A reused identifier is rejected and the existing record is left
    /// untouched.
    pub fn register(&mut self, id: ClientId, addr: SessionAddr) -> Result<&Client, MatchmakingError> {
        match self.clients.entry(id) {
            Entry::Occupied(entry) => Err(MatchmakingError::DuplicateClient(entry.key().clone())),
            Entry::Vacant(entry) => Ok(entry.insert(Client {
                status: ClientStatus::Connected,
                addr,
            })),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Client> {
        self.clients.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.clients.contains_key(id)
    }

    /// Delete a record, handing it back to the caller. Removing an absent id
    /// is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<Client> {
        self.clients.remove(id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ClientId, &Client)> {
        self.clients.iter()
    }
}
