/// Matchmaking module: tracks connected clients, queues match requests, and
/// pairs clients into two-player games.

pub mod server;
pub mod session;
pub mod messages;
pub mod types;
pub mod queue;
pub mod registry;
pub mod games;
