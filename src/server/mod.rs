// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Matchmaking logic (client registry, wait queue, pairing)

pub mod state;
pub mod router;
pub mod matchmaking;
