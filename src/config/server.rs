/// Server configuration.
use log::warn;

/// Port the server listens on when the `PORT` environment variable is unset
/// or unparsable.
pub const DEFAULT_PORT: u16 = 8999;

/// Resolve the listen port from the `PORT` environment variable.
pub fn port() -> u16 {
    match std::env::var("PORT") {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!(
                "[Server] Ignoring unparsable PORT value '{}', using {}",
                value, DEFAULT_PORT
            );
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}
