//! Session lifecycle events delivered by the interceptor.

use crate::common::time::get_timestamp_millis;

/// A newly established game-session connection.
///
/// Produced by the interceptor when the client attaches to a game server;
/// consumed by the [`SyncCoordinator`](super::SyncCoordinator) in arrival
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConnected {
    /// Raw host string of the connected game server
    pub host: String,
    /// Port of the connected game server
    pub port: u16,
    /// Unix timestamp (milliseconds, UTC) of the connection
    pub connected_at: i64,
}

impl SessionConnected {
    /// Create an event stamped with the current time.
    ///
    /// # Arguments
    ///
    /// * `host` - Raw host string of the connected game server
    /// * `port` - Port of the connected game server
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connected_at: get_timestamp_millis(),
        }
    }
}
