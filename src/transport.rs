//! Transport seam between the client and the service.
//!
//! The client shapes every request into an [`Endpoint`] plus a JSON body and
//! hands it to a [`Transport`]. How the body reaches the service (an HTTP POST
//! with `Content-Type: application/json` to the address the service
//! advertises) is up to the implementor.
//!
//! [`RecordingTransport`] keeps requests in memory. It is used by the tests and
//! demos, and is useful to inspect payloads without a running service.

mod recording;

pub use recording::{RecordedRequest, RecordingTransport};

use std::fmt::{Display, Formatter};

/// Endpoints of the service this crate talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Registers the game metadata.
    GameMetadata,
    /// Registers an event without handlers.
    RegisterGameEvent,
    /// Registers an event together with its handlers.
    BindGameEvent,
    /// Sends an event value (and optional frame data).
    GameEvent,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::GameMetadata => "/game_metadata",
            Endpoint::RegisterGameEvent => "/register_game_event",
            Endpoint::BindGameEvent => "/bind_game_event",
            Endpoint::GameEvent => "/game_event",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Delivers request bodies to the service. Calls may come from any thread.
pub trait Transport: Send + Sync {
    /// Posts `body` to `endpoint`. Any non-success answer from the service is an error.
    fn post(&self, endpoint: Endpoint, body: &serde_json::Value) -> anyhow::Result<()>;
}
