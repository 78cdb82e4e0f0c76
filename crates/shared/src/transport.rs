//! Transport adapters handed through to the client library.
//!
//! The integration never calls these itself. They are supplied by the caller
//! and forwarded in [`StartSettings`](crate::StartSettings) so the client
//! library can open its socket or fall back to HTTP.

use async_trait::async_trait;

use crate::error::TransportError;

/// Socket client used for the real-time channel.
pub trait SocketTransport {
    /// Open a connection. `None` means the page origin.
    fn open(&self, url: Option<&str>) -> Result<(), TransportError>;
}

/// HTTP helper, or an ajax override that replaces it.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post(
        &self,
        url: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;
}
