//! Lifecycle events emitted by the EWD client.

use std::fmt;

/// One of the three connectivity events the integration listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EwdEvent {
    /// Handshake with the back end completed.
    Registered,
    /// Handshake completed again after a reconnect.
    ReRegistered,
    /// The socket transport went away.
    Disconnected,
}

impl EwdEvent {
    /// All events, in the order listeners are attached.
    pub const ALL: [EwdEvent; 3] = [
        EwdEvent::Registered,
        EwdEvent::ReRegistered,
        EwdEvent::Disconnected,
    ];

    /// Event name as used by the client library.
    pub fn as_str(&self) -> &'static str {
        match self {
            EwdEvent::Registered => "ewd-registered",
            EwdEvent::ReRegistered => "ewd-reregistered",
            EwdEvent::Disconnected => "socketDisconnected",
        }
    }

    /// `true` for (re-)registration, `false` for disconnect.
    pub fn is_success(&self) -> bool {
        !matches!(self, EwdEvent::Disconnected)
    }
}

impl fmt::Display for EwdEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
