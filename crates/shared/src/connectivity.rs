//! Connectivity state machine driven by [`EwdEvent`]s.

use crate::event::EwdEvent;

/// Whether the client has completed its handshake.
///
/// There is no terminal state; a handle may cycle between the two forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Connectivity {
    #[default]
    Unregistered,
    Registered,
}

impl Connectivity {
    /// State after observing `event`. Only the latest event matters.
    pub fn apply(self, event: EwdEvent) -> Self {
        Self::from(event)
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Connectivity::Registered)
    }
}

impl From<EwdEvent> for Connectivity {
    fn from(event: EwdEvent) -> Self {
        match event {
            EwdEvent::Registered | EwdEvent::ReRegistered => Connectivity::Registered,
            EwdEvent::Disconnected => Connectivity::Unregistered,
        }
    }
}

/// State record handed to the provider's child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderState {
    pub registered: bool,
}

impl From<Connectivity> for ProviderState {
    fn from(connectivity: Connectivity) -> Self {
        Self {
            registered: connectivity.is_registered(),
        }
    }
}
