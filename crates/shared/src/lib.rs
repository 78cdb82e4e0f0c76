//! Shared types for the EWD client integration.
//!
//! Nothing in here depends on a UI framework: event names, the connectivity
//! state machine, start settings, transport adapters and the seam to the
//! external client library.

pub mod callback;
pub mod client;
pub mod connectivity;
pub mod error;
pub mod event;
pub mod settings;
pub mod transport;

pub use callback::{CallbackSlot, RegistrationCallback};
pub use client::{EwdClient, Listener};
pub use connectivity::{Connectivity, ProviderState};
pub use error::{ConfigError, TransportError};
pub use event::EwdEvent;
pub use settings::{EwdParams, StartSettings};
pub use transport::{HttpTransport, SocketTransport};
