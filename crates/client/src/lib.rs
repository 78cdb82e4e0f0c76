//! Dioxus bindings for the EWD real-time client.
//!
//! Configure a client once with [`Ewd::configure`], then wrap the app in
//! [`EwdProvider`]. The provider starts the client and tells its child
//! whether the client is registered:
//!
//! ```rust,ignore
//! let ewd = Ewd::configure(Rc::new(MyClient::new()), EwdParams::new("demo"));
//!
//! rsx! {
//!     EwdProvider {
//!         ewd,
//!         render: move |child: EwdChild| rsx! {
//!             if child.state.registered {
//!                 Dashboard {}
//!             } else {
//!                 "Connecting..."
//!             }
//!         }
//!     }
//! }
//! ```

#![allow(non_snake_case)]

pub mod logging;

mod ewd;
mod hooks;
mod provider;

#[cfg(test)]
mod testing;

pub use ewd::Ewd;
pub use hooks::{try_use_ewd, use_ewd, use_ewd_state};
pub use provider::{EwdChild, EwdContext, EwdProvider};

pub use ewd_shared::{
    Connectivity, EwdClient, EwdEvent, EwdParams, HttpTransport, Listener, ProviderState,
    SocketTransport, StartSettings, TransportError,
};
