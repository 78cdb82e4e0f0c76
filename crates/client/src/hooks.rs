//! Hooks reading the context installed by [`EwdProvider`](crate::EwdProvider).

use dioxus::prelude::*;
use ewd_shared::ProviderState;

use crate::ewd::Ewd;
use crate::provider::EwdContext;

/// The handle of the nearest provider. Panics outside one.
pub fn use_ewd() -> Ewd {
    use_context::<EwdContext>().ewd
}

pub fn try_use_ewd() -> Option<Ewd> {
    try_use_context::<EwdContext>().map(|context| context.ewd)
}

/// Current connectivity of the nearest provider (reactive).
pub fn use_ewd_state() -> ProviderState {
    let context = use_context::<EwdContext>();
    let connectivity = *context.connectivity.read();
    ProviderState::from(connectivity)
}
