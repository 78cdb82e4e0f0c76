//! Provider component exposing an [`Ewd`] handle and its connectivity.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use ewd_shared::{Connectivity, EwdEvent, ProviderState};

use crate::ewd::Ewd;

/// What the provider injects into its child.
#[derive(Debug, Clone, PartialEq)]
pub struct EwdChild {
    pub ewd: Ewd,
    pub state: ProviderState,
}

/// Context installed by [`EwdProvider`] for descendants that prefer
/// [`use_ewd`](crate::use_ewd) over explicit props.
///
/// Connectivity is read-only here; only the provider's listeners change it.
#[derive(Clone)]
pub struct EwdContext {
    pub ewd: Ewd,
    pub connectivity: ReadSignal<Connectivity>,
}

/// Wraps the app, mirrors the client's connectivity events into local state
/// and hands both the handle and the state to `render`.
///
/// On first render the provider subscribes to all three events and only then
/// starts the client, so a registration that fires synchronously from
/// `start` is still observed. The handle seen on first render is kept for the
/// provider's lifetime; later `ewd` props are ignored.
///
/// ```rust,ignore
/// rsx! {
///     EwdProvider {
///         ewd: ewd.clone(),
///         render: move |child: EwdChild| rsx! {
///             App { ewd: child.ewd, state: child.state }
///         }
///     }
/// }
/// ```
#[component]
pub fn EwdProvider(ewd: Ewd, render: Callback<EwdChild, Element>) -> Element {
    let connectivity = use_signal(Connectivity::default);

    let (handle, mounted) = use_hook(move || {
        let mounted = Rc::new(Cell::new(true));
        for event in EwdEvent::ALL {
            let mounted = mounted.clone();
            ewd.subscribe(
                event,
                Rc::new(move |fired: EwdEvent| {
                    // The client keeps its listeners after the provider is gone.
                    if !mounted.get() {
                        crate::log_debug!("{} after provider unmounted", fired);
                        return;
                    }
                    let next = Connectivity::from(fired);
                    crate::log_debug!("{}: registered = {}", fired, next.is_registered());
                    let mut connectivity = connectivity;
                    connectivity.set(next);
                }),
            );
        }

        if ewd.log_enabled() {
            crate::log_info!("starting EWD client for '{}'", ewd.application());
        }
        ewd.start();
        (ewd, mounted)
    });

    use_drop(move || mounted.set(false));

    use_context_provider(|| EwdContext {
        ewd: handle.clone(),
        connectivity: connectivity.into(),
    });

    let state = ProviderState::from(*connectivity.read());
    render.call(EwdChild { ewd: handle, state })
}
