//! Configured client handle.
//!
//! [`Ewd::configure`] takes an explicitly constructed client instance,
//! derives its start settings and wires the registration callback slot to the
//! client's connectivity events. The returned [`Ewd`] is what gets passed to
//! [`EwdProvider`](crate::EwdProvider).

use std::fmt;
use std::rc::Rc;

use ewd_shared::{CallbackSlot, EwdClient, EwdEvent, EwdParams, Listener, StartSettings};

struct Inner {
    client: Rc<dyn EwdClient>,
    settings: Rc<StartSettings>,
    callback: Rc<CallbackSlot>,
}

/// Handle to one configured EWD client. Clones share the same client.
#[derive(Clone)]
pub struct Ewd {
    inner: Rc<Inner>,
}

impl Ewd {
    /// Configure `client` with `params`.
    ///
    /// Subscribes the callback dispatchers for all three connectivity events.
    /// Nothing is started and no network activity happens until [`Ewd::start`].
    pub fn configure(client: Rc<dyn EwdClient>, params: EwdParams) -> Self {
        let settings = Rc::new(params.settings());
        crate::log_debug!("configured EWD client: {:?}", settings);

        let callback = Rc::new(CallbackSlot::new());
        for event in EwdEvent::ALL {
            let slot = callback.clone();
            client.on(
                event,
                Rc::new(move |fired: EwdEvent| {
                    slot.notify(fired);
                }),
            );
        }

        Self {
            inner: Rc::new(Inner {
                client,
                settings,
                callback,
            }),
        }
    }

    /// Start the client with the derived settings.
    ///
    /// Every call reaches the client; repeated starts are its business.
    #[doc(alias = "rcStart")]
    #[doc(alias = "reactStart")]
    pub fn start(&self) {
        self.inner.client.start(&self.inner.settings);
    }

    /// Alias of [`Ewd::start`].
    pub fn rc_start(&self) {
        self.start();
    }

    /// Alias of [`Ewd::start`].
    pub fn rstart(&self) {
        self.start();
    }

    /// Alias of [`Ewd::start`].
    pub fn react_start(&self) {
        self.start();
    }

    /// Subscribe a listener on the underlying client.
    pub fn subscribe(&self, event: EwdEvent, listener: Listener) {
        self.inner.client.on(event, listener);
    }

    /// Set the registration callback, replacing any previous one.
    ///
    /// It is called with `(true, event)` on (re-)registration and
    /// `(false, event)` on disconnect.
    pub fn on_registration(&self, callback: impl Fn(bool, EwdEvent) + 'static) {
        if self.inner.callback.replace(Rc::new(callback)).is_some() {
            crate::log_debug!("replaced EWD registration callback");
        }
    }

    pub fn clear_registration_callback(&self) {
        self.inner.callback.clear();
    }

    pub fn settings(&self) -> &StartSettings {
        &self.inner.settings
    }

    pub fn application(&self) -> &str {
        &self.inner.settings.application
    }

    pub fn log_enabled(&self) -> bool {
        self.inner.settings.log
    }
}

impl PartialEq for Ewd {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Ewd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ewd")
            .field("settings", &self.inner.settings)
            .field("callback", &self.inner.callback)
            .finish()
    }
}
