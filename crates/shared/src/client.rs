//! Seam to the external EWD client library.

use std::rc::Rc;

use crate::event::EwdEvent;
use crate::settings::StartSettings;

/// Handler invoked with the event that fired.
pub type Listener = Rc<dyn Fn(EwdEvent)>;

/// The surface of the real-time client that this crate drives.
///
/// Transport, reconnects and session handling all live behind this trait.
pub trait EwdClient {
    /// Subscribe `listener` to `event`. Multiple listeners per event are allowed.
    fn on(&self, event: EwdEvent, listener: Listener);

    /// Begin connecting with the given settings.
    fn start(&self, settings: &StartSettings);
}
