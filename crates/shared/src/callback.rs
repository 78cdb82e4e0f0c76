//! Single-slot registration callback.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::EwdEvent;

/// Called with `(success, event)` on every connectivity event.
pub type RegistrationCallback = Rc<dyn Fn(bool, EwdEvent)>;

/// Holds at most one [`RegistrationCallback`]. Setting a new one replaces the old.
#[derive(Default)]
pub struct CallbackSlot {
    current: RefCell<Option<RegistrationCallback>>,
}

impl CallbackSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, returning whatever it replaced.
    pub fn replace(&self, callback: RegistrationCallback) -> Option<RegistrationCallback> {
        self.current.borrow_mut().replace(callback)
    }

    pub fn clear(&self) -> Option<RegistrationCallback> {
        self.current.borrow_mut().take()
    }

    pub fn is_set(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Forward `event` to the current callback, if any.
    ///
    /// The borrow is released before the callback runs so it may replace itself.
    pub fn notify(&self, event: EwdEvent) -> bool {
        let callback = self.current.borrow().clone();
        match callback {
            Some(callback) => {
                callback(event.is_success(), event);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("set", &self.is_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Seen = Rc<RefCell<Vec<(bool, EwdEvent)>>>;

    fn recorder(seen: &Seen) -> RegistrationCallback {
        let seen = seen.clone();
        Rc::new(move |ok: bool, event: EwdEvent| seen.borrow_mut().push((ok, event)))
    }

    #[test]
    fn empty_slot_does_nothing() {
        let slot = CallbackSlot::new();
        assert!(!slot.notify(EwdEvent::Registered));
    }

    #[test]
    fn second_callback_replaces_first() {
        let slot = CallbackSlot::new();
        let first: Seen = Default::default();
        let second: Seen = Default::default();

        assert!(slot.replace(recorder(&first)).is_none());
        slot.notify(EwdEvent::Registered);

        assert!(slot.replace(recorder(&second)).is_some());
        slot.notify(EwdEvent::Disconnected);

        assert_eq!(*first.borrow(), vec![(true, EwdEvent::Registered)]);
        assert_eq!(*second.borrow(), vec![(false, EwdEvent::Disconnected)]);
    }

    #[test]
    fn cleared_slot_stops_notifying() {
        let slot = CallbackSlot::new();
        let seen: Seen = Default::default();
        slot.replace(recorder(&seen));
        assert!(slot.clear().is_some());

        slot.notify(EwdEvent::ReRegistered);
        assert!(seen.borrow().is_empty());
        assert!(!slot.is_set());
    }

    #[test]
    fn callback_may_replace_itself() {
        let slot = Rc::new(CallbackSlot::new());
        let seen: Seen = Default::default();

        let slot_inner = slot.clone();
        let next = recorder(&seen);
        slot.replace(Rc::new(move |_: bool, _: EwdEvent| {
            slot_inner.replace(next.clone());
        }));

        slot.notify(EwdEvent::Registered);
        slot.notify(EwdEvent::ReRegistered);
        assert_eq!(*seen.borrow(), vec![(true, EwdEvent::ReRegistered)]);
    }
}
