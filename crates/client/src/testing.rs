//! Recording stand-in for the EWD client library.

use std::cell::RefCell;

use ewd_shared::{EwdClient, EwdEvent, Listener, StartSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    On(EwdEvent),
    /// Address of the settings passed to `start`.
    Start(usize),
}

#[derive(Default)]
pub struct MockClient {
    calls: RefCell<Vec<Call>>,
    listeners: RefCell<Vec<(EwdEvent, Listener)>>,
    register_on_start: bool,
}

impl MockClient {
    /// A client that fires `Registered` synchronously from inside `start`.
    pub fn registering_on_start() -> Self {
        Self {
            register_on_start: true,
            ..Self::default()
        }
    }

    /// Fire `event` at every listener subscribed to it.
    pub fn emit(&self, event: EwdEvent) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(subscribed, _)| *subscribed == event)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn starts(&self) -> Vec<usize> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Start(addr) => Some(*addr),
                Call::On(_) => None,
            })
            .collect()
    }

    pub fn start_count(&self) -> usize {
        self.starts().len()
    }

    pub fn listener_count(&self, event: EwdEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(subscribed, _)| *subscribed == event)
            .count()
    }
}

impl EwdClient for MockClient {
    fn on(&self, event: EwdEvent, listener: Listener) {
        self.calls.borrow_mut().push(Call::On(event));
        self.listeners.borrow_mut().push((event, listener));
    }

    fn start(&self, settings: &StartSettings) {
        self.calls
            .borrow_mut()
            .push(Call::Start(settings as *const StartSettings as usize));
        if self.register_on_start {
            self.emit(EwdEvent::Registered);
        }
    }
}
