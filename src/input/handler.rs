use crate::{
    input::events::ControllerEvent,
    prelude::{Arc, HashMap},
};
use crossbeam_channel::{Receiver, Sender};
use std::collections::VecDeque;

/// Event listener callback type
pub type EventCallback = Arc<dyn Fn(&ControllerEvent) + Send + Sync>;

/// Predicate deciding which events a channel subscriber receives
pub type SubscriberFilter = fn(&ControllerEvent) -> bool;

struct Subscriber {
    sender: Sender<ControllerEvent>,
    filter: SubscriberFilter,
}

/// Event management system for the controller.
///
/// Events are delivered two ways: immediately to channel subscribers, and
/// through a queue that [`process_events`](Self::process_events) drains into
/// registered callbacks.
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event kind
    listeners: HashMap<String, Vec<EventCallback>>,
    /// Event queue for processing
    event_queue: VecDeque<ControllerEvent>,
    subscribers: Vec<Subscriber>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener; `"*"` listens to every kind
    pub fn on<F>(&mut self, event_kind: &str, callback: F)
    where
        F: Fn(&ControllerEvent) + Send + Sync + 'static,
    {
        self.listeners
            .entry(event_kind.to_string())
            .or_default()
            .push(Arc::new(callback));
    }

    /// Remove every listener for a kind
    pub fn off(&mut self, event_kind: &str) {
        self.listeners.remove(event_kind);
    }

    /// Open a channel receiving every event emitted from now on
    pub fn subscribe(&mut self) -> Receiver<ControllerEvent> {
        self.subscribe_filtered(|_| true)
    }

    /// Open a channel receiving only events accepted by `filter`
    pub fn subscribe_filtered(&mut self, filter: SubscriberFilter) -> Receiver<ControllerEvent> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.subscribers.push(Subscriber { sender, filter });
        receiver
    }

    /// Emit an event to subscribers, queueing it only if a callback listens
    /// for its kind
    pub fn emit(&mut self, event: ControllerEvent) {
        log::trace!("emit {:?}", event);
        // Dropped receivers disconnect their subscription
        self.subscribers.retain(|subscriber| {
            !(subscriber.filter)(&event) || subscriber.sender.send(event.clone()).is_ok()
        });
        if self.has_listeners(event.kind()) {
            self.event_queue.push_back(event);
        }
    }

    fn has_listeners(&self, event_kind: &str) -> bool {
        [event_kind, "*"].iter().any(|kind| {
            self.listeners
                .get(*kind)
                .map_or(false, |callbacks| !callbacks.is_empty())
        })
    }

    /// Drain the queue, pairing each event with the callbacks listening to it.
    ///
    /// Lets the caller release any lock around the manager before running
    /// callbacks that may re-enter it.
    pub fn take_dispatch(&mut self) -> Vec<(ControllerEvent, Vec<EventCallback>)> {
        self.event_queue
            .drain(..)
            .map(|event| {
                let callbacks = self
                    .listeners
                    .get(event.kind())
                    .into_iter()
                    .chain(self.listeners.get("*"))
                    .flatten()
                    .cloned()
                    .collect();
                (event, callbacks)
            })
            .collect()
    }

    /// Process all queued events
    pub fn process_events(&mut self) -> Vec<ControllerEvent> {
        dispatch(self.take_dispatch())
    }

    /// Discard queued events without notifying listeners
    pub fn clear_events(&mut self) {
        self.event_queue.clear();
    }

    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// Run callbacks produced by [`EventManager::take_dispatch`]
pub fn dispatch(batch: Vec<(ControllerEvent, Vec<EventCallback>)>) -> Vec<ControllerEvent> {
    batch
        .into_iter()
        .map(|(event, callbacks)| {
            for callback in &callbacks {
                callback(&event);
            }
            event
        })
        .collect()
}
