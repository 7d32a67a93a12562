//! Explicit handler registration, keyed by event kind.

use std::collections::HashMap;

use anyhow::Result;

use super::event::{Effect, EventKind, PageEvent};

/// Handler over page state `S`.
pub type Handler<S> = fn(&mut S, &PageEvent) -> Result<Vec<Effect>>;

pub struct EventRegistry<S> {
    handlers: HashMap<EventKind, Vec<Handler<S>>>,
}

impl<S> Default for EventRegistry<S> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<S> EventRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `handler` to `kind`. Handlers run in registration order.
    pub fn on(&mut self, kind: EventKind, handler: Handler<S>) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn is_bound(&self, kind: EventKind) -> bool {
        self.handlers.get(&kind).is_some_and(|h| !h.is_empty())
    }

    /// Runs every handler bound to the event's kind and concatenates their effects.
    pub fn dispatch(&self, state: &mut S, event: &PageEvent) -> Result<Vec<Effect>> {
        let mut effects = Vec::new();
        for handler in self.handlers.get(&event.kind()).into_iter().flatten() {
            effects.extend(handler(state, event)?);
        }
        Ok(effects)
    }
}
