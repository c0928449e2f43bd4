use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::SketchEvent;

/// FIFO of pending signals, drained synchronously into a single handler.
///
/// Emitting only needs `&self` so read-only code paths can raise signals too.
#[derive(Default)]
pub struct EventBus {
    pending: RefCell<VecDeque<SketchEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("pending", &format!("<{} events>", self.pending.borrow().len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next dispatch
    pub fn emit(&self, event: SketchEvent) {
        self.pending.borrow_mut().push_back(event);
    }

    /// Remove and return the oldest pending event
    pub fn pop(&self) -> Option<SketchEvent> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}
