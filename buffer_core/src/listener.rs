//! Listener capability and attach handles

use crate::event::BufferEvent;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Reaction capability for buffer events
///
/// Implementors are notified synchronously, in attach order, for every event
/// the buffer emits. There is no return value and no error channel back to
/// the buffer; a listener that cannot act records the failure on its own
/// state for its owner to inspect.
pub trait BufferListener {
    /// Reacts to a single buffer event
    fn update(&mut self, event: &BufferEvent);
}

/// A caller can retain a handle to a listener it attaches by wrapping it in
/// `Rc<RefCell<_>>`: the buffer notifies through the shared cell while the
/// caller keeps a clone for inspection after the fan-out.
impl<T: BufferListener> BufferListener for Rc<RefCell<T>> {
    fn update(&mut self, event: &BufferEvent) {
        self.borrow_mut().update(event);
    }
}

/// Unique identifier for an attached listener
///
/// Returned by `TextBuffer::attach`; detaching removes exactly the listener
/// registered under this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(Uuid);

impl ListenerId {
    /// Creates a new random listener ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a listener ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}
