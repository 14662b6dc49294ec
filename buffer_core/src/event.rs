//! Buffer change events

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of event kinds a buffer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Document opened
    Open,
    /// Content handed off for persistence
    Save,
    /// Line inserted
    Insert,
    /// Line removed
    Remove,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Open => "open",
            EventKind::Save => "save",
            EventKind::Insert => "insert",
            EventKind::Remove => "remove",
        };
        write!(f, "{}", name)
    }
}

/// A change notification emitted by the buffer
///
/// Each variant carries its own strongly typed payload, so listeners never
/// inspect an untyped data bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum BufferEvent {
    /// The buffer was opened under a document name
    ///
    /// Opening never implies loading; it is a setup hook for listeners.
    Open {
        /// Document name supplied at buffer construction
        name: String,
    },
    /// The full content was handed off for persistence
    Save {
        /// Joined content at save time
        content: String,
    },
    /// A line was inserted
    Insert {
        /// Zero-based insertion index
        line_number: usize,
        /// The inserted text
        text: String,
    },
    /// A line was removed
    Remove {
        /// Zero-based index the line occupied
        line_number: usize,
        /// The removed text
        text: String,
    },
}

impl BufferEvent {
    /// Returns the kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            BufferEvent::Open { .. } => EventKind::Open,
            BufferEvent::Save { .. } => EventKind::Save,
            BufferEvent::Insert { .. } => EventKind::Insert,
            BufferEvent::Remove { .. } => EventKind::Remove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::Open.to_string(), "open");
        assert_eq!(EventKind::Save.to_string(), "save");
        assert_eq!(EventKind::Insert.to_string(), "insert");
        assert_eq!(EventKind::Remove.to_string(), "remove");
    }

    #[test]
    fn test_event_kind_accessor() {
        let event = BufferEvent::Insert {
            line_number: 0,
            text: "hello".to_string(),
        };
        assert_eq!(event.kind(), EventKind::Insert);

        let event = BufferEvent::Open {
            name: "notes.txt".to_string(),
        };
        assert_eq!(event.kind(), EventKind::Open);
    }

    #[test]
    fn test_insert_event_json_shape() {
        let event = BufferEvent::Insert {
            line_number: 3,
            text: "hello".to_string(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "insert");
        assert_eq!(value["line_number"], 3);
        assert_eq!(value["text"], "hello");
    }

    #[test]
    fn test_save_event_round_trips() {
        let event = BufferEvent::Save {
            content: "a\nb".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: BufferEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
