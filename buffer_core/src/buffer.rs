//! Observable text buffer

use crate::error::{BufferError, BufferResult};
use crate::event::BufferEvent;
use crate::listener::{BufferListener, ListenerId};

/// Line-oriented text buffer that notifies listeners of every change
///
/// Lines are zero-indexed and contiguous: valid indices are always the range
/// `[0, line_count())`. Every successful mutation emits exactly one event,
/// delivered synchronously to all listeners in attach order before the call
/// returns. Listeners are owned by the buffer, so neither the registry nor
/// the line sequence can change out from under a notification pass.
///
/// There are no modes and no required operation ordering; `open` and `save`
/// are notification hooks, not state transitions.
pub struct TextBuffer {
    name: String,
    lines: Vec<String>,
    listeners: Vec<(ListenerId, Box<dyn BufferListener>)>,
}

impl TextBuffer {
    /// Creates an empty buffer for the named document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Document name announced by `open`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line at `row`, if present
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// All lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of attached listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Attaches a listener; it receives every subsequent event
    ///
    /// Listeners are notified in attach order. Attaching never fails, and
    /// nothing stops a caller from attaching several listeners of the same
    /// concrete type; each attach yields a distinct id.
    pub fn attach(&mut self, listener: Box<dyn BufferListener>) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.push((id, listener));
        id
    }

    /// Detaches the listener registered under `id`, returning it
    ///
    /// Returns `None` when no such listener is attached; detaching an unknown
    /// id is not an error. A detached listener receives no further events.
    pub fn detach(&mut self, id: ListenerId) -> Option<Box<dyn BufferListener>> {
        let index = self.listeners.iter().position(|(lid, _)| *lid == id)?;
        Some(self.listeners.remove(index).1)
    }

    /// Inserts `text` at `line_number`, shifting later lines one index down
    ///
    /// Valid insertion points are `0..=line_count()`. An out-of-range index
    /// fails with `InvalidIndex` without mutating or notifying.
    pub fn insert_line(
        &mut self,
        line_number: usize,
        text: impl Into<String>,
    ) -> BufferResult<()> {
        if line_number > self.lines.len() {
            return Err(BufferError::InvalidIndex {
                line_number,
                line_count: self.lines.len(),
            });
        }

        let text = text.into();
        self.lines.insert(line_number, text.clone());
        self.notify(BufferEvent::Insert { line_number, text });
        Ok(())
    }

    /// Removes the line at `line_number`, shifting later lines one index up
    ///
    /// Returns the removed text, which is also carried by the emitted event.
    /// Valid indices are `0..line_count()`; an out-of-range index fails with
    /// `InvalidIndex` without mutating or notifying.
    pub fn remove_line(&mut self, line_number: usize) -> BufferResult<String> {
        if line_number >= self.lines.len() {
            return Err(BufferError::InvalidIndex {
                line_number,
                line_count: self.lines.len(),
            });
        }

        let text = self.lines.remove(line_number);
        self.notify(BufferEvent::Remove {
            line_number,
            text: text.clone(),
        });
        Ok(text)
    }

    /// Full content: lines joined with `\n`, no trailing newline
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Emits `Open` carrying the document name
    ///
    /// Opening never loads content; it exists so listeners can perform setup.
    pub fn open(&mut self) {
        self.notify(BufferEvent::Open {
            name: self.name.clone(),
        });
    }

    /// Emits `Save` carrying the full current content
    ///
    /// The buffer persists nothing itself; persistence belongs to listeners.
    pub fn save(&mut self) {
        self.notify(BufferEvent::Save {
            content: self.content(),
        });
    }

    fn notify(&mut self, event: BufferEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.update(&event);
        }
    }
}
