//! # Event Log
//!
//! Structured logging for buffer events.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Buffer events are rendered into `LogEntry` records with typed fields;
//! sinks decide presentation.

use buffer_core::{BufferEvent, BufferListener, EventKind};
use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: String, value: String) -> Self {
        self.fields.push((key, value));
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Destination for rendered log entries
pub trait LogSink {
    /// Consumes one entry
    fn write(&mut self, entry: &LogEntry);
}

/// Sink that prints entries to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&mut self, entry: &LogEntry) {
        println!("{}", entry);
    }
}

/// Sink that retains entries in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Vec<LogEntry>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries written so far, oldest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}

impl LogSink for MemorySink {
    fn write(&mut self, entry: &LogEntry) {
        self.entries.push(entry.clone());
    }
}

/// Listener that renders every buffer event into one log entry
///
/// Each entry carries the event kind, kind-specific fields, and the full
/// JSON rendering of the payload under `data`.
pub struct EventLogger<S: LogSink> {
    sink: S,
}

impl<S: LogSink> EventLogger<S> {
    /// Creates a logger writing to `sink`
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The underlying sink
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> BufferListener for EventLogger<S> {
    fn update(&mut self, event: &BufferEvent) {
        let message = match event.kind() {
            EventKind::Open => "document opened",
            EventKind::Save => "content saved",
            EventKind::Insert => "line inserted",
            EventKind::Remove => "line removed",
        };

        let mut entry = LogEntry::new(LogLevel::Info, message.to_string())
            .with_field("event".to_string(), event.kind().to_string());

        match event {
            BufferEvent::Open { name } => {
                entry = entry.with_field("name".to_string(), name.clone());
            }
            BufferEvent::Save { content } => {
                entry = entry.with_field("bytes".to_string(), content.len().to_string());
            }
            BufferEvent::Insert { line_number, .. }
            | BufferEvent::Remove { line_number, .. } => {
                entry = entry.with_field("line".to_string(), line_number.to_string());
            }
        }

        if let Ok(data) = serde_json::to_string(event) {
            entry = entry.with_field("data".to_string(), data);
        }

        self.sink.write(&entry);
    }
}
