//! Editor runtime: wires the buffer to its listeners and drives ingestion

use buffer_core::{BufferError, TextBuffer};
use event_log::{ConsoleSink, EventLogger};
use file_persist::{FileSaver, PersistError, SavedContentReader};
use std::cell::RefCell;
use std::io::BufRead;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// Input line that terminates ingestion without being inserted
pub const INPUT_SENTINEL: &str = "EOF";

/// Runtime error
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Buffer rejected a mutation
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Persisting the buffer failed
    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Persistence target; also the document name announced on open
    pub file: PathBuf,
    /// Scripted input text, used instead of stdin when set
    pub script: Option<String>,
    /// Suppress the console event logger
    pub quiet: bool,
    /// Echo the persisted content to stdout after save
    pub echo_saved: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("scratch.txt"),
            script: None,
            quiet: false,
            echo_saved: true,
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines ingested before the sentinel
    pub lines_inserted: usize,
    /// Where the content was persisted
    pub path: PathBuf,
}

/// Drives one open, ingest, save cycle over an observable buffer
///
/// Listeners attach in a fixed order because fan-out order is observable:
/// the event logger first, then the file saver, then the read-back listener,
/// which must see the file only after the saver has written it.
pub struct EditorRuntime {
    config: RuntimeConfig,
    buffer: TextBuffer,
    saver: Rc<RefCell<FileSaver>>,
    reader: Rc<RefCell<SavedContentReader>>,
}

impl EditorRuntime {
    /// Creates a runtime with its listeners attached
    pub fn new(config: RuntimeConfig) -> Self {
        let mut buffer = TextBuffer::new(config.file.display().to_string());

        if !config.quiet {
            buffer.attach(Box::new(EventLogger::new(ConsoleSink)));
        }

        let saver = Rc::new(RefCell::new(FileSaver::new(config.file.clone())));
        buffer.attach(Box::new(Rc::clone(&saver)));

        let reader = Rc::new(RefCell::new(
            SavedContentReader::new(config.file.clone()).with_echo(config.echo_saved),
        ));
        buffer.attach(Box::new(Rc::clone(&reader)));

        Self {
            config,
            buffer,
            saver,
            reader,
        }
    }

    /// The buffer under edit
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Content read back from the file after the last save
    pub fn saved_content(&self) -> Option<String> {
        self.reader.borrow().last_read().map(|s| s.to_string())
    }

    /// Runs one full cycle: open, ingest lines from `input` until the
    /// sentinel (or end of stream), then save
    ///
    /// A persistence failure recorded by the saver during `open` or `save`
    /// is surfaced as an error; losing the save must not pass silently.
    pub fn run(&mut self, input: impl BufRead) -> Result<RunSummary, RuntimeError> {
        self.buffer.open();
        self.check_persistence()?;

        let start = self.buffer.line_count();
        let mut next_line = start;

        for line in input.lines() {
            let line = line?;
            if line == INPUT_SENTINEL {
                break;
            }
            self.buffer.insert_line(next_line, line)?;
            next_line += 1;
        }

        self.buffer.save();
        self.check_persistence()?;

        Ok(RunSummary {
            lines_inserted: next_line - start,
            path: self.config.file.clone(),
        })
    }

    fn check_persistence(&self) -> Result<(), RuntimeError> {
        match self.saver.borrow_mut().take_error() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
