//! # File Persist
//!
//! Persistence listeners for the observable buffer.
//!
//! ## Philosophy
//!
//! The buffer never touches the filesystem. These listeners react to `open`
//! and `save` events, and I/O failures stay on the listener's own state
//! instead of crossing back into the subject: the notification fan-out must
//! reach every listener, so owners inspect `last_error` after the pass.

use buffer_core::{BufferEvent, BufferListener};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence error
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation targeted
        path: PathBuf,
        /// The failing operation
        source: io::Error,
    },
}

/// Listener that persists the buffer to a file
///
/// `open` creates (or truncates) the destination as setup; `save` overwrites
/// it with the exact content string, no trailing newline added. Insert and
/// remove events are ignored; the full content arrives with `save`.
pub struct FileSaver {
    path: PathBuf,
    last_error: Option<PersistError>,
}

impl FileSaver {
    /// Creates a saver targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_error: None,
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last recorded failure, if any
    pub fn last_error(&self) -> Option<&PersistError> {
        self.last_error.as_ref()
    }

    /// Takes the recorded failure, clearing it
    pub fn take_error(&mut self) -> Option<PersistError> {
        self.last_error.take()
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(source) = result {
            self.last_error = Some(PersistError::Io {
                path: self.path.clone(),
                source,
            });
        }
    }
}

impl BufferListener for FileSaver {
    fn update(&mut self, event: &BufferEvent) {
        match event {
            BufferEvent::Open { .. } => {
                let result = fs::File::create(&self.path).map(|_| ());
                self.record(result);
            }
            BufferEvent::Save { content } => {
                let result = fs::write(&self.path, content);
                self.record(result);
            }
            BufferEvent::Insert { .. } | BufferEvent::Remove { .. } => {}
        }
    }
}

/// Listener that reads the persisted file back after every save
///
/// Attached after a `FileSaver` for the same path, it observes what actually
/// reached the disk. With echo enabled the content is also printed to stdout.
pub struct SavedContentReader {
    path: PathBuf,
    echo: bool,
    last_read: Option<String>,
    last_error: Option<PersistError>,
}

impl SavedContentReader {
    /// Creates a reader for `path` with echo disabled
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            echo: false,
            last_read: None,
            last_error: None,
        }
    }

    /// Sets whether read-back content is printed to stdout
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Content read back after the most recent save
    pub fn last_read(&self) -> Option<&str> {
        self.last_read.as_deref()
    }

    /// Last recorded failure, if any
    pub fn last_error(&self) -> Option<&PersistError> {
        self.last_error.as_ref()
    }
}

impl BufferListener for SavedContentReader {
    fn update(&mut self, event: &BufferEvent) {
        if let BufferEvent::Save { .. } = event {
            match fs::read_to_string(&self.path) {
                Ok(content) => {
                    if self.echo {
                        println!("contents of {}:", self.path.display());
                        println!("{}", content);
                    }
                    self.last_read = Some(content);
                    self.last_error = None;
                }
                Err(source) => {
                    self.last_error = Some(PersistError::Io {
                        path: self.path.clone(),
                        source,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buffer_core::TextBuffer;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut saver = FileSaver::new(&path);
        saver.update(&BufferEvent::Open {
            name: "notes.txt".to_string(),
        });

        assert!(saver.last_error().is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_save_writes_exact_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut saver = FileSaver::new(&path);
        saver.update(&BufferEvent::Save {
            content: "a\nb\nc".to_string(),
        });

        assert!(saver.last_error().is_none());
        // joined with single newlines, no trailing newline
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc");
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "old content, much longer than the new one").unwrap();

        let mut saver = FileSaver::new(&path);
        saver.update(&BufferEvent::Save {
            content: "new".to_string(),
        });

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_saver_ignores_line_events() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let mut saver = FileSaver::new(&path);
        saver.update(&BufferEvent::Insert {
            line_number: 0,
            text: "x".to_string(),
        });
        saver.update(&BufferEvent::Remove {
            line_number: 0,
            text: "x".to_string(),
        });

        assert!(!path.exists());
        assert!(saver.last_error().is_none());
    }

    #[test]
    fn test_unwritable_target_records_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("notes.txt");

        let mut saver = FileSaver::new(&path);
        saver.update(&BufferEvent::Save {
            content: "lost".to_string(),
        });

        assert!(saver.last_error().is_some());
        assert!(saver.take_error().is_some());
        assert!(saver.last_error().is_none());
    }

    #[test]
    fn test_reader_only_reacts_to_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "content").unwrap();

        let mut reader = SavedContentReader::new(&path);
        reader.update(&BufferEvent::Open {
            name: "notes.txt".to_string(),
        });
        reader.update(&BufferEvent::Insert {
            line_number: 0,
            text: "x".to_string(),
        });

        assert!(reader.last_read().is_none());
    }

    #[test]
    fn test_round_trip_through_buffer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");

        let saver = Rc::new(RefCell::new(FileSaver::new(&path)));
        let reader = Rc::new(RefCell::new(SavedContentReader::new(&path)));

        let mut buffer = TextBuffer::new(path.display().to_string());
        buffer.attach(Box::new(Rc::clone(&saver)));
        buffer.attach(Box::new(Rc::clone(&reader)));

        buffer.open();
        buffer.insert_line(0, "first").unwrap();
        buffer.insert_line(1, "second").unwrap();
        buffer.save();

        assert!(saver.borrow().last_error().is_none());
        assert_eq!(reader.borrow().last_read(), Some("first\nsecond"));
        assert_eq!(reader.borrow().last_read().unwrap(), buffer.content());
    }

    #[test]
    fn test_reader_missing_file_records_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never_written.txt");

        let mut reader = SavedContentReader::new(&path);
        reader.update(&BufferEvent::Save {
            content: "x".to_string(),
        });

        assert!(reader.last_read().is_none());
        assert!(reader.last_error().is_some());
    }
}
