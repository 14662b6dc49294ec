//! # CLI Editor
//!
//! Line-ingesting driver for the observable buffer: reads input lines until
//! the `EOF` sentinel, inserting each at the next sequential index, then
//! saves through the attached listeners.

pub mod runtime;

pub use runtime::{EditorRuntime, RunSummary, RuntimeConfig, RuntimeError, INPUT_SENTINEL};
