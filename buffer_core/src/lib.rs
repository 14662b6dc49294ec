//! # Buffer Core
//!
//! Observable line buffer shared by the CLI driver and the listener crates.
//!
//! ## Philosophy
//!
//! - **Synchronous**: every mutation notifies all listeners before returning
//! - **Ordered fan-out**: listeners are notified in attach order
//! - **Validating**: out-of-range indices fail without mutating or notifying
//! - **Mechanism over policy**: the buffer emits events; listeners decide what
//!   persistence, logging, or display mean
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer: the subject, owning lines and the listener registry
//! - BufferEvent: a tagged union of change notifications
//! - BufferListener: the single-capability reaction trait
//! - ListenerId: handle returned by attach, used to detach

pub mod buffer;
pub mod error;
pub mod event;
pub mod listener;

pub use buffer::TextBuffer;
pub use error::{BufferError, BufferResult};
pub use event::{BufferEvent, EventKind};
pub use listener::{BufferListener, ListenerId};
