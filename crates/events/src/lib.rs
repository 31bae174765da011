//! Stipend Events - Lifecycle audit trail
//!
//! The registry emits an ordered, append-only log of lifecycle events
//! through the [`EventSink`] trait. Recording is best-effort: a sink must
//! never fail the operation that triggered the event.
//!
//! Two sinks ship with this crate:
//! - [`MemorySink`] - in-memory buffer, used by tests and introspection
//! - [`JsonlSink`] - date-rotated JSONL files, the durable audit trail
//!
//! [`EventReader`] reads a JSONL trail back in recorded order.

pub mod error;
pub mod event;
pub mod reader;
pub mod sink;

pub use error::EventError;
pub use event::{LifecycleEvent, RecordedEvent};
pub use reader::EventReader;
pub use sink::{EventSink, JsonlSink, MemorySink};
