//! Stipend RPC - CLI orchestrator
//!
//! Wires the registry together with its collaborators (in-memory role
//! gate, custodial pool, JSONL event trail) and persists state across
//! invocations as a JSON snapshot under the data directory.

pub mod commands;
pub mod context;

pub use context::AppContext;
