//! Stipend Roles - who may do what
//!
//! The registry never owns role assignments; it consults an injected
//! [`RoleGate`] before gated operations. Production embedders back the
//! gate with their own directory; tests and the CLI use [`MemoryRoleGate`].

pub mod gate;
pub mod memory;

pub use gate::RoleGate;
pub use memory::MemoryRoleGate;
