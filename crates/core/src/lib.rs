//! Stipend Core - Domain types
//!
//! This crate contains the fundamental types used across Stipend:
//! - `Amount`: Non-negative decimal wrapper for custodial quantities
//! - `Principal`: Authenticated caller identity
//! - `Role`: Named roles checked by the role gate
//! - `ApplicationId`: Sequential application identifier

pub mod amount;
pub mod principal;
pub mod role;

pub use amount::{Amount, AmountError};
pub use principal::Principal;
pub use role::Role;

/// Identifier of an application in the registry.
///
/// Assigned sequentially starting at 1; 0 is reserved and never valid.
pub type ApplicationId = u64;
