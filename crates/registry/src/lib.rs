//! Stipend Registry - Application lifecycle state machine
//!
//! This is the HEART of Stipend. Applicants submit claims, accredited
//! reviewers verify and sign them, and once a quorum of distinct reviewer
//! signatures is reached the applicant may claim the amount from the
//! shared custodial pool.
//!
//! # Lifecycle
//! ```text
//! Submitted --verify--> Verified --sign(quorum)--> Approved --claim--> Claimed
//! ```
//!
//! # Guarantees
//! - Ids are sequential from 1 and never reused
//! - A reviewer signs a given application at most once
//! - `Approved` latches exactly when the quorum is first reached
//! - A claim pays out at most once, only to the original applicant
//!
//! All operations run to completion with no interleaving; the registry has
//! a single owner (`&mut self` operations). Embedders that share it across
//! threads wrap it in one mutex, which reproduces the fully serialized
//! reference semantics.

pub mod application;
pub mod approvals;
pub mod error;
pub mod registry;

pub use application::{Application, ApplicationStage};
pub use approvals::ApprovalTable;
pub use error::RegistryError;
pub use registry::{Registry, RegistrySnapshot};
