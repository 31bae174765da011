//! Registry errors
//!
//! Every error is a synchronous rejection of the current call. State is
//! left unchanged on failure, with one documented exception: a
//! collaborator-level transfer failure after the claim latch is set
//! surfaces as [`RegistryError::TransferFailed`] and is NOT rolled back.

use stipend_core::{Amount, ApplicationId, Principal};
use stipend_custody::CustodyError;
use thiserror::Error;

/// Errors that can occur in registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Caller does not hold the reviewer role")]
    Unauthorized,

    #[error("No application with id {0}")]
    NotFound(ApplicationId),

    #[error("Application {0} has not been verified")]
    NotVerified(ApplicationId),

    #[error("Reviewer {reviewer} already signed application {id}")]
    DuplicateApproval {
        id: ApplicationId,
        reviewer: Principal,
    },

    #[error("Caller is not the applicant of application {0}")]
    NotApplicant(ApplicationId),

    #[error("Application {0} has not reached the approval quorum")]
    NotApproved(ApplicationId),

    #[error("Application {0} was already claimed")]
    AlreadyClaimed(ApplicationId),

    #[error("Insufficient pool balance: needed {needed}, available {available}")]
    InsufficientFunds { needed: Amount, available: Amount },

    /// Transfer failed after the claim latch was set. Fatal: the
    /// application stays claimed and must not be retried as a fresh claim.
    #[error("Custody transfer failed after claim was latched for application {id}: {source}")]
    TransferFailed {
        id: ApplicationId,
        #[source]
        source: CustodyError,
    },
}
