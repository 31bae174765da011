//! Application records and lifecycle stage

use serde::{Deserialize, Serialize};
use stipend_core::{Amount, ApplicationId, Principal};

/// Lifecycle stage of an application.
///
/// A tagged stage (rather than independent booleans) makes the ordering
/// guarantees structural: an application cannot be claimed without being
/// approved, nor approved without being verified, because those states
/// simply do not exist in the representation. The predicates below give
/// the cumulative view the operations check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStage {
    /// Submitted, awaiting reviewer verification
    Submitted,
    /// Verified by a reviewer, collecting signatures
    Verified,
    /// Reached the approval quorum, claimable by the applicant
    Approved,
    /// Funds were paid out; terminal
    Claimed,
    /// Reserved for an administrative rejection path; no registry
    /// operation produces this stage.
    Rejected,
}

impl ApplicationStage {
    /// Has a reviewer verified this application?
    pub fn is_verified(&self) -> bool {
        matches!(
            self,
            ApplicationStage::Verified | ApplicationStage::Approved | ApplicationStage::Claimed
        )
    }

    /// Has the approval quorum been reached?
    pub fn is_approved(&self) -> bool {
        matches!(self, ApplicationStage::Approved | ApplicationStage::Claimed)
    }

    /// Have the funds been paid out?
    pub fn is_claimed(&self) -> bool {
        matches!(self, ApplicationStage::Claimed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStage::Submitted => "submitted",
            ApplicationStage::Verified => "verified",
            ApplicationStage::Approved => "approved",
            ApplicationStage::Claimed => "claimed",
            ApplicationStage::Rejected => "rejected",
        }
    }
}

/// One allowance application.
///
/// `id`, `applicant`, `info` and `amount` are fixed at submission; only
/// `stage` and `approval_count` change afterwards, and both only move
/// forward (the stage along the lifecycle, the counter upward).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Sequential id, assigned by the registry (first application gets 1)
    pub id: ApplicationId,

    /// Who submitted it; the only principal that may claim
    pub applicant: Principal,

    /// Opaque applicant-supplied data (e.g. an identity reference)
    pub info: String,

    /// Amount to pay out on claim, in the smallest currency unit
    pub amount: Amount,

    /// Current lifecycle stage
    pub stage: ApplicationStage,

    /// Distinct reviewer signatures collected so far
    pub approval_count: u32,
}

impl Application {
    pub(crate) fn new(
        id: ApplicationId,
        applicant: Principal,
        info: String,
        amount: Amount,
    ) -> Self {
        Self {
            id,
            applicant,
            info,
            amount,
            stage: ApplicationStage::Submitted,
            approval_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_new_application_starts_unverified() {
        let app = Application::new(
            1,
            Principal::new("alice"),
            "passport:A1".to_string(),
            Amount::new(Decimal::new(100, 0)).unwrap(),
        );
        assert_eq!(app.stage, ApplicationStage::Submitted);
        assert_eq!(app.approval_count, 0);
        assert!(!app.stage.is_verified());
    }

    #[test]
    fn test_stage_predicates_are_cumulative() {
        assert!(!ApplicationStage::Submitted.is_verified());

        assert!(ApplicationStage::Verified.is_verified());
        assert!(!ApplicationStage::Verified.is_approved());

        assert!(ApplicationStage::Approved.is_verified());
        assert!(ApplicationStage::Approved.is_approved());
        assert!(!ApplicationStage::Approved.is_claimed());

        assert!(ApplicationStage::Claimed.is_verified());
        assert!(ApplicationStage::Claimed.is_approved());
        assert!(ApplicationStage::Claimed.is_claimed());
    }

    #[test]
    fn test_rejected_counts_as_nothing() {
        // Reserved stage: composes as unverified and unapproved
        assert!(!ApplicationStage::Rejected.is_verified());
        assert!(!ApplicationStage::Rejected.is_approved());
        assert!(!ApplicationStage::Rejected.is_claimed());
    }
}
