//! Lifecycle event payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stipend_core::{Amount, ApplicationId, Principal, Role};

/// A lifecycle event emitted by the registry (or, for the administrative
/// kinds, by the orchestration layer).
///
/// The first five kinds carry exactly the fields the registry publishes;
/// `Funded` and `RoleGranted` exist only for the administrative paths and
/// are never emitted by the registry itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum LifecycleEvent {
    /// A new application entered the registry
    Submitted {
        id: ApplicationId,
        applicant: Principal,
        amount: Amount,
    },
    /// A reviewer verified the application
    Verified { id: ApplicationId },
    /// A reviewer signed the application
    Signed {
        id: ApplicationId,
        signer: Principal,
    },
    /// The application reached quorum (emitted once per application)
    Approved { id: ApplicationId },
    /// The applicant claimed the funds
    Claimed {
        id: ApplicationId,
        claimant: Principal,
        amount: Amount,
    },
    /// The custodial pool was funded (administrative)
    Funded { amount: Amount },
    /// A role was granted to a principal (administrative)
    RoleGranted { role: Role, who: Principal },
}

impl LifecycleEvent {
    /// Short code for display and log lines
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleEvent::Submitted { .. } => "Submitted",
            LifecycleEvent::Verified { .. } => "Verified",
            LifecycleEvent::Signed { .. } => "Signed",
            LifecycleEvent::Approved { .. } => "Approved",
            LifecycleEvent::Claimed { .. } => "Claimed",
            LifecycleEvent::Funded { .. } => "Funded",
            LifecycleEvent::RoleGranted { .. } => "RoleGranted",
        }
    }

    /// The application this event concerns, if any
    pub fn application_id(&self) -> Option<ApplicationId> {
        match self {
            LifecycleEvent::Submitted { id, .. }
            | LifecycleEvent::Verified { id }
            | LifecycleEvent::Signed { id, .. }
            | LifecycleEvent::Approved { id }
            | LifecycleEvent::Claimed { id, .. } => Some(*id),
            LifecycleEvent::Funded { .. } | LifecycleEvent::RoleGranted { .. } => None,
        }
    }
}

/// One line of the durable JSONL trail: the event plus the wall-clock
/// instant it was recorded at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// When the sink recorded the event
    pub at: DateTime<Utc>,

    #[serde(flatten)]
    pub event: LifecycleEvent,
}

impl RecordedEvent {
    pub fn now(event: LifecycleEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }
}
