//! The application registry - submit / verify / sign / claim

use crate::application::{Application, ApplicationStage};
use crate::approvals::ApprovalTable;
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use stipend_core::{Amount, ApplicationId, Principal, Role};
use stipend_custody::CustodyLedger;
use stipend_events::{EventSink, LifecycleEvent};
use stipend_roles::RoleGate;

/// Owns the application table, the approval table and the quorum rule.
///
/// All mutation goes through the four lifecycle operations; nothing else
/// may touch application records. Collaborators are injected: the role
/// gate and event sink at construction, the custody ledger per claim (the
/// pool is shared with the funding path outside the registry).
pub struct Registry {
    required_approvals: NonZeroU32,
    applications: Vec<Application>,
    approvals: ApprovalTable,
    roles: Arc<dyn RoleGate>,
    events: Arc<dyn EventSink>,
}

/// Serializable view of the registry's own state, for embedders that
/// persist across runs. Collaborators are re-injected on restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub required_approvals: NonZeroU32,
    pub applications: Vec<Application>,
    pub approvals: ApprovalTable,
}

impl Registry {
    /// Create an empty registry with a fixed approval quorum.
    ///
    /// The quorum never changes for the registry's lifetime.
    pub fn new(
        required_approvals: NonZeroU32,
        roles: Arc<dyn RoleGate>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            required_approvals,
            applications: Vec::new(),
            approvals: ApprovalTable::new(),
            roles,
            events,
        }
    }

    /// Rebuild a registry from a snapshot, re-injecting collaborators
    pub fn restore(
        snapshot: RegistrySnapshot,
        roles: Arc<dyn RoleGate>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            required_approvals: snapshot.required_approvals,
            applications: snapshot.applications,
            approvals: snapshot.approvals,
            roles,
            events,
        }
    }

    /// Snapshot the registry's own state
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            required_approvals: self.required_approvals,
            applications: self.applications.clone(),
            approvals: self.approvals.clone(),
        }
    }

    /// Number of applications ever submitted; the next id is this plus one
    pub fn application_count(&self) -> u64 {
        self.applications.len() as u64
    }

    /// The fixed quorum threshold
    pub fn required_approvals(&self) -> u32 {
        self.required_approvals.get()
    }

    /// Look up an application by id
    pub fn get(&self, id: ApplicationId) -> Option<&Application> {
        self.index_of(id).ok().map(|idx| &self.applications[idx])
    }

    /// All applications, in submission order
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    /// Reviewers that signed `id`, in identifier order
    pub fn signers(&self, id: ApplicationId) -> Vec<&Principal> {
        self.approvals.signers(id)
    }

    /// Submit a new application. Permissionless; always succeeds.
    ///
    /// `applicant` is the caller's own authenticated identity - it becomes
    /// the only principal allowed to claim. Returns the new id.
    pub fn submit(
        &mut self,
        applicant: Principal,
        info: impl Into<String>,
        amount: Amount,
    ) -> ApplicationId {
        let id = self.applications.len() as ApplicationId + 1;
        self.applications
            .push(Application::new(id, applicant.clone(), info.into(), amount));

        self.events.record(&LifecycleEvent::Submitted {
            id,
            applicant,
            amount,
        });

        id
    }

    /// Mark an application verified. Reviewer-gated.
    ///
    /// Idempotent in effect: verifying an already-verified (or approved,
    /// or claimed) application changes nothing and still succeeds.
    pub fn verify(&mut self, id: ApplicationId, caller: &Principal) -> Result<(), RegistryError> {
        if !self.roles.has_role(Role::Reviewer, caller) {
            return Err(RegistryError::Unauthorized);
        }

        let idx = self.index_of(id)?;
        let app = &mut self.applications[idx];
        if app.stage == ApplicationStage::Submitted {
            app.stage = ApplicationStage::Verified;
        }

        self.events.record(&LifecycleEvent::Verified { id });
        Ok(())
    }

    /// Add the caller's signature to an application. Reviewer-gated.
    ///
    /// Checks, in order: reviewer role, existence, verified, not already
    /// signed by this caller. On the signature that first reaches the
    /// quorum the application transitions to `Approved` and the `Approved`
    /// event is emitted - exactly once per application; later signatures
    /// keep counting without re-emitting.
    pub fn sign(&mut self, id: ApplicationId, caller: &Principal) -> Result<(), RegistryError> {
        if !self.roles.has_role(Role::Reviewer, caller) {
            return Err(RegistryError::Unauthorized);
        }

        let idx = self.index_of(id)?;
        if !self.applications[idx].stage.is_verified() {
            return Err(RegistryError::NotVerified(id));
        }
        if !self.approvals.record(id, caller) {
            return Err(RegistryError::DuplicateApproval {
                id,
                reviewer: caller.clone(),
            });
        }

        let app = &mut self.applications[idx];
        app.approval_count += 1;
        self.events.record(&LifecycleEvent::Signed {
            id,
            signer: caller.clone(),
        });

        if app.approval_count >= self.required_approvals.get()
            && app.stage == ApplicationStage::Verified
        {
            app.stage = ApplicationStage::Approved;
            self.events.record(&LifecycleEvent::Approved { id });
        }

        Ok(())
    }

    /// Pay out an approved application to its applicant.
    ///
    /// Checks, in order: existence, applicant identity, approved, not yet
    /// claimed, pool balance. The claimed latch is set BEFORE the transfer;
    /// if the collaborator then fails the latch stays set and the error is
    /// fatal - the claim must not be retried as if fresh.
    pub fn claim(
        &mut self,
        id: ApplicationId,
        caller: &Principal,
        custody: &mut dyn CustodyLedger,
    ) -> Result<Amount, RegistryError> {
        let idx = self.index_of(id)?;
        let app = &mut self.applications[idx];

        if app.applicant != *caller {
            return Err(RegistryError::NotApplicant(id));
        }
        if !app.stage.is_approved() {
            return Err(RegistryError::NotApproved(id));
        }
        if app.stage.is_claimed() {
            return Err(RegistryError::AlreadyClaimed(id));
        }

        let amount = app.amount;
        let available = custody.balance();
        if available < amount {
            return Err(RegistryError::InsufficientFunds {
                needed: amount,
                available,
            });
        }

        app.stage = ApplicationStage::Claimed;
        if let Err(source) = custody.transfer(caller, amount) {
            tracing::error!(
                id,
                claimant = %caller,
                %amount,
                %source,
                "custody transfer failed after claim latch; application stays claimed"
            );
            return Err(RegistryError::TransferFailed { id, source });
        }

        self.events.record(&LifecycleEvent::Claimed {
            id,
            claimant: caller.clone(),
            amount,
        });

        Ok(amount)
    }

    fn index_of(&self, id: ApplicationId) -> Result<usize, RegistryError> {
        if id == 0 || id > self.applications.len() as u64 {
            return Err(RegistryError::NotFound(id));
        }
        Ok((id - 1) as usize)
    }
}
