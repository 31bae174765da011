//! Approval table - which reviewers already signed which application

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stipend_core::{ApplicationId, Principal};

/// Relation (application, reviewer) used to reject duplicate signatures.
///
/// Each pair contributes at most one increment to an application's
/// approval count; `record` is the only mutation and refuses duplicates.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ApprovalTable {
    signed: BTreeMap<ApplicationId, BTreeSet<Principal>>,
}

impl ApprovalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Has `reviewer` already signed `id`?
    pub fn has_signed(&self, id: ApplicationId, reviewer: &Principal) -> bool {
        self.signed
            .get(&id)
            .map_or(false, |signers| signers.contains(reviewer))
    }

    /// Record a signature. Returns false (and records nothing) if this
    /// reviewer already signed this application.
    pub fn record(&mut self, id: ApplicationId, reviewer: &Principal) -> bool {
        self.signed.entry(id).or_default().insert(reviewer.clone())
    }

    /// Reviewers that signed `id`, in identifier order
    pub fn signers(&self, id: ApplicationId) -> Vec<&Principal> {
        self.signed
            .get(&id)
            .map(|signers| signers.iter().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_then_check() {
        let mut table = ApprovalTable::new();
        let reviewer = Principal::new("rev-a");

        assert!(!table.has_signed(1, &reviewer));
        assert!(table.record(1, &reviewer));
        assert!(table.has_signed(1, &reviewer));
    }

    #[test]
    fn test_duplicate_record_refused() {
        let mut table = ApprovalTable::new();
        let reviewer = Principal::new("rev-a");

        assert!(table.record(1, &reviewer));
        assert!(!table.record(1, &reviewer));
        assert_eq!(table.signers(1).len(), 1);
    }

    #[test]
    fn test_pairs_are_independent() {
        let mut table = ApprovalTable::new();
        let a = Principal::new("rev-a");
        let b = Principal::new("rev-b");

        assert!(table.record(1, &a));
        assert!(table.record(1, &b));
        assert!(table.record(2, &a));

        assert_eq!(table.signers(1).len(), 2);
        assert_eq!(table.signers(2), vec![&a]);
    }
}
