//! In-memory role gate

use crate::gate::RoleGate;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use stipend_core::{Principal, Role};

/// Role gate backed by an in-process map.
///
/// Shared as `Arc<MemoryRoleGate>` (or `Arc<dyn RoleGate>`); reads take the
/// lock briefly, so `has_role` stays cheap on the hot path.
#[derive(Debug, Default)]
pub struct MemoryRoleGate {
    grants: RwLock<HashMap<Role, HashSet<Principal>>>,
}

impl MemoryRoleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// All current (role, principal) grants, for persistence and display
    pub fn grants(&self) -> Vec<(Role, Principal)> {
        let grants = match self.grants.read() {
            Ok(grants) => grants,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut all: Vec<(Role, Principal)> = grants
            .iter()
            .flat_map(|(role, who)| who.iter().map(|p| (*role, p.clone())))
            .collect();
        all.sort();
        all
    }
}

impl RoleGate for MemoryRoleGate {
    fn has_role(&self, role: Role, who: &Principal) -> bool {
        match self.grants.read() {
            Ok(grants) => grants.get(&role).map_or(false, |held| held.contains(who)),
            Err(_) => false,
        }
    }

    fn grant(&self, role: Role, who: &Principal) {
        if let Ok(mut grants) = self.grants.write() {
            grants.entry(role).or_default().insert(who.clone());
        }
    }

    fn revoke(&self, role: Role, who: &Principal) {
        if let Ok(mut grants) = self.grants.write() {
            if let Some(held) = grants.get_mut(&role) {
                held.remove(who);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_then_check() {
        let gate = MemoryRoleGate::new();
        let alice = Principal::new("alice");

        assert!(!gate.has_role(Role::Reviewer, &alice));
        gate.grant(Role::Reviewer, &alice);
        assert!(gate.has_role(Role::Reviewer, &alice));

        // Roles are independent of each other
        assert!(!gate.has_role(Role::Admin, &alice));
    }

    #[test]
    fn test_duplicate_grant_is_noop() {
        let gate = MemoryRoleGate::new();
        let alice = Principal::new("alice");

        gate.grant(Role::Reviewer, &alice);
        gate.grant(Role::Reviewer, &alice);
        assert_eq!(gate.grants().len(), 1);
    }

    #[test]
    fn test_revoke_removes_authority() {
        let gate = MemoryRoleGate::new();
        let alice = Principal::new("alice");

        gate.grant(Role::Reviewer, &alice);
        gate.revoke(Role::Reviewer, &alice);
        assert!(!gate.has_role(Role::Reviewer, &alice));

        // Revoking again is harmless
        gate.revoke(Role::Reviewer, &alice);
    }

    #[test]
    fn test_grants_lists_all_pairs() {
        let gate = MemoryRoleGate::new();
        gate.grant(Role::Reviewer, &Principal::new("alice"));
        gate.grant(Role::Reviewer, &Principal::new("bob"));
        gate.grant(Role::Admin, &Principal::new("root"));

        let grants = gate.grants();
        assert_eq!(grants.len(), 3);
        assert!(grants.contains(&(Role::Admin, Principal::new("root"))));
    }
}
