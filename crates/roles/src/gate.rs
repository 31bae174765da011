//! Role gate trait - the authorization seam

use stipend_core::{Principal, Role};

/// Answers "does principal P hold role R?" and carries the administrative
/// grant/revoke path.
///
/// `has_role` is a pure query with no side effects. Grant and revoke are
/// administrative operations outside the application lifecycle; they take
/// `&self` so a gate can be shared as `Arc<dyn RoleGate>` while an
/// administrative caller mutates it (implementations use interior
/// mutability).
pub trait RoleGate: Send + Sync {
    /// Does `who` currently hold `role`?
    fn has_role(&self, role: Role, who: &Principal) -> bool;

    /// Grant `role` to `who`. Granting an already-held role is a no-op.
    fn grant(&self, role: Role, who: &Principal);

    /// Revoke `role` from `who`. Revoking a role not held is a no-op.
    fn revoke(&self, role: Role, who: &Principal);
}
