//! Role - Named roles checked by the role gate

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named role a principal may hold.
///
/// The registry itself only consults `Reviewer`; `Admin` guards the
/// administrative paths (granting roles, funding the pool) outside the
/// application lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// May verify and sign applications
    Reviewer,
    /// May grant/revoke roles and fund the custodial pool
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reviewer => "REVIEWER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "REVIEWER" => Some(Role::Reviewer),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
