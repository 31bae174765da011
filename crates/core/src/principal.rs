//! Principal - Authenticated caller identity
//!
//! Every registry operation is invoked on behalf of a principal. The
//! identity is established by the host (process, session, signature layer)
//! before it reaches the registry; the registry treats it as not spoofable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated caller identity.
///
/// Compared byte-for-byte; two principals are the same caller iff their
/// identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_identifier() {
        let a = Principal::new("alice");
        let b = Principal::from("alice");
        let c = Principal::new("bob");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_transparent() {
        let p = Principal::new("alice");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"alice\"");
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
