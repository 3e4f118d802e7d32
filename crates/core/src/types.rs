//! Account identity type used throughout Agora

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a caller, holder or role occupant.
///
/// Wallet management is out of scope: an `AccountId` is whatever opaque
/// string the embedding host uses to identify callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account identity
    pub fn new<S: Into<String>>(id: S) -> Self {
        AccountId(id.into())
    }

    /// The identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identity is empty or whitespace-only.
    ///
    /// A blank identity is never a valid role occupant.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        AccountId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display() {
        let id = AccountId::new("alice");
        assert_eq!(id.to_string(), "alice");
        assert_eq!(id.as_str(), "alice");
    }

    #[test]
    fn test_blank_identity() {
        assert!(AccountId::new("").is_blank());
        assert!(AccountId::new("   ").is_blank());
        assert!(!AccountId::new("bob").is_blank());
    }
}
