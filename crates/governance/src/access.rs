//! Role classification and per-operation access control
//!
//! Each governance operation declares its required role in one static
//! table checked uniformly at the facade boundary, keeping the access
//! rules auditable in a single place. Voting has no entry here: its
//! eligibility is a computed predicate (credential balance, not being the
//! organiser) evaluated by the vote tally.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use agora_core::AccountId;

use crate::error::{GovernanceError, GovernanceResult};

/// Role of a caller relative to the governance instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The single contract-owner analogue; transferable
    Administrator,
    /// The single proposal organiser; fixed at construction
    Organiser,
    /// Everyone else
    Ordinary,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Administrator => write!(f, "administrator"),
            Role::Organiser => write!(f, "organiser"),
            Role::Ordinary => write!(f, "ordinary caller"),
        }
    }
}

/// Governance operations subject to access control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    TransferOwnership,
    GetQuorum,
    SetQuorum,
    ProposalCount,
    AddProposal,
    ProposalById,
    SetStatus,
    UpdateStatus,
    GetDateRange,
    SetDateRange,
    Vote,
}

/// Role required for an operation; `None` means unrestricted.
///
/// The Administrator/Organiser asymmetry is deliberate: quorum and status
/// operations belong to the organiser, date-range bounds and ownership to
/// the administrator, and reads (other than the date range) to anyone.
pub fn required_role(operation: Operation) -> Option<Role> {
    match operation {
        Operation::TransferOwnership => Some(Role::Administrator),
        Operation::GetQuorum => None,
        Operation::SetQuorum => Some(Role::Organiser),
        Operation::ProposalCount => None,
        Operation::AddProposal => Some(Role::Organiser),
        Operation::ProposalById => None,
        Operation::SetStatus => Some(Role::Organiser),
        Operation::UpdateStatus => None,
        Operation::GetDateRange => Some(Role::Administrator),
        Operation::SetDateRange => Some(Role::Administrator),
        // Eligibility is computed in the vote tally
        Operation::Vote => None,
    }
}

/// Holder of the two privileged identities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    administrator: AccountId,
    organiser: AccountId,
}

impl AccessPolicy {
    /// Create a new access policy
    pub fn new(administrator: AccountId, organiser: AccountId) -> GovernanceResult<Self> {
        if administrator.is_blank() || organiser.is_blank() {
            return Err(GovernanceError::InvalidIdentity);
        }

        Ok(Self {
            administrator,
            organiser,
        })
    }

    /// The current administrator identity
    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }

    /// The organiser identity
    pub fn organiser(&self) -> &AccountId {
        &self.organiser
    }

    /// Classify a caller into its strongest role.
    ///
    /// A caller holding both privileged identities classifies as
    /// administrator; role checks use [`AccessPolicy::holds`] instead so a
    /// dual-role caller still passes organiser-gated operations.
    pub fn classify(&self, caller: &AccountId) -> Role {
        if caller == &self.administrator {
            Role::Administrator
        } else if caller == &self.organiser {
            Role::Organiser
        } else {
            Role::Ordinary
        }
    }

    /// Whether a caller holds the given role
    pub fn holds(&self, caller: &AccountId, role: Role) -> bool {
        match role {
            Role::Administrator => caller == &self.administrator,
            Role::Organiser => caller == &self.organiser,
            Role::Ordinary => true,
        }
    }

    /// Enforce the role requirement of an operation
    pub fn require(&self, operation: Operation, caller: &AccountId) -> GovernanceResult<()> {
        if let Some(required) = required_role(operation) {
            if !self.holds(caller, required) {
                debug!(
                    "Denied {:?} to {} ({}): requires {}",
                    operation,
                    caller,
                    self.classify(caller),
                    required
                );
                return Err(GovernanceError::Unauthorized { required });
            }
        }

        Ok(())
    }

    /// Replace the administrator identity.
    ///
    /// Restricted to the current administrator; the replacement is atomic
    /// and a blank identity is rejected.
    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_administrator: AccountId,
    ) -> GovernanceResult<()> {
        self.require(Operation::TransferOwnership, caller)?;

        if new_administrator.is_blank() {
            return Err(GovernanceError::InvalidIdentity);
        }

        self.administrator = new_administrator;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::new(AccountId::new("admin"), AccountId::new("organiser")).unwrap()
    }

    #[test]
    fn test_classify_roles() {
        let policy = policy();

        assert_eq!(policy.classify(&AccountId::new("admin")), Role::Administrator);
        assert_eq!(policy.classify(&AccountId::new("organiser")), Role::Organiser);
        assert_eq!(policy.classify(&AccountId::new("carol")), Role::Ordinary);
    }

    #[test]
    fn test_blank_identities_rejected_at_construction() {
        let result = AccessPolicy::new(AccountId::new(""), AccountId::new("organiser"));
        assert_eq!(result, Err(GovernanceError::InvalidIdentity));
    }

    #[test]
    fn test_require_organiser_gated_operation() {
        let policy = policy();

        assert!(policy
            .require(Operation::SetQuorum, &AccountId::new("organiser"))
            .is_ok());
        assert_eq!(
            policy.require(Operation::SetQuorum, &AccountId::new("carol")),
            Err(GovernanceError::Unauthorized {
                required: Role::Organiser
            })
        );
        // The administrator does not hold the organiser role
        assert_eq!(
            policy.require(Operation::SetQuorum, &AccountId::new("admin")),
            Err(GovernanceError::Unauthorized {
                required: Role::Organiser
            })
        );
    }

    #[test]
    fn test_require_administrator_gated_operation() {
        let policy = policy();

        assert!(policy
            .require(Operation::GetDateRange, &AccountId::new("admin"))
            .is_ok());
        assert_eq!(
            policy.require(Operation::SetDateRange, &AccountId::new("organiser")),
            Err(GovernanceError::Unauthorized {
                required: Role::Administrator
            })
        );
    }

    #[test]
    fn test_unrestricted_operations() {
        let policy = policy();

        for caller in ["admin", "organiser", "carol"] {
            assert!(policy
                .require(Operation::GetQuorum, &AccountId::new(caller))
                .is_ok());
            assert!(policy
                .require(Operation::UpdateStatus, &AccountId::new(caller))
                .is_ok());
        }
    }

    #[test]
    fn test_transfer_ownership() {
        let mut policy = policy();

        policy
            .transfer_ownership(&AccountId::new("admin"), AccountId::new("organiser"))
            .unwrap();

        assert_eq!(policy.administrator(), &AccountId::new("organiser"));
        // The new administrator holds both roles
        assert!(policy.holds(&AccountId::new("organiser"), Role::Administrator));
        assert!(policy.holds(&AccountId::new("organiser"), Role::Organiser));
    }

    #[test]
    fn test_transfer_ownership_rejections() {
        let mut policy = policy();

        assert_eq!(
            policy.transfer_ownership(&AccountId::new("carol"), AccountId::new("dave")),
            Err(GovernanceError::Unauthorized {
                required: Role::Administrator
            })
        );
        assert_eq!(
            policy.transfer_ownership(&AccountId::new("admin"), AccountId::new("  ")),
            Err(GovernanceError::InvalidIdentity)
        );
        // Failed transfers leave the administrator unchanged
        assert_eq!(policy.administrator(), &AccountId::new("admin"));
    }
}
