//! Events emitted by mutating governance operations
//!
//! Events are returned to the caller as typed values and logged through
//! `tracing`; there is no internal event bus.

use serde::{Deserialize, Serialize};

use agora_core::AccountId;

use crate::proposal::ProposalStatus;

/// The quorum threshold was changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumUpdated {
    /// Threshold before the change
    pub before: u64,
    /// Threshold after the change
    pub after: u64,
}

/// An automatic lifecycle check moved a proposal to a new status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    /// Proposal that transitioned
    pub proposal_id: u64,
    /// Status it transitioned to
    pub status: ProposalStatus,
}

/// A vote was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecorded {
    /// Proposal the vote was cast on
    pub proposal_id: u64,
    /// Identity of the voter
    pub voter: AccountId,
    /// Choice index the vote went to
    pub choice: u8,
}
