//! Token-gated governance engine for Agora
//!
//! An organisation defines proposals with exactly three choices; voting
//! eligibility is gated by ownership of a fungible credential (read from
//! an external [`agora_ledger::CredentialLedger`]); each proposal moves
//! through a time-window-driven lifecycle (waiting, opened, closed,
//! failed, disabled) with lazy, pull-based transitions and an
//! organiser-only manual override.
//!
//! The engine assumes a single trusted execution context: one
//! authoritative clock, one authoritative ledger, deterministic outputs.

use async_trait::async_trait;

use agora_core::AccountId;

pub mod access;
pub mod engine;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod proposal;
pub mod tally;

pub use access::{required_role, AccessPolicy, Operation, Role};
pub use engine::{GovernanceEngine, DEFAULT_MIN_START_OFFSET, DEFAULT_MIN_STOP_OFFSET};
pub use error::{GovernanceError, GovernanceResult};
pub use events::{QuorumUpdated, StatusChanged, VoteRecorded};
pub use proposal::{
    Proposal, ProposalDraft, ProposalStatus, ProposalStore, CHOICE_COUNT, MAX_FIELD_LEN,
    MIN_FIELD_LEN,
};

/// The externally observable governance operations.
///
/// Callers are identified explicitly on every call; the engine performs
/// no identity management of its own.
#[async_trait]
pub trait Governance: Send + Sync {
    /// Replace the administrator identity (administrator only)
    async fn transfer_ownership(
        &self,
        caller: &AccountId,
        new_administrator: AccountId,
    ) -> GovernanceResult<()>;

    /// Current quorum threshold (unrestricted read)
    async fn quorum(&self) -> u64;

    /// Change the quorum threshold (organiser only)
    async fn set_quorum(&self, caller: &AccountId, quorum: u64) -> GovernanceResult<QuorumUpdated>;

    /// Number of proposals ever created (unrestricted read)
    async fn proposal_count(&self) -> u64;

    /// Validate and append a new proposal, returning its index (organiser only)
    async fn add_proposal(&self, caller: &AccountId, draft: ProposalDraft)
        -> GovernanceResult<u64>;

    /// Snapshot of a proposal by index (unrestricted read)
    async fn proposal_by_id(&self, id: u64) -> GovernanceResult<Proposal>;

    /// Force a proposal into any status, bypassing the time window (organiser only)
    async fn set_status(&self, caller: &AccountId, id: u64, status: u8) -> GovernanceResult<()>;

    /// Apply the automatic time-driven transition; `None` when nothing changed
    async fn update_status(&self, id: u64) -> GovernanceResult<Option<StatusChanged>>;

    /// Current date-range bounds `(min_start_offset, min_stop_offset)` (administrator only)
    async fn date_range(&self, caller: &AccountId) -> GovernanceResult<(u64, u64)>;

    /// Change the date-range bounds (administrator only)
    async fn set_date_range(
        &self,
        caller: &AccountId,
        min_start_offset: u64,
        min_stop_offset: u64,
    ) -> GovernanceResult<()>;

    /// Cast one vote on an open proposal (eligible credential holders only)
    async fn vote(&self, caller: &AccountId, id: u64, choice: u8) -> GovernanceResult<VoteRecorded>;
}
