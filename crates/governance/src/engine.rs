//! Governance engine implementation
//!
//! This module provides the implementation of the [`Governance`] trait,
//! composing access control, the proposal store, the lifecycle engine and
//! the vote tally behind a single lock.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use agora_core::{AccountId, Clock};
use agora_ledger::CredentialLedger;

use crate::access::{AccessPolicy, Operation};
use crate::error::GovernanceResult;
use crate::events::{QuorumUpdated, StatusChanged, VoteRecorded};
use crate::proposal::{ProposalDraft, ProposalStatus, ProposalStore};
use crate::{lifecycle, tally, Governance, Proposal};

/// Default minimum distance between creation and voting start, in seconds
pub const DEFAULT_MIN_START_OFFSET: u64 = 3600;

/// Default minimum distance between voting start and stop, in seconds
pub const DEFAULT_MIN_STOP_OFFSET: u64 = 7200;

/// Shared mutable state behind the engine's single lock.
///
/// This is also the persisted logical layout: the configuration record
/// plus the ordered proposal list.
#[derive(Debug, Clone)]
struct EngineState {
    access: AccessPolicy,
    quorum: u64,
    min_start_offset: u64,
    min_stop_offset: u64,
    proposals: ProposalStore,
}

/// The main implementation of the [`Governance`] trait.
///
/// Every mutating operation is a synchronous, atomic transaction against
/// the shared state: the write lock is held across validation and
/// mutation, and a failing validation returns before anything is written.
/// Reads are served from a consistent snapshot under the read lock.
pub struct GovernanceEngine {
    /// Read-only credential ledger gating voter eligibility
    ledger: Arc<dyn CredentialLedger>,
    /// Externally supplied wall clock
    clock: Arc<dyn Clock>,
    /// Configuration and proposal store
    state: RwLock<EngineState>,
}

impl GovernanceEngine {
    /// Create a new governance engine.
    ///
    /// The date-range bounds start at their defaults (3600 s / 7200 s)
    /// and can be changed by the administrator via `set_date_range`.
    pub fn new(
        ledger: Arc<dyn CredentialLedger>,
        clock: Arc<dyn Clock>,
        administrator: AccountId,
        organiser: AccountId,
        quorum: u64,
    ) -> GovernanceResult<Self> {
        let access = AccessPolicy::new(administrator, organiser)?;

        info!(
            "Created governance engine, administrator {}, organiser {}, quorum {}",
            access.administrator(),
            access.organiser(),
            quorum
        );

        Ok(Self {
            ledger,
            clock,
            state: RwLock::new(EngineState {
                access,
                quorum,
                min_start_offset: DEFAULT_MIN_START_OFFSET,
                min_stop_offset: DEFAULT_MIN_STOP_OFFSET,
                proposals: ProposalStore::new(),
            }),
        })
    }

    /// Current administrator identity
    pub async fn administrator(&self) -> AccountId {
        let state = self.state.read().await;
        state.access.administrator().clone()
    }

    /// Organiser identity, fixed at construction
    pub async fn organiser(&self) -> AccountId {
        let state = self.state.read().await;
        state.access.organiser().clone()
    }
}

#[async_trait]
impl Governance for GovernanceEngine {
    async fn transfer_ownership(
        &self,
        caller: &AccountId,
        new_administrator: AccountId,
    ) -> GovernanceResult<()> {
        let mut state = self.state.write().await;
        state.access.transfer_ownership(caller, new_administrator)?;

        info!("Ownership transferred to {}", state.access.administrator());
        Ok(())
    }

    async fn quorum(&self) -> u64 {
        let state = self.state.read().await;
        state.quorum
    }

    async fn set_quorum(&self, caller: &AccountId, quorum: u64) -> GovernanceResult<QuorumUpdated> {
        let mut state = self.state.write().await;
        state.access.require(Operation::SetQuorum, caller)?;

        let before = state.quorum;
        state.quorum = quorum;

        info!("Quorum updated from {} to {}", before, quorum);
        Ok(QuorumUpdated {
            before,
            after: quorum,
        })
    }

    async fn proposal_count(&self) -> u64 {
        let state = self.state.read().await;
        state.proposals.count()
    }

    async fn add_proposal(&self, caller: &AccountId, draft: ProposalDraft) -> GovernanceResult<u64> {
        let mut state = self.state.write().await;
        state.access.require(Operation::AddProposal, caller)?;

        let now = self.clock.now();
        let min_start_offset = state.min_start_offset;
        let min_stop_offset = state.min_stop_offset;
        state
            .proposals
            .add(draft, now, min_start_offset, min_stop_offset)
    }

    async fn proposal_by_id(&self, id: u64) -> GovernanceResult<Proposal> {
        let state = self.state.read().await;
        state.proposals.get(id).cloned()
    }

    async fn set_status(&self, caller: &AccountId, id: u64, status: u8) -> GovernanceResult<()> {
        let mut state = self.state.write().await;
        state.access.require(Operation::SetStatus, caller)?;

        let proposal = state.proposals.get_mut(id)?;
        let status = ProposalStatus::from_code(status)?;
        proposal.status = status;

        info!("Proposal {} status forced to {}", id, status);
        Ok(())
    }

    async fn update_status(&self, id: u64) -> GovernanceResult<Option<StatusChanged>> {
        let mut state = self.state.write().await;
        let quorum = state.quorum;
        let now = self.clock.now();

        let proposal = state.proposals.get_mut(id)?;
        match lifecycle::advance(proposal, now, quorum) {
            Some(status) => {
                proposal.status = status;
                info!("Proposal {} advanced to {}", id, status);
                Ok(Some(StatusChanged {
                    proposal_id: id,
                    status,
                }))
            }
            None => Ok(None),
        }
    }

    async fn date_range(&self, caller: &AccountId) -> GovernanceResult<(u64, u64)> {
        let state = self.state.read().await;
        state.access.require(Operation::GetDateRange, caller)?;

        Ok((state.min_start_offset, state.min_stop_offset))
    }

    async fn set_date_range(
        &self,
        caller: &AccountId,
        min_start_offset: u64,
        min_stop_offset: u64,
    ) -> GovernanceResult<()> {
        let mut state = self.state.write().await;
        state.access.require(Operation::SetDateRange, caller)?;

        state.min_start_offset = min_start_offset;
        state.min_stop_offset = min_stop_offset;

        info!(
            "Date range bounds set to ({}, {})",
            min_start_offset, min_stop_offset
        );
        Ok(())
    }

    async fn vote(&self, caller: &AccountId, id: u64, choice: u8) -> GovernanceResult<VoteRecorded> {
        let mut state = self.state.write().await;
        let quorum = state.quorum;
        let organiser = state.access.organiser().clone();
        let now = self.clock.now();

        let proposal = state.proposals.get_mut(id)?;
        tally::cast_vote(
            proposal,
            choice,
            caller,
            &organiser,
            quorum,
            now,
            self.ledger.as_ref(),
        )
        .await
    }
}
