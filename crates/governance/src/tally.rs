//! Vote recording and eligibility checks
//!
//! The check order is part of the observable behaviour: choice validity,
//! then a lazy lifecycle refresh, then status, caller role, credential
//! balance and the double-vote guard. All checks complete before any
//! field is written, so a rejected vote leaves the proposal untouched.

use tracing::{debug, info};

use agora_core::AccountId;
use agora_ledger::CredentialLedger;

use crate::error::{GovernanceError, GovernanceResult};
use crate::events::VoteRecorded;
use crate::lifecycle;
use crate::proposal::{Proposal, ProposalStatus, CHOICE_COUNT};

/// Cast one vote on an open proposal.
///
/// Vote weight is fixed at 1 regardless of the caller's balance: the
/// credential is an eligibility gate, not a weight multiplier. The
/// lifecycle refresh happens before eligibility is evaluated, so a vote
/// can itself open a proposal whose start time has passed, or get
/// rejected because the stop time has.
pub async fn cast_vote<L: CredentialLedger + ?Sized>(
    proposal: &mut Proposal,
    choice: u8,
    caller: &AccountId,
    organiser: &AccountId,
    quorum: u64,
    now: u64,
    ledger: &L,
) -> GovernanceResult<VoteRecorded> {
    if usize::from(choice) >= CHOICE_COUNT {
        return Err(GovernanceError::InvalidChoice { choice });
    }

    if let Some(status) = lifecycle::advance(proposal, now, quorum) {
        debug!(
            "Proposal {} moved to {} during vote by {}",
            proposal.id, status, caller
        );
        proposal.status = status;
    }

    if proposal.status != ProposalStatus::Opened {
        return Err(GovernanceError::InvalidStatus {
            current: proposal.status,
        });
    }

    if caller == organiser {
        return Err(GovernanceError::ForbiddenCaller);
    }

    if ledger.balance_of(caller).await < 1 {
        return Err(GovernanceError::InsufficientCredential);
    }

    if proposal.voters.contains(caller) {
        return Err(GovernanceError::DuplicateVote);
    }

    proposal.voters.insert(caller.clone());
    proposal.choice_counters[usize::from(choice)] += 1;
    proposal.vote_count += 1;

    info!(
        "Vote recorded on proposal {} by {} for choice {}",
        proposal.id, caller, choice
    );

    Ok(VoteRecorded {
        proposal_id: proposal.id,
        voter: caller.clone(),
        choice,
    })
}
