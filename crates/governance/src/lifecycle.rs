//! Time-driven proposal lifecycle
//!
//! Status only advances when an operation invokes the check (a vote, an
//! explicit `update_status` call); there is no background timer, so
//! observed status may lag real time until someone touches the proposal.

use crate::proposal::{Proposal, ProposalStatus};

/// Compute the automatic transition for a proposal at time `now`.
///
/// Returns the status to move to, or `None` when nothing changes:
/// - `Waiting` opens once `now >= start`;
/// - `Opened` resolves once `now >= stop`, to `Closed` when the
///   accumulated vote count reached the quorum and to `Failed` otherwise.
///
/// Quorum is evaluated only at this resolution point, against the raw
/// vote count. Terminal statuses never change here; `Disabled` is only
/// reachable through the manual override.
pub fn advance(proposal: &Proposal, now: u64, quorum: u64) -> Option<ProposalStatus> {
    match proposal.status {
        ProposalStatus::Waiting if now >= proposal.start => Some(ProposalStatus::Opened),
        ProposalStatus::Opened if now >= proposal.stop => {
            if proposal.vote_count >= quorum {
                Some(ProposalStatus::Closed)
            } else {
                Some(ProposalStatus::Failed)
            }
        }
        _ => None,
    }
}
