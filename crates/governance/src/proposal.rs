//! Proposal records and the append-only proposal store

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use agora_core::AccountId;

use crate::error::{GovernanceError, GovernanceResult};

/// Number of choices every proposal carries
pub const CHOICE_COUNT: usize = 3;

/// Minimum length of every text field, in bytes
pub const MIN_FIELD_LEN: usize = 1;

/// Maximum length of every text field, in bytes.
///
/// The reference behaviour only pins the bound between 64 and 127; 64 is
/// the chosen explicit constant.
pub const MAX_FIELD_LEN: usize = 64;

/// Lifecycle status of a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    /// Initial state; voting has not started
    Waiting,
    /// Voting window is open
    Opened,
    /// Voting ended with quorum met
    Closed,
    /// Voting ended short of quorum
    Failed,
    /// Administratively withdrawn
    Disabled,
}

impl ProposalStatus {
    /// Decode a raw status code as used by the external interface
    pub fn from_code(value: u8) -> GovernanceResult<Self> {
        match value {
            0 => Ok(ProposalStatus::Waiting),
            1 => Ok(ProposalStatus::Opened),
            2 => Ok(ProposalStatus::Closed),
            3 => Ok(ProposalStatus::Failed),
            4 => Ok(ProposalStatus::Disabled),
            _ => Err(GovernanceError::InvalidStatusValue { value }),
        }
    }

    /// The raw status code for the external interface
    pub fn code(&self) -> u8 {
        match self {
            ProposalStatus::Waiting => 0,
            ProposalStatus::Opened => 1,
            ProposalStatus::Closed => 2,
            ProposalStatus::Failed => 3,
            ProposalStatus::Disabled => 4,
        }
    }

    /// Whether no further automatic transition can leave this status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Closed | ProposalStatus::Failed | ProposalStatus::Disabled
        )
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Waiting => write!(f, "waiting"),
            ProposalStatus::Opened => write!(f, "opened"),
            ProposalStatus::Closed => write!(f, "closed"),
            ProposalStatus::Failed => write!(f, "failed"),
            ProposalStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// Input fields for a new proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalDraft {
    /// Short title shown in listings
    pub title: String,
    /// Full description of what is being decided
    pub description: String,
    /// Human-readable date label shown alongside the proposal
    pub display_date: String,
    /// Labels of the three choices
    pub choices: [String; CHOICE_COUNT],
    /// Seconds from creation until voting opens
    pub start_offset: u64,
    /// Seconds from creation until voting closes
    pub stop_offset: u64,
}

/// A single ballot item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Sequential index assigned at creation
    pub id: u64,
    /// Short title shown in listings
    pub title: String,
    /// Full description of what is being decided
    pub description: String,
    /// Human-readable date label shown alongside the proposal
    pub display_date: String,
    /// Labels of the three choices
    pub choice_descriptions: [String; CHOICE_COUNT],
    /// Votes accumulated per choice
    pub choice_counters: [u64; CHOICE_COUNT],
    /// Total votes cast; always the sum of the choice counters
    pub vote_count: u64,
    /// Current lifecycle status
    pub status: ProposalStatus,
    /// Unix time at which voting opens
    pub start: u64,
    /// Unix time at which voting closes
    pub stop: u64,
    /// Holders that already voted on this proposal
    pub voters: HashSet<AccountId>,
}

/// Append-only, index-addressed collection of proposals
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of proposals ever created
    pub fn count(&self) -> u64 {
        self.proposals.len() as u64
    }

    /// Look up a proposal by index
    pub fn get(&self, id: u64) -> GovernanceResult<&Proposal> {
        self.proposals
            .get(id as usize)
            .ok_or(GovernanceError::IndexOutOfBounds {
                index: id,
                count: self.count(),
            })
    }

    /// Look up a proposal by index, mutably
    pub fn get_mut(&mut self, id: u64) -> GovernanceResult<&mut Proposal> {
        let count = self.count();
        self.proposals
            .get_mut(id as usize)
            .ok_or(GovernanceError::IndexOutOfBounds { index: id, count })
    }

    /// Validate a draft and append it as a new `Waiting` proposal.
    ///
    /// `start` and `stop` are fixed at `now + offset`; the offsets must
    /// respect the configured minimum distances. A draft that fails any
    /// validation leaves the store untouched.
    pub fn add(
        &mut self,
        draft: ProposalDraft,
        now: u64,
        min_start_offset: u64,
        min_stop_offset: u64,
    ) -> GovernanceResult<u64> {
        validate_field("title", &draft.title)?;
        validate_field("description", &draft.description)?;
        validate_field("display_date", &draft.display_date)?;
        validate_field("choice_1", &draft.choices[0])?;
        validate_field("choice_2", &draft.choices[1])?;
        validate_field("choice_3", &draft.choices[2])?;

        // An offset that overflows the clock is outside any valid window
        let start = now
            .checked_add(draft.start_offset)
            .ok_or(GovernanceError::StartTooClose)?;
        let stop = now
            .checked_add(draft.stop_offset)
            .ok_or(GovernanceError::StopTooClose)?;

        let min_start = now
            .checked_add(min_start_offset)
            .ok_or(GovernanceError::StartTooClose)?;
        if start < min_start {
            return Err(GovernanceError::StartTooClose);
        }
        let min_stop = start
            .checked_add(min_stop_offset)
            .ok_or(GovernanceError::StopTooClose)?;
        if stop < min_stop {
            return Err(GovernanceError::StopTooClose);
        }

        let id = self.count();
        let proposal = Proposal {
            id,
            title: draft.title,
            description: draft.description,
            display_date: draft.display_date,
            choice_descriptions: draft.choices,
            choice_counters: [0; CHOICE_COUNT],
            vote_count: 0,
            status: ProposalStatus::Waiting,
            start,
            stop,
            voters: HashSet::new(),
        };

        info!(
            "Added proposal {} `{}`, voting window [{}, {}]",
            id, proposal.title, start, stop
        );

        self.proposals.push(proposal);
        Ok(id)
    }
}

fn validate_field(field: &'static str, value: &str) -> GovernanceResult<()> {
    if value.len() < MIN_FIELD_LEN {
        return Err(GovernanceError::FieldTooShort { field });
    }
    if value.len() > MAX_FIELD_LEN {
        return Err(GovernanceError::FieldTooLong { field });
    }
    Ok(())
}
