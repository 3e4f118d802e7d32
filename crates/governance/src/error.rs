//! Error types for governance operations
//!
//! Every failure is a synchronous, typed rejection with no partial state
//! mutation; none are retried internally.

use thiserror::Error;

use crate::access::Role;
use crate::proposal::ProposalStatus;

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;

/// Error types for governance operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    /// The caller lacks the role required by the operation
    #[error("Access granted only to {required}")]
    Unauthorized {
        /// Role the operation requires
        required: Role,
    },

    /// A role was about to be handed to a blank identity
    #[error("Identity must not be blank")]
    InvalidIdentity,

    /// The proposal index is outside `[0, count)`
    #[error("Proposal index {index} out of bounds (count {count})")]
    IndexOutOfBounds {
        /// Index the caller asked for
        index: u64,
        /// Number of proposals in the store
        count: u64,
    },

    /// The choice index is outside `{0, 1, 2}`
    #[error("Incorrect choice {choice}")]
    InvalidChoice {
        /// Choice index the caller supplied
        choice: u8,
    },

    /// The numeric status code does not name a proposal status
    #[error("Incorrect status value {value}")]
    InvalidStatusValue {
        /// Raw status code the caller supplied
        value: u8,
    },

    /// The proposal is not open for voting
    #[error("Incorrect proposal status: {current}")]
    InvalidStatus {
        /// Status the proposal was in when the vote was attempted
        current: ProposalStatus,
    },

    /// A text field is below the minimum length
    #[error("Field `{field}` is too short")]
    FieldTooShort {
        /// Name of the offending field
        field: &'static str,
    },

    /// A text field exceeds the maximum length
    #[error("Field `{field}` is too long")]
    FieldTooLong {
        /// Name of the offending field
        field: &'static str,
    },

    /// The start offset is below the configured minimum distance
    #[error("Start date too close")]
    StartTooClose,

    /// The stop offset is below the configured minimum distance from start
    #[error("Stop date too close")]
    StopTooClose,

    /// The organiser attempted to vote
    #[error("Voting is forbidden to the organiser")]
    ForbiddenCaller,

    /// The caller holds no credential
    #[error("Voting requires holding at least one credential unit")]
    InsufficientCredential,

    /// The caller already voted on this proposal
    #[error("Already voted on this proposal")]
    DuplicateVote,
}
