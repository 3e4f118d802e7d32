//! Core types for the Agora governance engine
//!
//! This crate provides the pieces shared by every other Agora crate:
//! account identities, the wall-clock abstraction used for time-driven
//! proposal transitions, and logging initialisation.

pub mod error;
pub mod logging;
pub mod time;
pub mod types;

pub use error::{CoreError, Result};
pub use time::{Clock, ManualClock, SystemClock};
pub use types::AccountId;
