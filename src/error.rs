//! Error types.
//!
//! Scheduling conflicts are not errors; they end up in the conflict set of
//! a [`MatchOutcome`](crate::scheduler::MatchOutcome). The variants here
//! cover broken input and caller misuse of the bind/unbind operations.

use thiserror::Error;

use crate::models::{CourseId, OfferingId, RequestId, Slot, StudentId};
use crate::validation::ValidationError;

/// Errors raised by the data model and the matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("unknown course: {0}")]
    UnknownCourse(String),

    #[error("unknown student: {0}")]
    UnknownStudent(String),

    #[error("unknown request: {0}")]
    UnknownRequest(RequestId),

    #[error("unknown offering: {0}")]
    UnknownOffering(OfferingId),

    #[error("slot {slot} is outside the {semesters}x{periods} grid")]
    SlotOutOfRange {
        slot: Slot,
        semesters: usize,
        periods: usize,
    },

    #[error("{request} is already bound to {offering}")]
    AlreadyBound {
        request: RequestId,
        offering: OfferingId,
    },

    #[error("{0} is not bound to any offering")]
    NotBound(RequestId),

    #[error("{0} has no free seat")]
    OfferingFull(OfferingId),

    #[error("{request} asks for {requested} but {offering} offers {offered}")]
    CourseMismatch {
        request: RequestId,
        offering: OfferingId,
        requested: CourseId,
        offered: CourseId,
    },

    #[error("{student} holds no seat in {offering}")]
    NotEnrolled {
        student: StudentId,
        offering: OfferingId,
    },

    #[error("merging {added} seats into {offering} exceeds the seat limit")]
    CapacityOverflow { offering: OfferingId, added: u32 },

    #[error("no offering of {course} at {slot}")]
    NoOfferingAt { course: String, slot: Slot },

    #[error("input failed validation with {} error(s)", .0.len())]
    InvalidInput(Vec<ValidationError>),
}

pub type MatchResult<T> = Result<T, MatchError>;

/// Errors raised while loading a [`MatcherConfig`](crate::config::MatcherConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
