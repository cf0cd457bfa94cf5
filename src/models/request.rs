//! Student-course request model.
//!
//! A request is one line of demand: a student wants a course. Its
//! lifecycle is a small state machine:
//!
//! ```text
//! Unscheduled ──bind──▶ Bound(offering)
//!      │                    │
//!      └──conflict──▶ Conflict(reason)
//!      ▲                    │
//!      └──────unbind────────┘  (administrative)
//! ```
//!
//! Holding the state in one enum keeps a request in exactly one of the
//! three sets at any time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CourseId, OfferingId, RequestId, StudentId};

/// A student's demand for a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// This request's handle.
    pub id: RequestId,
    /// Requesting student.
    pub student: StudentId,
    /// Requested course.
    pub course: CourseId,
    /// Current lifecycle state.
    pub state: RequestState,
}

/// Where a request currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    /// Waiting to be placed.
    Unscheduled,
    /// Placed in an offering.
    Bound(OfferingId),
    /// Could not be placed in the last pass.
    Conflict(ConflictReason),
}

/// Why a request ended in the conflict set.
///
/// All reasons are the same terminal outcome for the matcher; they are
/// kept apart for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictReason {
    /// No positive-capacity offering of the course exists.
    NoOffering,
    /// Every offering overlaps a slot the student already occupies.
    ScheduleCollision,
    /// Non-overlapping offerings exist but none has a free seat.
    SeatsExhausted,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoOffering => "no offering with capacity",
            Self::ScheduleCollision => "all offerings collide with student schedule",
            Self::SeatsExhausted => "all open offerings are full",
        };
        f.write_str(s)
    }
}

impl Request {
    pub(crate) fn new(id: RequestId, student: StudentId, course: CourseId) -> Self {
        Self {
            id,
            student,
            course,
            state: RequestState::Unscheduled,
        }
    }

    /// Bound offering, if placed.
    #[inline]
    pub fn bound_offering(&self) -> Option<OfferingId> {
        match self.state {
            RequestState::Bound(o) => Some(o),
            _ => None,
        }
    }

    /// Whether the request is waiting to be placed.
    #[inline]
    pub fn is_unscheduled(&self) -> bool {
        self.state == RequestState::Unscheduled
    }

    /// Whether the request is placed.
    #[inline]
    pub fn is_bound(&self) -> bool {
        matches!(self.state, RequestState::Bound(_))
    }

    /// Conflict reason, if the request is in the conflict set.
    #[inline]
    pub fn conflict_reason(&self) -> Option<ConflictReason> {
        match self.state {
            RequestState::Conflict(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_unscheduled() {
        let r = Request::new(RequestId(0), StudentId(1), CourseId(2));
        assert!(r.is_unscheduled());
        assert!(!r.is_bound());
        assert_eq!(r.bound_offering(), None);
        assert_eq!(r.conflict_reason(), None);
    }

    #[test]
    fn test_state_accessors() {
        let mut r = Request::new(RequestId(0), StudentId(0), CourseId(0));
        r.state = RequestState::Bound(OfferingId(3));
        assert_eq!(r.bound_offering(), Some(OfferingId(3)));

        r.state = RequestState::Conflict(ConflictReason::SeatsExhausted);
        assert!(!r.is_bound());
        assert_eq!(r.conflict_reason(), Some(ConflictReason::SeatsExhausted));
    }

    #[test]
    fn test_conflict_reason_serializes_snake_case() {
        let json = serde_json::to_string(&ConflictReason::ScheduleCollision).unwrap();
        assert_eq!(json, "\"schedule_collision\"");
    }
}
