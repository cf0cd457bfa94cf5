//! Result of a matching pass.

use serde::{Deserialize, Serialize};

use crate::config::MatcherConfig;
use crate::data::SchedulingData;
use crate::models::{ConflictReason, CourseId, OfferingId, RequestId, RequestState, Slot, StudentId};

/// A request the pass bound to an offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Placed request.
    pub request: RequestId,
    /// Requesting student.
    pub student: StudentId,
    /// Requested course.
    pub course: CourseId,
    /// Chosen offering.
    pub offering: OfferingId,
    /// Slot of the chosen offering.
    pub slot: Slot,
}

/// A request the pass could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Unplaced request.
    pub request: RequestId,
    /// Requesting student.
    pub student: StudentId,
    /// Requested course.
    pub course: CourseId,
    /// Why no offering was chosen.
    pub reason: ConflictReason,
}

/// Everything one pass decided, in decision order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Requests in the worklist when the pass started.
    pub attempted: usize,
    /// Bound requests.
    pub placements: Vec<Placement>,
    /// Unplaced requests.
    pub conflicts: Vec<Conflict>,
    /// Whether the pass stopped early on cancellation.
    pub cancelled: bool,
}

impl MatchOutcome {
    /// Number of placed requests.
    pub fn placed(&self) -> usize {
        self.placements.len()
    }

    /// Number of requests in the conflict set.
    pub fn unresolved(&self) -> usize {
        self.conflicts.len()
    }

    /// Number of worklist entries never reached (cancelled passes only).
    pub fn skipped(&self) -> usize {
        self.attempted - self.placed() - self.unresolved()
    }

    /// Conflicts with a given reason.
    pub fn conflicts_with(&self, reason: ConflictReason) -> usize {
        self.conflicts.iter().filter(|c| c.reason == reason).count()
    }

    /// Placement of a request made in this pass.
    pub fn placement_for(&self, request: RequestId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.request == request)
    }
}

/// One exported row per request: who, what, and where (or why not).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Student name.
    pub student: String,
    /// Course name.
    pub course: String,
    /// Bound semester index; `None` = unresolved.
    pub semester: Option<usize>,
    /// Bound period index; `None` = unresolved.
    pub period: Option<usize>,
    /// Semester display name.
    pub semester_label: Option<String>,
    /// Period display name.
    pub period_label: Option<String>,
    /// Conflict reason for requests in the conflict set.
    pub conflict: Option<ConflictReason>,
}

/// Builds one record per request, grouped by student in ledger order.
pub fn placement_records(data: &SchedulingData, config: &MatcherConfig) -> Vec<PlacementRecord> {
    let mut records = Vec::with_capacity(data.ledger.requests().len());
    for (student_id, student) in data.ledger.students() {
        for &r in data.ledger.requests_of(student_id) {
            let Some(req) = data.ledger.request(r) else {
                continue;
            };
            let slot = req
                .bound_offering()
                .and_then(|o| data.offerings.get(o))
                .map(|o| o.slot);
            let conflict = match req.state {
                RequestState::Conflict(reason) => Some(reason),
                _ => None,
            };
            records.push(PlacementRecord {
                student: student.name.clone(),
                course: data.course_name(req.course),
                semester: slot.map(|s| s.semester),
                period: slot.map(|s| s.period),
                semester_label: slot.map(|s| config.semester_label(s.semester)),
                period_label: slot.map(|s| config.period_label(s.period)),
                conflict,
            });
        }
    }
    records
}
