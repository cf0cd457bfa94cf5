//! Lookup data model.
//!
//! [`SchedulingData`] owns the three stores the matcher reads and writes:
//!
//! - [`Catalog`]: course metadata, keyed by interned handle
//! - [`OfferingIndex`]: offerings by slot and by course
//! - [`StudentLedger`]: students, requests and per-student queries
//!
//! Binding a request touches both the offering (enrolment list) and the
//! request (state), so `bind` and `unbind` live here rather than on either
//! store.

mod catalog;
mod ledger;
mod offerings;

pub use catalog::Catalog;
pub use ledger::StudentLedger;
pub use offerings::{CourseDensity, OfferingIndex};

use std::collections::BTreeSet;

use crate::config::MatcherConfig;
use crate::error::{MatchError, MatchResult};
use crate::models::{
    ConflictReason, CourseId, OfferingId, RequestId, RequestState, Slot, StudentId,
};

/// All loaded entities for one matching run.
#[derive(Debug, Clone)]
pub struct SchedulingData {
    /// Course metadata.
    pub catalog: Catalog,
    /// Offerings.
    pub offerings: OfferingIndex,
    /// Students and requests.
    pub ledger: StudentLedger,
}

impl SchedulingData {
    /// Creates empty stores over a `semesters x periods` grid.
    pub fn new(semesters: usize, periods: usize) -> Self {
        Self {
            catalog: Catalog::new(),
            offerings: OfferingIndex::new(semesters, periods),
            ledger: StudentLedger::new(),
        }
    }

    /// Creates empty stores sized from a config.
    pub fn with_config(config: &MatcherConfig) -> Self {
        Self::new(config.semesters, config.periods)
    }

    /// Binds an unplaced request to an offering of its course.
    ///
    /// Seats are re-read from the offering at call time. Binding a request
    /// that is already bound is a caller error and leaves state untouched.
    pub fn bind(&mut self, request: RequestId, offering: OfferingId) -> MatchResult<()> {
        let req = self
            .ledger
            .request(request)
            .ok_or(MatchError::UnknownRequest(request))?;
        if let RequestState::Bound(existing) = req.state {
            return Err(MatchError::AlreadyBound {
                request,
                offering: existing,
            });
        }
        let requested = req.course;

        let target = self
            .offerings
            .get_mut(offering)
            .ok_or(MatchError::UnknownOffering(offering))?;
        if target.course != requested {
            return Err(MatchError::CourseMismatch {
                request,
                offering,
                requested,
                offered: target.course,
            });
        }
        if !target.has_seat() {
            return Err(MatchError::OfferingFull(offering));
        }

        target.enrolled.push(request);
        if let Some(req) = self.ledger.request_mut(request) {
            req.state = RequestState::Bound(offering);
        }
        Ok(())
    }

    /// Returns a bound request to the unscheduled set and frees its seat.
    pub fn unbind(&mut self, request: RequestId) -> MatchResult<OfferingId> {
        let req = self
            .ledger
            .request_mut(request)
            .ok_or(MatchError::UnknownRequest(request))?;
        let offering = req.bound_offering().ok_or(MatchError::NotBound(request))?;
        req.state = RequestState::Unscheduled;

        if let Some(target) = self.offerings.get_mut(offering) {
            target.enrolled.retain(|&r| r != request);
        }
        Ok(offering)
    }

    /// Unbinds the student's request that holds `course` at `slot`.
    pub fn remove_student_from_course(
        &mut self,
        student: StudentId,
        slot: Slot,
        course: CourseId,
    ) -> MatchResult<RequestId> {
        let offering = self
            .offerings
            .offering_at(slot, course)
            .ok_or_else(|| MatchError::NoOfferingAt {
                course: self.course_name(course),
                slot,
            })?;
        let request = self
            .ledger
            .requests_of(student)
            .iter()
            .copied()
            .find(|&r| {
                self.ledger
                    .request(r)
                    .is_some_and(|req| req.bound_offering() == Some(offering))
            })
            .ok_or(MatchError::NotEnrolled { student, offering })?;
        self.unbind(request)?;
        Ok(request)
    }

    pub(crate) fn mark_conflict(&mut self, request: RequestId, reason: ConflictReason) {
        if let Some(req) = self.ledger.request_mut(request) {
            req.state = RequestState::Conflict(reason);
        }
    }

    /// Slots the student is committed to, including double-period partners.
    pub fn occupied_periods(&self, student: StudentId) -> BTreeSet<Slot> {
        self.ledger
            .occupied_periods(student, &self.catalog, &self.offerings)
    }

    /// Number of bound requests per semester for the student.
    pub fn load_by_semester(&self, student: StudentId) -> Vec<usize> {
        self.ledger.load_by_semester(student, &self.offerings)
    }

    /// Each requested course with its bound slot, in request order.
    pub fn schedule_of(&self, student: StudentId) -> Vec<(CourseId, Option<Slot>)> {
        self.ledger.schedule_of(student, &self.offerings)
    }

    /// Courses the student holds in one semester, by period.
    pub fn schedule_in_semester(
        &self,
        student: StudentId,
        semester: usize,
    ) -> Vec<(Slot, CourseId)> {
        let mut out: Vec<(Slot, CourseId)> = self
            .schedule_of(student)
            .into_iter()
            .filter_map(|(course, slot)| slot.map(|s| (s, course)))
            .filter(|(s, _)| s.semester == semester)
            .collect();
        out.sort();
        out
    }

    /// Course name for a handle, or the handle itself if unknown.
    pub fn course_name(&self, course: CourseId) -> String {
        self.catalog
            .get(course)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| course.to_string())
    }
}
