//! Student ledger.
//!
//! Owns every [`Request`] and the per-student request lists, and answers
//! the per-student questions the matcher asks: which slots are taken, how
//! many courses sit in each semester, how heavy the requested load is.

use std::collections::{BTreeSet, HashMap};

use crate::error::{MatchError, MatchResult};
use crate::models::{CourseId, Request, RequestId, Slot, Student, StudentId};

use super::{Catalog, OfferingIndex};

#[derive(Debug, Clone)]
struct StudentEntry {
    info: Student,
    requests: Vec<RequestId>,
}

/// Students and their requests.
#[derive(Debug, Clone, Default)]
pub struct StudentLedger {
    students: Vec<StudentEntry>,
    by_name: HashMap<String, StudentId>,
    requests: Vec<Request>,
}

impl StudentLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a student and returns its handle.
    ///
    /// A name that is already registered keeps its first record.
    pub fn add_student(&mut self, student: Student) -> StudentId {
        if let Some(&id) = self.by_name.get(&student.name) {
            return id;
        }
        let id = StudentId(self.students.len());
        self.by_name.insert(student.name.clone(), id);
        self.students.push(StudentEntry {
            info: student,
            requests: Vec::new(),
        });
        id
    }

    /// Appends a request for `course` to the student's list.
    pub fn add_request(&mut self, student: StudentId, course: CourseId) -> MatchResult<RequestId> {
        let entry = self
            .students
            .get_mut(student.0)
            .ok_or_else(|| MatchError::UnknownStudent(student.to_string()))?;
        let id = RequestId(self.requests.len());
        entry.requests.push(id);
        self.requests.push(Request::new(id, student, course));
        Ok(id)
    }

    /// Resolves a student name.
    pub fn lookup(&self, name: &str) -> Option<StudentId> {
        self.by_name.get(name).copied()
    }

    /// Student record for a handle.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0).map(|e| &e.info)
    }

    /// The student's requests in insertion order.
    pub fn requests_of(&self, student: StudentId) -> &[RequestId] {
        self.students
            .get(student.0)
            .map(|e| e.requests.as_slice())
            .unwrap_or_default()
    }

    /// Request for a handle.
    pub fn request(&self, id: RequestId) -> Option<&Request> {
        self.requests.get(id.0)
    }

    pub(crate) fn request_mut(&mut self, id: RequestId) -> Option<&mut Request> {
        self.requests.get_mut(id.0)
    }

    /// All requests in insertion order.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// All students with their handles.
    pub fn students(&self) -> impl Iterator<Item = (StudentId, &Student)> {
        self.students
            .iter()
            .enumerate()
            .map(|(i, e)| (StudentId(i), &e.info))
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether the handle belongs to this ledger.
    pub fn contains_student(&self, id: StudentId) -> bool {
        id.0 < self.students.len()
    }

    /// Unscheduled requests in insertion order.
    pub fn unscheduled(&self) -> Vec<RequestId> {
        self.requests
            .iter()
            .filter(|r| r.is_unscheduled())
            .map(|r| r.id)
            .collect()
    }

    /// Requests in the conflict set, in insertion order.
    pub fn conflicts(&self) -> Vec<RequestId> {
        self.requests
            .iter()
            .filter(|r| r.conflict_reason().is_some())
            .map(|r| r.id)
            .collect()
    }

    /// Slots the student is committed to.
    ///
    /// Each bound request contributes its slot. A bound double-period
    /// course anchored on an odd period also contributes the preceding
    /// period of the same semester.
    pub fn occupied_periods(
        &self,
        student: StudentId,
        catalog: &Catalog,
        offerings: &OfferingIndex,
    ) -> BTreeSet<Slot> {
        let mut occupied = BTreeSet::new();
        for (slot, course) in self.bound_slots(student, offerings) {
            occupied.insert(slot);
            if catalog.get(course).is_some_and(|c| c.is_double_period()) {
                if let Some(partner) = slot.double_period_partner() {
                    occupied.insert(partner);
                }
            }
        }
        occupied
    }

    /// Number of bound requests per semester.
    pub fn load_by_semester(&self, student: StudentId, offerings: &OfferingIndex) -> Vec<usize> {
        let mut load = vec![0; offerings.semesters()];
        for (slot, _) in self.bound_slots(student, offerings) {
            load[slot.semester] += 1;
        }
        load
    }

    /// Sum of contact periods over every course the student requested,
    /// bound or not.
    pub fn contact_load(&self, student: StudentId, catalog: &Catalog) -> u32 {
        self.requests_of(student)
            .iter()
            .filter_map(|&r| catalog.get(self.requests[r.0].course))
            .map(|c| c.contact)
            .sum()
    }

    /// Each requested course with its bound slot, in request order.
    pub fn schedule_of(
        &self,
        student: StudentId,
        offerings: &OfferingIndex,
    ) -> Vec<(CourseId, Option<Slot>)> {
        self.requests_of(student)
            .iter()
            .map(|&r| {
                let req = &self.requests[r.0];
                let slot = req
                    .bound_offering()
                    .and_then(|o| offerings.get(o))
                    .map(|o| o.slot);
                (req.course, slot)
            })
            .collect()
    }

    fn bound_slots<'a>(
        &'a self,
        student: StudentId,
        offerings: &'a OfferingIndex,
    ) -> impl Iterator<Item = (Slot, CourseId)> + 'a {
        self.requests_of(student).iter().filter_map(move |&r| {
            let req = &self.requests[r.0];
            req.bound_offering()
                .and_then(|o| offerings.get(o))
                .map(|o| (o.slot, req.course))
        })
    }
}
