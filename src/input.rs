//! Name-keyed input records.
//!
//! Ingestion hands the matcher entities that refer to each other by name.
//! [`ScheduleInput::into_data`] interns those names into handles once, so
//! nothing past loading compares strings.
//!
//! ```json
//! {
//!   "courses":   [{ "name": "Math 100", "contact": 1 }],
//!   "students":  [{ "name": "S1" }],
//!   "offerings": [{ "course": "Math 100", "semester": 0, "period": 2, "capacity": 30 }],
//!   "requests":  [{ "student": "S1", "course": "Math 100" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MatcherConfig;
use crate::data::SchedulingData;
use crate::error::{MatchError, MatchResult};
use crate::models::{Course, Offering, Slot, Student};

/// A course meeting at one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingRecord {
    /// Course name.
    pub course: String,
    /// Semester index.
    pub semester: usize,
    /// Period index within the semester.
    pub period: usize,
    /// Seats offered.
    pub capacity: u32,
}

/// A student's demand for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Student name.
    pub student: String,
    /// Course name.
    pub course: String,
}

/// Everything one matching run loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleInput {
    /// Course catalog.
    pub courses: Vec<Course>,
    /// Student roster.
    pub students: Vec<Student>,
    /// Offerings, including prior commitments such as team practices.
    pub offerings: Vec<OfferingRecord>,
    /// Requests in insertion order.
    pub requests: Vec<RequestRecord>,
}

impl ScheduleInput {
    /// Parses records from JSON.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Resolves names into handles and builds the stores.
    ///
    /// Offerings and requests must name catalog courses and roster
    /// students; the first unresolved name fails the load. Repeated
    /// offerings at one slot merge their capacity.
    pub fn into_data(self, config: &MatcherConfig) -> MatchResult<SchedulingData> {
        let mut data = SchedulingData::with_config(config);

        for course in self.courses {
            data.catalog.add_course(course);
        }
        for student in self.students {
            data.ledger.add_student(student);
        }

        for record in self.offerings {
            let course = data
                .catalog
                .lookup(&record.course)
                .ok_or_else(|| MatchError::UnknownCourse(record.course.clone()))?;
            let slot = Slot::new(record.semester, record.period);
            data.offerings
                .add_offering(Offering::new(course, slot, record.capacity))?;
        }

        for record in self.requests {
            let student = data
                .ledger
                .lookup(&record.student)
                .ok_or_else(|| MatchError::UnknownStudent(record.student.clone()))?;
            let course = data
                .catalog
                .lookup(&record.course)
                .ok_or_else(|| MatchError::UnknownCourse(record.course.clone()))?;
            data.ledger.add_request(student, course)?;
        }

        debug!(
            courses = data.catalog.len(),
            students = data.ledger.student_count(),
            offerings = data.offerings.len(),
            requests = data.ledger.requests().len(),
            "loaded input"
        );
        Ok(data)
    }
}
