//! Enrollment domain models.
//!
//! Plain entity types shared by the data model, the ranker and the
//! matcher. Cross references between entities are handles, never
//! pointers: an offering lists the requests enrolled in it, and a
//! request names the offering it is bound to.
//!
//! | Entity | Meaning |
//! |--------|---------|
//! | `Course` | Catalog entry: credits, contact periods, seat bounds |
//! | `Offering` | A course at a (semester, period) with seats |
//! | `Request` | A student's demand for a course |
//! | `Student` | Descriptive student record |

mod course;
mod ids;
mod offering;
mod request;
mod student;

pub use course::Course;
pub use ids::{CourseId, OfferingId, RequestId, Slot, StudentId};
pub use offering::Offering;
pub use request::{ConflictReason, Request, RequestState};
pub use student::Student;
