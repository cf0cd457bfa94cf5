//! Input validation for matching runs.
//!
//! The matcher assumes referential integrity: every handle it meets
//! resolves in the store it came from. These checks run before a pass and
//! refuse data that breaks that assumption. Detects:
//! - Requests naming an unknown course or student
//! - Offerings naming an unknown course
//! - Courses whose contact periods the slot model cannot express
//! - Bound requests missing from their offering's enrolment list

use std::fmt;

use crate::data::SchedulingData;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A request or offering references a course not in the catalog.
    InvalidCourseReference,
    /// A request references a student not in the ledger.
    InvalidStudentReference,
    /// A course meets for a number of periods other than one or two.
    UnsupportedContact,
    /// A bound request and its offering disagree.
    InconsistentBinding,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates loaded data before matching.
///
/// Checks:
/// 1. All courses meet for one or two periods
/// 2. All offerings reference catalog courses
/// 3. All requests reference catalog courses and known students
/// 4. Every bound request is enrolled in the offering it points at
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_data(data: &SchedulingData) -> ValidationResult {
    let mut errors = Vec::new();

    for (_, course) in data.catalog.iter() {
        if !(1..=2).contains(&course.contact) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnsupportedContact,
                format!(
                    "Course '{}' has {} contact periods",
                    course.name, course.contact
                ),
            ));
        }
    }

    for (id, offering) in data.offerings.iter() {
        if !data.catalog.contains(offering.course) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!("Offering {} references unknown {}", id, offering.course),
            ));
        }
    }

    for req in data.ledger.requests() {
        if !data.catalog.contains(req.course) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCourseReference,
                format!("Request {} references unknown {}", req.id, req.course),
            ));
        }
        if !data.ledger.contains_student(req.student) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidStudentReference,
                format!("Request {} references unknown {}", req.id, req.student),
            ));
        }
        if let Some(offering) = req.bound_offering() {
            let enrolled = data
                .offerings
                .get(offering)
                .is_some_and(|o| o.enrolled().contains(&req.id));
            if !enrolled {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentBinding,
                    format!("Request {} is bound to {} but not enrolled there", req.id, offering),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
