//! Course (catalog entry) model.
//!
//! A course is static metadata: what it is worth and how many consecutive
//! periods one meeting occupies. Concrete times and seats live on
//! [`Offering`](super::Offering)s.

use serde::{Deserialize, Serialize};

/// A catalog course.
///
/// Immutable once loaded into a [`Catalog`](crate::data::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course name (e.g., "Math 100").
    pub name: String,
    /// Owning department.
    #[serde(default)]
    pub department: String,
    /// Credit value.
    #[serde(default)]
    pub credits: f64,
    /// Consecutive periods one meeting occupies (1 = single, 2 = double).
    #[serde(default = "default_contact")]
    pub contact: u32,
    /// Minimum seats per section.
    #[serde(default)]
    pub min_seats: u32,
    /// Maximum seats per section.
    #[serde(default)]
    pub max_seats: u32,
}

fn default_contact() -> u32 {
    1
}

impl Course {
    /// Creates a single-period course with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: String::new(),
            credits: 0.0,
            contact: 1,
            min_seats: 0,
            max_seats: 0,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the contact periods per meeting.
    pub fn with_contact(mut self, contact: u32) -> Self {
        self.contact = contact;
        self
    }

    /// Sets the per-section seat bounds.
    pub fn with_seat_bounds(mut self, min_seats: u32, max_seats: u32) -> Self {
        self.min_seats = min_seats;
        self.max_seats = max_seats;
        self
    }

    /// Whether one meeting spans two periods.
    #[inline]
    pub fn is_double_period(&self) -> bool {
        self.contact == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("Chem 100")
            .with_department("Chemistry")
            .with_credits(3.5)
            .with_contact(2)
            .with_seat_bounds(12, 24);

        assert_eq!(c.name, "Chem 100");
        assert_eq!(c.department, "Chemistry");
        assert!((c.credits - 3.5).abs() < 1e-10);
        assert_eq!(c.contact, 2);
        assert_eq!((c.min_seats, c.max_seats), (12, 24));
        assert!(c.is_double_period());
    }

    #[test]
    fn test_course_defaults_single_period() {
        let c = Course::new("Math 100");
        assert_eq!(c.contact, 1);
        assert!(!c.is_double_period());
    }

    #[test]
    fn test_course_deserialize_defaults() {
        let c: Course = serde_json::from_str(r#"{"name": "Hist 101"}"#).unwrap();
        assert_eq!(c.name, "Hist 101");
        assert_eq!(c.contact, 1);
        assert_eq!(c.max_seats, 0);
    }
}
