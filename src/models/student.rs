//! Student model.

use serde::{Deserialize, Serialize};

/// Descriptive student record.
///
/// The matcher only needs a student's requests; the attributes here feed
/// request-expansion rules that run before matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student name.
    pub name: String,
    /// Class year.
    #[serde(default)]
    pub year: String,
    /// Sport affiliation, if any.
    #[serde(default)]
    pub sport: Option<String>,
    /// Gender (used with `sport` to pick a team practice schedule).
    #[serde(default)]
    pub gender: Option<String>,
}

impl Student {
    /// Creates a student with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the class year.
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the sport affiliation.
    pub fn with_sport(mut self, sport: impl Into<String>, gender: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self.gender = Some(gender.into());
        self
    }

    /// Whether the student plays a sport.
    pub fn is_athlete(&self) -> bool {
        self.sport.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("C1").with_year("2027").with_sport("Soccer", "F");
        assert_eq!(s.name, "C1");
        assert_eq!(s.year, "2027");
        assert!(s.is_athlete());
        assert_eq!(s.gender.as_deref(), Some("F"));
    }

    #[test]
    fn test_empty_sport_is_not_athlete() {
        let mut s = Student::new("C2");
        assert!(!s.is_athlete());
        s.sport = Some(String::new());
        assert!(!s.is_athlete());
    }
}
