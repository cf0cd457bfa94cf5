//! Ranking context for priority rule evaluation.

use std::collections::HashMap;

use crate::data::{CourseDensity, SchedulingData};
use crate::models::{CourseId, StudentId};

/// Figures the priority rules read, computed once per pass.
///
/// Built in a single batch before matching starts and never refreshed:
/// the figures go stale as seats fill, which the ranking accepts.
#[derive(Debug, Clone, Default)]
pub struct RankingContext {
    /// Periods a student can attend over the year.
    pub period_budget: u32,
    /// Requested contact periods per student.
    pub contact_load: HashMap<StudentId, u32>,
    /// Offering density per requested course.
    pub densities: HashMap<CourseId, CourseDensity>,
}

impl RankingContext {
    /// Snapshots the figures for every student and course with a request.
    pub fn build(data: &SchedulingData, period_budget: u32) -> Self {
        let mut contact_load = HashMap::new();
        let mut densities = HashMap::new();
        for req in data.ledger.requests() {
            contact_load
                .entry(req.student)
                .or_insert_with(|| data.ledger.contact_load(req.student, &data.catalog));
            densities
                .entry(req.course)
                .or_insert_with(|| data.offerings.course_density(req.course));
        }
        Self {
            period_budget,
            contact_load,
            densities,
        }
    }

    /// Free periods a student has left after all requests (may be negative).
    pub fn free_periods(&self, student: StudentId) -> i64 {
        let load = self.contact_load.get(&student).copied().unwrap_or(0);
        i64::from(self.period_budget) - i64::from(load)
    }

    /// Offering density of a course.
    pub fn density(&self, course: CourseId) -> CourseDensity {
        self.densities.get(&course).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Offering, Slot, Student};

    #[test]
    fn test_build_snapshots_loads_and_densities() {
        let mut data = SchedulingData::new(3, 8);
        let math = data.catalog.add_course(Course::new("Math 100"));
        let lab = data.catalog.add_course(Course::new("Chem Lab").with_contact(2));
        data.offerings
            .add_offering(Offering::new(math, Slot::new(0, 1), 40))
            .unwrap();
        data.offerings
            .add_offering(Offering::new(math, Slot::new(1, 1), 40))
            .unwrap();
        let s = data.ledger.add_student(Student::new("S1"));
        data.ledger.add_request(s, math).unwrap();
        data.ledger.add_request(s, lab).unwrap();

        let ctx = RankingContext::build(&data, 24);
        assert_eq!(ctx.free_periods(s), 21);
        assert_eq!(ctx.density(math).period_count, 2);
        assert_eq!(ctx.density(math).total_seats, 80);
        assert_eq!(ctx.density(lab), CourseDensity::default());
    }

    #[test]
    fn test_unknown_student_has_full_budget() {
        let ctx = RankingContext {
            period_budget: 24,
            ..Default::default()
        };
        assert_eq!(ctx.free_periods(StudentId(3)), 24);
    }
}
