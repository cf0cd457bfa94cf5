//! Offering index.
//!
//! Owns every [`Offering`] in an arena and indexes it two ways:
//!
//! ```text
//! by_slot:    [semester][period] -> {course -> offering}
//! by_course:  [semester] -> {course -> [period] -> offering?}
//! ```
//!
//! The first answers "what meets at this slot", the second "where does
//! this course meet", which is what the ranker and matcher ask most.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MatchError, MatchResult};
use crate::models::{CourseId, Offering, OfferingId, Slot};

/// Scarcity figures for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseDensity {
    /// Number of positive-capacity offerings.
    pub period_count: usize,
    /// Sum of their capacities.
    pub total_seats: u64,
}

/// Arena of offerings with slot and course indices.
#[derive(Debug, Clone)]
pub struct OfferingIndex {
    semesters: usize,
    periods: usize,
    offerings: Vec<Offering>,
    by_slot: Vec<HashMap<CourseId, OfferingId>>,
    by_course: Vec<HashMap<CourseId, Vec<Option<OfferingId>>>>,
}

impl OfferingIndex {
    /// Creates an empty index over a `semesters x periods` grid.
    pub fn new(semesters: usize, periods: usize) -> Self {
        Self {
            semesters,
            periods,
            offerings: Vec::new(),
            by_slot: vec![HashMap::new(); semesters * periods],
            by_course: vec![HashMap::new(); semesters],
        }
    }

    /// Number of semesters in the grid.
    pub fn semesters(&self) -> usize {
        self.semesters
    }

    /// Number of periods per semester.
    pub fn periods(&self) -> usize {
        self.periods
    }

    /// Whether a slot lies inside the grid.
    #[inline]
    pub fn in_range(&self, slot: Slot) -> bool {
        slot.semester < self.semesters && slot.period < self.periods
    }

    #[inline]
    fn slot_index(&self, slot: Slot) -> usize {
        slot.semester * self.periods + slot.period
    }

    /// Inserts an offering into both indices.
    ///
    /// If the course already meets at that slot, the new capacity is added
    /// to the existing offering (parallel sections merge into one logical
    /// slot) and the existing handle is returned. Merging may happen after
    /// binds; the extra seats are simply available from then on.
    pub fn add_offering(&mut self, offering: Offering) -> MatchResult<OfferingId> {
        let slot = offering.slot;
        if !self.in_range(slot) {
            return Err(MatchError::SlotOutOfRange {
                slot,
                semesters: self.semesters,
                periods: self.periods,
            });
        }

        let idx = self.slot_index(slot);
        if let Some(&existing) = self.by_slot[idx].get(&offering.course) {
            let merged = &mut self.offerings[existing.0];
            merged.capacity = merged
                .capacity
                .checked_add(offering.capacity)
                .ok_or(MatchError::CapacityOverflow {
                    offering: existing,
                    added: offering.capacity,
                })?;
            debug!(
                offering = %existing,
                slot = %slot,
                added = offering.capacity,
                capacity = merged.capacity,
                "merged section into existing offering"
            );
            return Ok(existing);
        }

        let id = OfferingId(self.offerings.len());
        let course = offering.course;
        self.offerings.push(Offering {
            enrolled: Vec::new(),
            ..offering
        });
        self.by_slot[idx].insert(course, id);
        let periods = self.periods;
        self.by_course[slot.semester]
            .entry(course)
            .or_insert_with(|| vec![None; periods])[slot.period] = Some(id);
        Ok(id)
    }

    /// Every slot with a positive-capacity offering of `course`, ordered
    /// by semester then period. Empty means no capacity anywhere.
    pub fn feasible_periods(&self, course: CourseId) -> Vec<Slot> {
        self.course_offerings(course)
            .filter(|(_, o)| o.capacity > 0)
            .map(|(_, o)| o.slot)
            .collect()
    }

    /// Period count and total seats of `course` across all semesters.
    pub fn course_density(&self, course: CourseId) -> CourseDensity {
        self.course_offerings(course)
            .filter(|(_, o)| o.capacity > 0)
            .fold(CourseDensity::default(), |acc, (_, o)| CourseDensity {
                period_count: acc.period_count + 1,
                total_seats: acc.total_seats + u64::from(o.capacity),
            })
    }

    /// Offering of `course` at `slot`.
    pub fn offering_at(&self, slot: Slot, course: CourseId) -> Option<OfferingId> {
        if !self.in_range(slot) {
            return None;
        }
        self.by_slot[self.slot_index(slot)].get(&course).copied()
    }

    /// Offerings of `course` in one semester, by period.
    pub fn offerings_for(
        &self,
        semester: usize,
        course: CourseId,
    ) -> impl Iterator<Item = (OfferingId, &Offering)> + '_ {
        self.by_course
            .get(semester)
            .and_then(|m| m.get(&course))
            .into_iter()
            .flatten()
            .flatten()
            .map(move |&id| (id, &self.offerings[id.0]))
    }

    /// All offerings in one semester, by period then course handle.
    pub fn offerings_in_semester(&self, semester: usize) -> Vec<(OfferingId, &Offering)> {
        let mut out: Vec<(OfferingId, &Offering)> = self
            .offerings
            .iter()
            .enumerate()
            .filter(|(_, o)| o.slot.semester == semester)
            .map(|(i, o)| (OfferingId(i), o))
            .collect();
        out.sort_by_key(|(_, o)| (o.slot.period, o.course));
        out
    }

    fn course_offerings(
        &self,
        course: CourseId,
    ) -> impl Iterator<Item = (OfferingId, &Offering)> + '_ {
        (0..self.semesters).flat_map(move |s| self.offerings_for(s, course))
    }

    /// Offering for a handle.
    pub fn get(&self, id: OfferingId) -> Option<&Offering> {
        self.offerings.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: OfferingId) -> Option<&mut Offering> {
        self.offerings.get_mut(id.0)
    }

    /// All offerings with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (OfferingId, &Offering)> {
        self.offerings
            .iter()
            .enumerate()
            .map(|(i, o)| (OfferingId(i), o))
    }

    /// Number of distinct offerings.
    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATH: CourseId = CourseId(0);
    const CHEM: CourseId = CourseId(1);

    fn sample_index() -> OfferingIndex {
        let mut idx = OfferingIndex::new(3, 8);
        idx.add_offering(Offering::new(MATH, Slot::new(0, 2), 30)).unwrap();
        idx.add_offering(Offering::new(MATH, Slot::new(2, 5), 20)).unwrap();
        idx.add_offering(Offering::new(MATH, Slot::new(1, 1), 0)).unwrap();
        idx.add_offering(Offering::new(CHEM, Slot::new(0, 2), 15)).unwrap();
        idx
    }

    #[test]
    fn test_feasible_periods_skips_zero_capacity() {
        let idx = sample_index();
        assert_eq!(
            idx.feasible_periods(MATH),
            vec![Slot::new(0, 2), Slot::new(2, 5)]
        );
        assert_eq!(idx.feasible_periods(CHEM), vec![Slot::new(0, 2)]);
        assert!(idx.feasible_periods(CourseId(9)).is_empty());
    }

    #[test]
    fn test_course_density() {
        let idx = sample_index();
        assert_eq!(
            idx.course_density(MATH),
            CourseDensity {
                period_count: 2,
                total_seats: 50
            }
        );
        assert_eq!(idx.course_density(CourseId(9)), CourseDensity::default());
    }

    #[test]
    fn test_merge_adds_capacity() {
        let mut idx = OfferingIndex::new(3, 8);
        let a = idx.add_offering(Offering::new(MATH, Slot::new(0, 2), 30)).unwrap();
        let b = idx.add_offering(Offering::new(MATH, Slot::new(0, 2), 25)).unwrap();

        assert_eq!(a, b);
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.get(a).unwrap().capacity, 55);
        assert_eq!(idx.course_density(MATH).period_count, 1);
    }

    #[test]
    fn test_merge_makes_zero_capacity_feasible() {
        let mut idx = OfferingIndex::new(1, 4);
        idx.add_offering(Offering::new(MATH, Slot::new(0, 1), 0)).unwrap();
        assert!(idx.feasible_periods(MATH).is_empty());

        idx.add_offering(Offering::new(MATH, Slot::new(0, 1), 10)).unwrap();
        assert_eq!(idx.feasible_periods(MATH), vec![Slot::new(0, 1)]);
    }

    #[test]
    fn test_density_sums_past_u32() {
        let mut idx = OfferingIndex::new(3, 8);
        idx.add_offering(Offering::new(MATH, Slot::new(0, 1), 3_000_000_000)).unwrap();
        idx.add_offering(Offering::new(MATH, Slot::new(1, 1), 3_000_000_000)).unwrap();
        assert_eq!(idx.course_density(MATH).total_seats, 6_000_000_000);
    }

    #[test]
    fn test_merge_overflow_rejected() {
        let mut idx = OfferingIndex::new(3, 8);
        let a = idx.add_offering(Offering::new(MATH, Slot::new(0, 1), 3_000_000_000)).unwrap();
        let err = idx
            .add_offering(Offering::new(MATH, Slot::new(0, 1), 3_000_000_000))
            .unwrap_err();
        assert!(matches!(err, MatchError::CapacityOverflow { offering, .. } if offering == a));
        assert_eq!(idx.get(a).unwrap().capacity, 3_000_000_000);
    }

    #[test]
    fn test_offering_at() {
        let idx = sample_index();
        let id = idx.offering_at(Slot::new(0, 2), CHEM).unwrap();
        assert_eq!(idx.get(id).unwrap().capacity, 15);
        assert!(idx.offering_at(Slot::new(0, 3), CHEM).is_none());
        assert!(idx.offering_at(Slot::new(7, 0), MATH).is_none());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut idx = OfferingIndex::new(3, 8);
        let err = idx
            .add_offering(Offering::new(MATH, Slot::new(0, 8), 10))
            .unwrap_err();
        assert!(matches!(err, MatchError::SlotOutOfRange { .. }));
        assert!(idx.is_empty());
    }

    #[test]
    fn test_offerings_for_and_in_semester() {
        let idx = sample_index();
        let fall_math: Vec<Slot> = idx.offerings_for(0, MATH).map(|(_, o)| o.slot).collect();
        assert_eq!(fall_math, vec![Slot::new(0, 2)]);

        let fall = idx.offerings_in_semester(0);
        assert_eq!(fall.len(), 2);
        assert_eq!(fall[0].1.course, MATH);
        assert_eq!(fall[1].1.course, CHEM);
        assert!(idx.offerings_in_semester(5).is_empty());
    }

    #[test]
    fn test_incoming_enrolment_is_dropped() {
        let mut idx = OfferingIndex::new(1, 2);
        let mut o = Offering::new(MATH, Slot::new(0, 0), 5);
        o.enrolled.push(crate::models::RequestId(3));
        let id = idx.add_offering(o).unwrap();
        assert_eq!(idx.get(id).unwrap().seats_available(), 5);
    }
}
