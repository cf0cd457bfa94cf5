//! Matching pass metrics.
//!
//! Condenses a [`MatchOutcome`] and the data it ran on into the figures an
//! operator checks after a run.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Attempted | Requests in the worklist |
//! | Placed / Unresolved | Bound / conflict-set requests |
//! | Conflicts by reason | No offering, schedule collision, seats exhausted |
//! | Placement rate | placed / attempted |
//! | Seat utilization | enrolled / capacity over all offerings |
//! | Placed by semester | Placements per semester index |

use serde::{Deserialize, Serialize};

use super::MatchOutcome;
use crate::data::SchedulingData;
use crate::models::ConflictReason;

/// Pass summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Requests in the worklist.
    pub attempted: usize,
    /// Requests bound by the pass.
    pub placed: usize,
    /// Requests in the conflict set.
    pub unresolved: usize,
    /// Conflicts: no offering with capacity.
    pub no_offering: usize,
    /// Conflicts: every offering collided with the student's schedule.
    pub schedule_collision: usize,
    /// Conflicts: open offerings were full.
    pub seats_exhausted: usize,
    /// Fraction of attempted requests placed (0.0..1.0).
    pub placement_rate: f64,
    /// Fraction of all seats taken after the pass (0.0..1.0).
    pub seat_utilization: f64,
    /// Placements per semester.
    pub placed_by_semester: Vec<usize>,
    /// Whether the pass was cancelled.
    pub cancelled: bool,
}

impl MatchSummary {
    /// Computes the summary of a pass.
    pub fn calculate(outcome: &MatchOutcome, data: &SchedulingData) -> Self {
        let mut placed_by_semester = vec![0; data.offerings.semesters()];
        for p in &outcome.placements {
            if let Some(n) = placed_by_semester.get_mut(p.slot.semester) {
                *n += 1;
            }
        }

        let (enrolled, capacity) = data
            .offerings
            .iter()
            .fold((0u64, 0u64), |(e, c), (_, o)| {
                (e + o.enrolled_count() as u64, c + u64::from(o.capacity))
            });

        let placement_rate = if outcome.attempted == 0 {
            1.0
        } else {
            outcome.placed() as f64 / outcome.attempted as f64
        };
        let seat_utilization = if capacity == 0 {
            0.0
        } else {
            enrolled as f64 / capacity as f64
        };

        Self {
            attempted: outcome.attempted,
            placed: outcome.placed(),
            unresolved: outcome.unresolved(),
            no_offering: outcome.conflicts_with(ConflictReason::NoOffering),
            schedule_collision: outcome.conflicts_with(ConflictReason::ScheduleCollision),
            seats_exhausted: outcome.conflicts_with(ConflictReason::SeatsExhausted),
            placement_rate,
            seat_utilization,
            placed_by_semester,
            cancelled: outcome.cancelled,
        }
    }

    /// Whether every attempted request was placed.
    pub fn is_fully_placed(&self) -> bool {
        self.unresolved == 0 && self.placed == self.attempted
    }

    /// Whether the pass meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_unresolved: usize, min_placement_rate: f64) -> bool {
        self.unresolved <= max_unresolved && self.placement_rate >= min_placement_rate
    }
}
