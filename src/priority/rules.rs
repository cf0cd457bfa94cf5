//! Built-in priority rules.
//!
//! | Rule | Factor | Small when |
//! |------|--------|-----------|
//! | FLEX | student flexibility | student has few free periods |
//! | PSCARCE | period scarcity | course meets in few periods |
//! | SSCARCE | seat scarcity | course has few seats in total |
//!
//! # Score Convention
//! All rules return lower scores for harder-to-place requests.

use super::{PriorityRule, PriorityScore, RankingContext};
use crate::models::Request;

/// Free periods at or above which a student counts as fully flexible.
pub const FLEXIBLE_FREE_PERIODS: i64 = 15;

/// Maps free periods to `[0, 1]`.
pub fn normalize_flexibility(free_periods: i64) -> f64 {
    if free_periods <= 0 {
        0.0
    } else if free_periods >= FLEXIBLE_FREE_PERIODS {
        1.0
    } else {
        free_periods as f64 / FLEXIBLE_FREE_PERIODS as f64
    }
}

/// Maps an offering count to a factor that is never exactly zero for a
/// single offering, so one scarce course does not flatten the product.
///
/// A course with no offering maps to 0.0 and ranks first; it can only end
/// as a no-offering conflict.
pub fn normalize_period_count(period_count: usize) -> f64 {
    if period_count == 0 {
        return 0.0;
    }
    (period_count as f64 - 1.0) / 8.0 + 0.01
}

/// Buckets total seats into three bands.
pub fn normalize_seats(total_seats: u64) -> f64 {
    if total_seats < 30 {
        0.1
    } else if total_seats < 100 {
        0.5
    } else {
        1.0
    }
}

/// Student flexibility.
///
/// `free = period_budget - sum(contact of every requested course)`,
/// normalized to `[0, 1]`. Students with little room go first.
#[derive(Debug, Clone, Copy)]
pub struct StudentFlexibility;

impl PriorityRule for StudentFlexibility {
    fn name(&self) -> &'static str {
        "FLEX"
    }

    fn evaluate(&self, request: &Request, context: &RankingContext) -> PriorityScore {
        normalize_flexibility(context.free_periods(request.student))
    }

    fn description(&self) -> &'static str {
        "Student Flexibility"
    }
}

/// Course period scarcity.
///
/// Courses offered in few (semester, period) slots go first.
#[derive(Debug, Clone, Copy)]
pub struct PeriodScarcity;

impl PriorityRule for PeriodScarcity {
    fn name(&self) -> &'static str {
        "PSCARCE"
    }

    fn evaluate(&self, request: &Request, context: &RankingContext) -> PriorityScore {
        normalize_period_count(context.density(request.course).period_count)
    }

    fn description(&self) -> &'static str {
        "Course Period Scarcity"
    }
}

/// Course seat scarcity.
///
/// Courses with few seats across all offerings go first.
#[derive(Debug, Clone, Copy)]
pub struct SeatScarcity;

impl PriorityRule for SeatScarcity {
    fn name(&self) -> &'static str {
        "SSCARCE"
    }

    fn evaluate(&self, request: &Request, context: &RankingContext) -> PriorityScore {
        normalize_seats(context.density(request.course).total_seats)
    }

    fn description(&self) -> &'static str {
        "Course Seat Scarcity"
    }
}
