//! Greedy matching pass and its results.
//!
//! # Algorithm
//!
//! `GreedyMatcher` ranks every unscheduled request once, then walks the
//! ranking and binds each request to the open offering that keeps the
//! student's semesters balanced. It is not optimal, and placements are
//! never revisited, but a pass is fast and deterministic.
//!
//! # Results
//!
//! A pass returns a [`MatchOutcome`] (placements and conflicts in decision
//! order). [`MatchSummary`] condenses it into operator metrics, and
//! [`placement_records`] flattens the final state for export.

mod cancel;
mod greedy;
mod outcome;
mod summary;

pub use cancel::CancelToken;
pub use greedy::GreedyMatcher;
pub use outcome::{placement_records, Conflict, MatchOutcome, Placement, PlacementRecord};
pub use summary::MatchSummary;
