//! Request priority ranking.
//!
//! Orders unscheduled requests by how hard they are to place, so the
//! greedy matcher handles the constrained ones while seats remain.
//!
//! # Usage
//!
//! ```
//! use u_enroll::priority::PriorityRanker;
//! use u_enroll::config::TieBreak;
//!
//! let ranker = PriorityRanker::standard().with_tie_break(TieBreak::Sequence);
//! assert_eq!(ranker.rule_names(), vec!["FLEX", "PSCARCE", "SSCARCE"]);
//! ```
//!
//! # Score
//!
//! `flexibility x period_scarcity x seat_scarcity (+ optional jitter)`.
//! Every factor is small for hard requests: students with few free
//! periods, courses offered in few periods or with few seats.

mod context;
mod ranker;
pub mod rules;

pub use context::RankingContext;
pub use ranker::{PriorityRanker, RankedRequest};

use crate::models::Request;
use std::fmt::Debug;

/// Score returned by a priority rule.
///
/// Lower scores = harder to place = processed first.
pub type PriorityScore = f64;

/// One factor of a request's priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return values in a small
/// positive range; the ranker multiplies them.
pub trait PriorityRule: Send + Sync + Debug {
    /// Short rule name (e.g., "FLEX").
    fn name(&self) -> &'static str;

    /// Evaluates the factor for one request.
    fn evaluate(&self, request: &Request, context: &RankingContext) -> PriorityScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
