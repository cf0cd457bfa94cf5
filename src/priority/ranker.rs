//! Priority ranker.
//!
//! Multiplies the factors of its rules into one score per request and
//! orders the unscheduled requests by it, lowest first.

use std::cmp::Ordering;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::rules::{PeriodScarcity, SeatScarcity, StudentFlexibility};
use super::{PriorityRule, PriorityScore, RankingContext};
use crate::config::TieBreak;
use crate::data::SchedulingData;
use crate::models::{Request, RequestId};

/// Upper bound (exclusive) of the random tie-break perturbation.
const JITTER: f64 = 0.01;

/// A request with its computed score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRequest {
    /// Ranked request.
    pub request: RequestId,
    /// Composite score (lower = earlier).
    pub score: PriorityScore,
    /// Position among the unscheduled requests at ranking time.
    pub sequence: usize,
}

/// Composes priority rules into a processing order.
///
/// # Example
/// ```
/// use u_enroll::priority::{PriorityRanker, rules};
///
/// let ranker = PriorityRanker::new()
///     .with_rule(rules::PeriodScarcity)
///     .with_rule(rules::SeatScarcity);
/// assert_eq!(ranker.rule_names(), vec!["PSCARCE", "SSCARCE"]);
/// ```
#[derive(Clone)]
pub struct PriorityRanker {
    rules: Vec<Arc<dyn PriorityRule>>,
    tie_break: TieBreak,
}

impl PriorityRanker {
    /// Creates a ranker with no rules; every request scores 1.0.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_break: TieBreak::Sequence,
        }
    }

    /// Flexibility x period scarcity x seat scarcity.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(StudentFlexibility)
            .with_rule(PeriodScarcity)
            .with_rule(SeatScarcity)
    }

    /// Adds a factor.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Names of the configured rules, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Deterministic part of a request's score.
    pub fn score(&self, request: &Request, context: &RankingContext) -> PriorityScore {
        self.rules
            .iter()
            .map(|r| r.evaluate(request, context))
            .product()
    }

    /// Ranks every unscheduled request, hardest first.
    ///
    /// Scores are computed once here. Equal scores keep insertion order;
    /// with [`TieBreak::Random`] a seeded jitter in `[0, 0.01)` is added
    /// first, drawn in insertion order so a seed reproduces the ranking.
    pub fn rank(&self, data: &SchedulingData, context: &RankingContext) -> Vec<RankedRequest> {
        let mut rng = match self.tie_break {
            TieBreak::Sequence => None,
            TieBreak::Random { seed } => Some(StdRng::seed_from_u64(seed)),
        };

        let mut ranked: Vec<RankedRequest> = data
            .ledger
            .requests()
            .iter()
            .filter(|r| r.is_unscheduled())
            .enumerate()
            .map(|(sequence, req)| {
                let jitter = rng.as_mut().map_or(0.0, |g| g.random::<f64>() * JITTER);
                RankedRequest {
                    request: req.id,
                    score: self.score(req, context) + jitter,
                    sequence,
                }
            })
            .collect();

        ranked.sort_by(|a, b| match a.score.total_cmp(&b.score) {
            Ordering::Equal => a.sequence.cmp(&b.sequence),
            other => other,
        });
        ranked
    }
}

impl Default for PriorityRanker {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PriorityRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityRanker")
            .field("rules", &self.rule_names())
            .field("tie_break", &self.tie_break)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Offering, Slot, Student};

    /// Two students: "busy" requests 19 periods, "free" requests 2.
    /// "Rare" meets once with 10 seats, "Common" meets 9 times with 40 each,
    /// "Filler" meets once with 200 seats.
    fn sample_data() -> SchedulingData {
        let mut data = SchedulingData::new(3, 8);
        let rare = data.catalog.add_course(Course::new("Rare"));
        let common = data.catalog.add_course(Course::new("Common"));
        let filler = data.catalog.add_course(Course::new("Filler").with_contact(2));
        data.offerings
            .add_offering(Offering::new(rare, Slot::new(0, 0), 10))
            .unwrap();
        data.offerings
            .add_offering(Offering::new(filler, Slot::new(0, 7), 200))
            .unwrap();
        for s in 0..3 {
            for p in 0..3 {
                data.offerings
                    .add_offering(Offering::new(common, Slot::new(s, p), 40))
                    .unwrap();
            }
        }

        let free = data.ledger.add_student(Student::new("free"));
        let busy = data.ledger.add_student(Student::new("busy"));
        data.ledger.add_request(free, common).unwrap();
        data.ledger.add_request(free, rare).unwrap();
        data.ledger.add_request(busy, common).unwrap();
        for _ in 0..9 {
            data.ledger.add_request(busy, filler).unwrap();
        }
        data
    }

    #[test]
    fn test_standard_scores() {
        let data = sample_data();
        let ctx = RankingContext::build(&data, 24);
        let ranker = PriorityRanker::standard();

        // free: 22 free → 1.0; Common: 9 periods → 1.01; 360 seats → 1.0
        let free_common = &data.ledger.requests()[0];
        assert!((ranker.score(free_common, &ctx) - 1.01).abs() < 1e-10);

        // free/Rare: 1.0 * 0.01 * 0.1
        let free_rare = &data.ledger.requests()[1];
        assert!((ranker.score(free_rare, &ctx) - 0.001).abs() < 1e-10);

        // busy: 24 - 19 = 5 free → 1/3; Common → 1.01
        let busy_common = &data.ledger.requests()[2];
        assert!((ranker.score(busy_common, &ctx) - 1.01 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_rank_orders_hardest_first() {
        let data = sample_data();
        let ctx = RankingContext::build(&data, 24);
        let ranked = PriorityRanker::standard().rank(&data, &ctx);

        assert_eq!(ranked.len(), data.ledger.requests().len());
        assert_eq!(ranked[0].request, data.ledger.requests()[1].id);
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
        let last = ranked.last().unwrap();
        assert_eq!(last.request, data.ledger.requests()[0].id);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let data = sample_data();
        let ctx = RankingContext::build(&data, 24);
        let ranked = PriorityRanker::standard().rank(&data, &ctx);

        // The nine Filler requests tie; their sequence numbers must ascend.
        let filler: Vec<usize> = ranked
            .iter()
            .filter(|r| r.request.index() >= 3)
            .map(|r| r.sequence)
            .collect();
        assert_eq!(filler, (3..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_random_tie_break_is_seeded() {
        let data = sample_data();
        let ctx = RankingContext::build(&data, 24);
        let ranker = PriorityRanker::standard().with_tie_break(TieBreak::Random { seed: 7 });

        let a = ranker.rank(&data, &ctx);
        let b = ranker.rank(&data, &ctx);
        assert_eq!(a, b);

        let plain = PriorityRanker::standard().rank(&data, &ctx);
        for r in &a {
            let base = plain.iter().find(|p| p.request == r.request).unwrap().score;
            assert!(r.score >= base && r.score < base + JITTER);
        }
    }

    #[test]
    fn test_skips_placed_requests() {
        let mut data = sample_data();
        let first = data.ledger.requests()[0].id;
        let common = data.catalog.lookup("Common").unwrap();
        let offering = data.offerings.offering_at(Slot::new(0, 0), common).unwrap();
        data.bind(first, offering).unwrap();

        let ctx = RankingContext::build(&data, 24);
        let ranked = PriorityRanker::standard().rank(&data, &ctx);
        assert_eq!(ranked.len(), data.ledger.requests().len() - 1);
        assert!(ranked.iter().all(|r| r.request != first));
    }

    #[test]
    fn test_empty_ranker_scores_one() {
        let data = sample_data();
        let ctx = RankingContext::build(&data, 24);
        let ranker = PriorityRanker::new();
        assert!((ranker.score(&data.ledger.requests()[0], &ctx) - 1.0).abs() < 1e-10);
    }
}
