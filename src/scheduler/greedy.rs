//! Priority-driven greedy matcher.
//!
//! # Algorithm
//!
//! 1. Validate the data and snapshot the ranking context.
//! 2. Rank every unscheduled request once, hardest first.
//! 3. For each request in that order:
//!    - collect slots where the course has positive capacity;
//!    - drop slots the student already occupies (double-period partners
//!      included);
//!    - per semester, keep the open slot with the most free seats;
//!    - pick the semester where the student holds the fewest courses,
//!      breaking ties by free seats, then by earliest semester;
//!    - bind, or record a conflict.
//!
//! Placements are never revisited within a pass.
//!
//! # Complexity
//! O(n * (s * p + k)) where n=requests, s=semesters, p=periods,
//! k=requests per student.

use tracing::{debug, info, warn};

use super::{CancelToken, Conflict, MatchOutcome, MatchSummary, Placement};
use crate::config::{DoublePeriodPolicy, MatcherConfig};
use crate::data::SchedulingData;
use crate::error::{MatchError, MatchResult};
use crate::models::{ConflictReason, CourseId, OfferingId, RequestId, Slot};
use crate::priority::{PriorityRanker, RankingContext};
use crate::validation::validate_data;

/// Best open offering within one semester.
#[derive(Debug, Clone, Copy)]
struct SemesterChoice {
    semester: usize,
    offering: OfferingId,
    slot: Slot,
    seats: u32,
}

/// Greedy student-to-offering matcher.
///
/// # Example
///
/// ```
/// use u_enroll::config::MatcherConfig;
/// use u_enroll::data::SchedulingData;
/// use u_enroll::models::{Course, Offering, Slot, Student};
/// use u_enroll::scheduler::GreedyMatcher;
///
/// let config = MatcherConfig::default();
/// let mut data = SchedulingData::with_config(&config);
/// let math = data.catalog.add_course(Course::new("Math 100"));
/// data.offerings.add_offering(Offering::new(math, Slot::new(0, 2), 30)).unwrap();
/// let s1 = data.ledger.add_student(Student::new("S1"));
/// let r = data.ledger.add_request(s1, math).unwrap();
///
/// let outcome = GreedyMatcher::new(config).run(&mut data).unwrap();
/// assert_eq!(outcome.placed(), 1);
/// assert_eq!(outcome.placement_for(r).unwrap().slot, Slot::new(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct GreedyMatcher {
    config: MatcherConfig,
    ranker: PriorityRanker,
}

impl GreedyMatcher {
    /// Creates a matcher with the standard ranker.
    pub fn new(config: MatcherConfig) -> Self {
        let ranker = PriorityRanker::standard().with_tie_break(config.tie_break);
        Self { config, ranker }
    }

    /// Replaces the ranker.
    pub fn with_ranker(mut self, ranker: PriorityRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Matcher settings.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Runs one full pass over the unscheduled requests.
    pub fn run(&self, data: &mut SchedulingData) -> MatchResult<MatchOutcome> {
        self.run_with_cancel(data, &CancelToken::new())
    }

    /// Runs one pass, stopping between requests once `cancel` is set.
    ///
    /// A cancelled pass keeps what it already placed; requests not yet
    /// reached stay unscheduled.
    pub fn run_with_cancel(
        &self,
        data: &mut SchedulingData,
        cancel: &CancelToken,
    ) -> MatchResult<MatchOutcome> {
        validate_data(data).map_err(MatchError::InvalidInput)?;

        let context = RankingContext::build(data, self.config.period_budget);
        let worklist = self.ranker.rank(data, &context);
        info!(
            requests = worklist.len(),
            students = data.ledger.student_count(),
            offerings = data.offerings.len(),
            "starting matching pass"
        );

        let mut outcome = MatchOutcome {
            attempted: worklist.len(),
            ..Default::default()
        };

        for ranked in &worklist {
            if cancel.is_cancelled() {
                warn!(remaining = outcome.skipped(), "matching pass cancelled");
                outcome.cancelled = true;
                break;
            }
            match self.place(data, ranked.request)? {
                Ok(placement) => outcome.placements.push(placement),
                Err(conflict) => outcome.conflicts.push(conflict),
            }
        }

        let summary = MatchSummary::calculate(&outcome, data);
        info!(
            placed = summary.placed,
            unresolved = summary.unresolved,
            no_offering = summary.no_offering,
            schedule_collision = summary.schedule_collision,
            seats_exhausted = summary.seats_exhausted,
            "matching pass complete"
        );
        Ok(outcome)
    }

    /// Places one request, or records why it cannot be placed.
    ///
    /// The outer `Result` carries caller-misuse errors; the inner one
    /// separates placements from conflicts.
    fn place(
        &self,
        data: &mut SchedulingData,
        request: RequestId,
    ) -> MatchResult<Result<Placement, Conflict>> {
        let req = data
            .ledger
            .request(request)
            .ok_or(MatchError::UnknownRequest(request))?;
        let (student, course) = (req.student, req.course);

        let conflict =
            |data: &mut SchedulingData, reason: ConflictReason| -> Result<Placement, Conflict> {
                data.mark_conflict(request, reason);
                Err(Conflict {
                    request,
                    student,
                    course,
                    reason,
                })
            };

        let candidates = data.offerings.feasible_periods(course);
        if candidates.is_empty() {
            warn!(
                request = %request,
                course = %data.course_name(course),
                "no offering with capacity"
            );
            return Ok(conflict(data, ConflictReason::NoOffering));
        }

        let occupied = data.occupied_periods(student);
        let reserve_partner = self.config.double_period == DoublePeriodPolicy::ReserveOnPlacement
            && data.catalog.course(course).is_double_period();
        let open: Vec<Slot> = candidates
            .into_iter()
            .filter(|slot| !occupied.contains(slot))
            .filter(|slot| {
                !reserve_partner
                    || slot
                        .double_period_partner()
                        .map_or(true, |partner| !occupied.contains(&partner))
            })
            .collect();
        if open.is_empty() {
            debug!(request = %request, student = %student, "all offerings collide");
            return Ok(conflict(data, ConflictReason::ScheduleCollision));
        }

        let Some(choice) = self.choose(data, course, &open, &data.load_by_semester(student))
        else {
            debug!(request = %request, course = %data.course_name(course), "open offerings full");
            return Ok(conflict(data, ConflictReason::SeatsExhausted));
        };

        data.bind(request, choice.offering)?;
        debug!(
            request = %request,
            student = %student,
            slot = %choice.slot,
            seats_left = choice.seats - 1,
            "placed"
        );
        Ok(Ok(Placement {
            request,
            student,
            course,
            offering: choice.offering,
            slot: choice.slot,
        }))
    }

    /// Picks the offering to bind among open slots.
    ///
    /// Seats are read from the offerings now, not from the ranking
    /// snapshot. Returns `None` when every open offering is full.
    fn choose(
        &self,
        data: &SchedulingData,
        course: CourseId,
        open: &[Slot],
        load: &[usize],
    ) -> Option<SemesterChoice> {
        let mut best_per_semester: Vec<Option<SemesterChoice>> =
            vec![None; data.offerings.semesters()];
        for &slot in open {
            let Some(offering) = data.offerings.offering_at(slot, course) else {
                continue;
            };
            let seats = data
                .offerings
                .get(offering)
                .map_or(0, |o| o.seats_available());
            if seats == 0 {
                continue;
            }
            let best = &mut best_per_semester[slot.semester];
            if best.map_or(true, |b| seats > b.seats) {
                *best = Some(SemesterChoice {
                    semester: slot.semester,
                    offering,
                    slot,
                    seats,
                });
            }
        }

        let mut chosen: Option<SemesterChoice> = None;
        for candidate in best_per_semester.into_iter().flatten() {
            let better = match chosen {
                None => true,
                Some(current) => {
                    let (l, cl) = (load[candidate.semester], load[current.semester]);
                    l < cl || (l == cl && candidate.seats > current.seats)
                }
            };
            if better {
                chosen = Some(candidate);
            }
        }
        chosen
    }
}

impl Default for GreedyMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}
