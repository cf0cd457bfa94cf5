//! Greedy course-enrollment matcher.
//!
//! Binds students' course requests to concrete offerings (a course at a
//! semester and period, with a seat capacity) in one priority-ordered
//! pass. Hard-to-place requests go first; each is bound to the open
//! offering that keeps the student's semesters balanced, or lands in the
//! conflict set.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Offering`, `Request`, `Student`,
//!   handles and `Slot`
//! - **`data`**: Lookup stores (`Catalog`, `OfferingIndex`, `StudentLedger`)
//!   and the `SchedulingData` aggregate that binds requests
//! - **`priority`**: Composable priority rules and the `PriorityRanker`
//! - **`scheduler`**: `GreedyMatcher`, pass outcome, summary metrics
//! - **`validation`**: Input integrity checks (course/student refs, bindings)
//! - **`input`**: Name-keyed records for loading
//! - **`config`**: `MatcherConfig` (TOML)
//!
//! # Example
//!
//! ```
//! use u_enroll::{GreedyMatcher, MatchSummary, MatcherConfig, ScheduleInput};
//!
//! let input = ScheduleInput::from_json_str(r#"{
//!     "courses":   [{ "name": "Math 100" }],
//!     "students":  [{ "name": "S1" }, { "name": "S2" }],
//!     "offerings": [{ "course": "Math 100", "semester": 0, "period": 2, "capacity": 1 }],
//!     "requests":  [{ "student": "S1", "course": "Math 100" },
//!                   { "student": "S2", "course": "Math 100" }]
//! }"#).unwrap();
//!
//! let config = MatcherConfig::default();
//! let mut data = input.into_data(&config).unwrap();
//! let outcome = GreedyMatcher::new(config).run(&mut data).unwrap();
//!
//! let summary = MatchSummary::calculate(&outcome, &data);
//! assert_eq!((summary.placed, summary.unresolved), (1, 1));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod input;
pub mod models;
pub mod priority;
pub mod scheduler;
pub mod validation;

pub use config::{DoublePeriodPolicy, MatcherConfig, TieBreak};
pub use data::SchedulingData;
pub use error::{ConfigError, MatchError, MatchResult};
pub use input::ScheduleInput;
pub use scheduler::{
    placement_records, CancelToken, GreedyMatcher, MatchOutcome, MatchSummary, PlacementRecord,
};
