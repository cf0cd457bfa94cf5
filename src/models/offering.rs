//! Offering model.
//!
//! An offering is one concrete (semester, period, course) slot with a
//! finite number of seats. Several physical sections taught at the same
//! time are merged into a single offering whose capacity is their sum.

use serde::{Deserialize, Serialize};

use super::{CourseId, RequestId, Slot};

/// A concrete course slot with seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    /// Offered course.
    pub course: CourseId,
    /// When the offering meets.
    pub slot: Slot,
    /// Total seats across all merged sections.
    pub capacity: u32,
    /// Requests bound to this offering, in bind order.
    pub(crate) enrolled: Vec<RequestId>,
}

impl Offering {
    /// Creates an offering with no enrolment.
    pub fn new(course: CourseId, slot: Slot, capacity: u32) -> Self {
        Self {
            course,
            slot,
            capacity,
            enrolled: Vec::new(),
        }
    }

    /// Requests currently bound here.
    pub fn enrolled(&self) -> &[RequestId] {
        &self.enrolled
    }

    /// Number of bound requests.
    #[inline]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    /// Seats still free. Always recomputed from the current state.
    #[inline]
    pub fn seats_available(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled.len() as u32)
    }

    /// Whether at least one seat is free.
    #[inline]
    pub fn has_seat(&self) -> bool {
        self.seats_available() > 0
    }
}
