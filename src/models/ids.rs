//! Opaque handles and slot coordinates.
//!
//! Handles are dense indices assigned at load time. They replace the
//! free-form course and student names once data has been interned, so
//! every lookup after loading is a vector index rather than a string hash.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Dense index of this handle.
            #[inline]
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $tag, self.0)
            }
        }
    };
}

handle!(
    /// Handle of a catalog course.
    CourseId,
    "course"
);
handle!(
    /// Handle of an offering in the offering arena.
    OfferingId,
    "offering"
);
handle!(
    /// Handle of a student-course request.
    RequestId,
    "request"
);
handle!(
    /// Handle of a student.
    StudentId,
    "student"
);

/// A (semester, period) coordinate.
///
/// Ordering is semester-major, which is the order the matcher scans
/// candidates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Semester index (0-based).
    pub semester: usize,
    /// Period index within the semester (0-based).
    pub period: usize,
}

impl Slot {
    /// Creates a slot.
    pub const fn new(semester: usize, period: usize) -> Self {
        Self { semester, period }
    }

    /// The period a double-period meeting at this slot also blocks.
    ///
    /// A two-period meeting is anchored on an odd period and runs from
    /// the preceding even period, so only odd periods have a partner.
    pub fn double_period_partner(self) -> Option<Slot> {
        if self.period % 2 == 1 {
            Some(Slot::new(self.semester, self.period - 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}p{}", self.semester, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ordering_is_semester_major() {
        let mut slots = vec![Slot::new(1, 0), Slot::new(0, 7), Slot::new(0, 2)];
        slots.sort();
        assert_eq!(slots, vec![Slot::new(0, 2), Slot::new(0, 7), Slot::new(1, 0)]);
    }

    #[test]
    fn test_double_period_partner() {
        assert_eq!(Slot::new(0, 3).double_period_partner(), Some(Slot::new(0, 2)));
        assert_eq!(Slot::new(2, 1).double_period_partner(), Some(Slot::new(2, 0)));
        assert_eq!(Slot::new(0, 2).double_period_partner(), None);
        assert_eq!(Slot::new(0, 0).double_period_partner(), None);
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(CourseId(4).to_string(), "course#4");
        assert_eq!(Slot::new(1, 5).to_string(), "s1p5");
    }
}
