//! Course catalog.
//!
//! Interns course names into [`CourseId`] handles and stores the static
//! metadata behind them.

use std::collections::HashMap;

use crate::models::{Course, CourseId};

/// Course metadata keyed by handle.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    by_name: HashMap<String, CourseId>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course and returns its handle.
    ///
    /// Re-adding a known name replaces its metadata and keeps the handle.
    pub fn add_course(&mut self, course: Course) -> CourseId {
        if let Some(&id) = self.by_name.get(&course.name) {
            self.courses[id.0] = course;
            return id;
        }
        let id = CourseId(self.courses.len());
        self.by_name.insert(course.name.clone(), id);
        self.courses.push(course);
        id
    }

    /// Resolves a course name.
    pub fn lookup(&self, name: &str) -> Option<CourseId> {
        self.by_name.get(name).copied()
    }

    /// Course metadata for a handle.
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(id.0)
    }

    /// Course metadata for a handle known to belong to this catalog.
    ///
    /// # Panics
    /// If the handle came from another catalog. Matching runs only after
    /// validation has confirmed every handle resolves.
    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    /// Whether the handle belongs to this catalog.
    pub fn contains(&self, id: CourseId) -> bool {
        id.0 < self.courses.len()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.courses.iter().enumerate().map(|(i, c)| (CourseId(i), c))
    }
}
