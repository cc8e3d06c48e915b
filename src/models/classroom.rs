//! Classroom model
//!
//! A classroom aggregates the students enrolled in it and the assignments
//! scheduled for it. Both collections preserve insertion order and allow
//! duplicates.

use super::{Assignment, Student};

/// A named aggregate of students and assignments
#[derive(Debug, Clone, Default)]
pub struct Classroom {
    name: String,
    students: Vec<Student>,
    assignments: Vec<Assignment>,
}

impl Classroom {
    /// Create an empty classroom with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
            assignments: Vec::new(),
        }
    }

    /// The classroom's name (its key in the registry)
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enroll a student; duplicate IDs are accepted
    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Schedule an assignment; duplicate details are accepted
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Enrolled students, in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Scheduled assignments, in insertion order
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Find the first assignment whose details match exactly
    ///
    /// Linear scan in insertion order; matching is case-sensitive on the
    /// whole details string. O(assignments) per lookup, which is fine at
    /// this scale.
    pub fn find_assignment_mut(&mut self, details: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.details == details)
    }
}
