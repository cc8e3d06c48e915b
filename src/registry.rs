//! The classroom registry
//!
//! Process-wide owner of all classrooms, keyed by name. The registry is
//! constructed once at startup and passed into the command loop; there is no
//! ambient singleton. Every operation mutates the owned data in place and
//! emits one log record: info on success, warn on failure.

use std::collections::HashMap;

use log::{info, warn};
use thiserror::Error;

use crate::models::{Assignment, Classroom, Student};

/// Errors a registry operation can report
///
/// The `Display` text of each variant is the exact user-facing message the
/// command loop prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The classroom name is already taken
    #[error("Classroom already exists.")]
    AlreadyExists,

    /// The referenced classroom has never been added
    #[error("Classroom does not exist.")]
    ClassroomNotFound,

    /// No assignment in the classroom matches the given details
    #[error("Assignment not found.")]
    AssignmentNotFound,
}

/// Owner of all classrooms, keyed by name
#[derive(Debug, Default)]
pub struct Registry {
    classrooms: HashMap<String, Classroom>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classroom under `name`
    ///
    /// Fails with [`RegistryError::AlreadyExists`] if the name is taken.
    /// Classrooms are never removed once added.
    pub fn add_classroom(&mut self, name: &str) -> Result<(), RegistryError> {
        if self.classrooms.contains_key(name) {
            warn!("Classroom already exists: {name}");
            return Err(RegistryError::AlreadyExists);
        }
        self.classrooms.insert(name.to_string(), Classroom::new(name));
        info!("Classroom added: {name}");
        Ok(())
    }

    /// Enroll a student in an existing classroom
    ///
    /// Duplicate student IDs are accepted; each call appends a new entry.
    pub fn add_student(&mut self, student_id: &str, class_name: &str) -> Result<(), RegistryError> {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            warn!("Classroom does not exist: {class_name}");
            return Err(RegistryError::ClassroomNotFound);
        };
        classroom.add_student(Student::new(student_id));
        info!("Student added: {student_id} to {class_name}");
        Ok(())
    }

    /// Schedule an assignment in an existing classroom
    pub fn schedule_assignment(
        &mut self,
        class_name: &str,
        details: &str,
    ) -> Result<(), RegistryError> {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            warn!("Classroom does not exist: {class_name}");
            return Err(RegistryError::ClassroomNotFound);
        };
        classroom.add_assignment(Assignment::new(details));
        info!("Assignment scheduled: {details} for {class_name}");
        Ok(())
    }

    /// Mark the first assignment matching `details` as submitted
    ///
    /// `student_id` is a label carried into the log record and the caller's
    /// confirmation; it is neither validated against the classroom's roster
    /// nor stored on the assignment. Resubmission is an idempotent success.
    pub fn submit_assignment(
        &mut self,
        student_id: &str,
        class_name: &str,
        details: &str,
    ) -> Result<(), RegistryError> {
        let Some(classroom) = self.classrooms.get_mut(class_name) else {
            warn!("Classroom does not exist: {class_name}");
            return Err(RegistryError::ClassroomNotFound);
        };
        let Some(assignment) = classroom.find_assignment_mut(details) else {
            warn!("Assignment not found: {details} in {class_name}");
            return Err(RegistryError::AssignmentNotFound);
        };
        assignment.mark_submitted();
        info!("Assignment submitted: {details} by Student {student_id}");
        Ok(())
    }

    /// Look up a classroom by name
    #[must_use]
    pub fn classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    /// Number of classrooms in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.classrooms.len()
    }

    /// Whether the registry holds no classrooms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classrooms.is_empty()
    }
}
