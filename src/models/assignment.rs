//! Assignment model
//!
//! A schedulable unit of work attached to a classroom. Submission is tracked
//! as a single flag shared by the whole class, not per student.

/// An assignment with free-text details and a binary submitted state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Free-text description of the work (e.g., "Homework 1")
    pub details: String,

    /// Whether the assignment has been submitted
    pub submitted: bool,
}

impl Assignment {
    /// Create a new, unsubmitted assignment
    #[must_use]
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
            submitted: false,
        }
    }

    /// Mark this assignment as submitted
    ///
    /// Idempotent: resubmission is not an error and leaves the flag true.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}
