//! Student model

/// A student enrolled in a classroom
///
/// Carries only an identifier. Uniqueness within a classroom is not
/// enforced; enrolling the same ID twice yields two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Student identifier (e.g., "S1")
    pub id: String,
}

impl Student {
    /// Create a new student with the given identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
