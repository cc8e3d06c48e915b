//! Domain models for classreg
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Classroom`] - a named aggregate of students and assignments
//! - [`Student`] - an enrolled student, identified by free-text ID
//! - [`Assignment`] - a schedulable unit of work with a submitted flag

mod assignment;
mod classroom;
mod student;

pub use assignment::Assignment;
pub use classroom::Classroom;
pub use student::Student;
