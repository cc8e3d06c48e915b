//! Command-line grammar for the interactive loop
//!
//! One command per line: a case-insensitive keyword followed by
//! whitespace-separated arguments. For `schedule_assignment` and
//! `submit_assignment` the final argument is the remainder of the line
//! verbatim, since assignment details are free text.

use thiserror::Error;

/// Usage string for `add_classroom`
pub const USAGE_ADD_CLASSROOM: &str = "Invalid format. Use: add_classroom [ClassName]";
/// Usage string for `add_student`
pub const USAGE_ADD_STUDENT: &str = "Invalid format. Use: add_student [StudentID] [ClassName]";
/// Usage string for `schedule_assignment`
pub const USAGE_SCHEDULE_ASSIGNMENT: &str =
    "Invalid format. Use: schedule_assignment [ClassName] [AssignmentDetails]";
/// Usage string for `submit_assignment`
pub const USAGE_SUBMIT_ASSIGNMENT: &str =
    "Invalid format. Use: submit_assignment [StudentID] [ClassName] [AssignmentDetails]";

/// A fully parsed command, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new classroom
    AddClassroom {
        /// Classroom name (rest of the line, trimmed)
        name: String,
    },
    /// Enroll a student in a classroom
    AddStudent {
        /// Student identifier
        student_id: String,
        /// Target classroom name
        class_name: String,
    },
    /// Schedule an assignment in a classroom
    ScheduleAssignment {
        /// Target classroom name
        class_name: String,
        /// Free-text assignment details (remainder of the line)
        details: String,
    },
    /// Mark an assignment as submitted
    SubmitAssignment {
        /// Submitting student's identifier (label only, not validated)
        student_id: String,
        /// Target classroom name
        class_name: String,
        /// Details of the assignment to submit (remainder of the line)
        details: String,
    },
    /// Leave the command loop
    Exit,
}

/// Why a line failed to parse
///
/// The `Display` text is the exact message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The keyword is not in the recognized set; carries the keyword for
    /// the log record
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Too few arguments for a recognized keyword; carries the usage string
    #[error("{0}")]
    MissingArguments(&'static str),
}

/// Parse one input line
///
/// Returns `None` for a blank line (silently skipped by the loop). The
/// keyword is matched case-insensitively; argument text keeps its case.
pub fn parse_line(line: &str) -> Option<Result<Command, ParseError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "add_classroom" => parse_add_classroom(rest),
        "add_student" => parse_add_student(rest),
        "schedule_assignment" => parse_schedule_assignment(rest),
        "submit_assignment" => parse_submit_assignment(rest),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    };

    Some(command)
}

fn parse_add_classroom(rest: &str) -> Result<Command, ParseError> {
    let name = rest.trim();
    if name.is_empty() {
        return Err(ParseError::MissingArguments(USAGE_ADD_CLASSROOM));
    }
    Ok(Command::AddClassroom {
        name: name.to_string(),
    })
}

fn parse_add_student(rest: &str) -> Result<Command, ParseError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(student_id), Some(class_name)) => Ok(Command::AddStudent {
            student_id: student_id.to_string(),
            class_name: class_name.to_string(),
        }),
        _ => Err(ParseError::MissingArguments(USAGE_ADD_STUDENT)),
    }
}

fn parse_schedule_assignment(rest: &str) -> Result<Command, ParseError> {
    let Some((class_name, details)) = split_head(rest) else {
        return Err(ParseError::MissingArguments(USAGE_SCHEDULE_ASSIGNMENT));
    };
    Ok(Command::ScheduleAssignment {
        class_name: class_name.to_string(),
        details: details.to_string(),
    })
}

fn parse_submit_assignment(rest: &str) -> Result<Command, ParseError> {
    let Some((student_id, rest)) = split_head(rest) else {
        return Err(ParseError::MissingArguments(USAGE_SUBMIT_ASSIGNMENT));
    };
    let Some((class_name, details)) = split_head(rest) else {
        return Err(ParseError::MissingArguments(USAGE_SUBMIT_ASSIGNMENT));
    };
    Ok(Command::SubmitAssignment {
        student_id: student_id.to_string(),
        class_name: class_name.to_string(),
        details: details.to_string(),
    })
}

/// Split off the first whitespace-delimited token, returning it and the
/// non-empty remainder
fn split_head(input: &str) -> Option<(&str, &str)> {
    let (head, tail) = input.split_once(char::is_whitespace)?;
    let tail = tail.trim_start();
    if tail.is_empty() {
        return None;
    }
    Some((head, tail))
}
